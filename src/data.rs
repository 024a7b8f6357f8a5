use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapCell {
    Wall,
    Empty,
    Goal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contents {
    Empty,
    Box,
    Player,
}

/// A single board tile - the static cell and what currently stands on it.
///
/// Walls never hold anything so there are only 7 combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Free,
    Goal,
    BoxOnFree,
    BoxOnGoal,
    PlayerOnFree,
    PlayerOnGoal,
}

impl Tile {
    pub(crate) fn new(cell: MapCell, contents: Contents) -> Self {
        match (cell, contents) {
            (MapCell::Wall, Contents::Empty) => Tile::Wall,
            (MapCell::Wall, _) => unreachable!("Wall with non-empty contents"),
            (MapCell::Empty, Contents::Empty) => Tile::Free,
            (MapCell::Empty, Contents::Box) => Tile::BoxOnFree,
            (MapCell::Empty, Contents::Player) => Tile::PlayerOnFree,
            (MapCell::Goal, Contents::Empty) => Tile::Goal,
            (MapCell::Goal, Contents::Box) => Tile::BoxOnGoal,
            (MapCell::Goal, Contents::Player) => Tile::PlayerOnGoal,
        }
    }

    pub fn is_wall(self) -> bool {
        self == Tile::Wall
    }

    pub fn is_goal(self) -> bool {
        match self {
            Tile::Goal | Tile::BoxOnGoal | Tile::PlayerOnGoal => true,
            _ => false,
        }
    }

    pub fn has_box(self) -> bool {
        self == Tile::BoxOnFree || self == Tile::BoxOnGoal
    }

    pub fn has_player(self) -> bool {
        self == Tile::PlayerOnFree || self == Tile::PlayerOnGoal
    }
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Pos {
        Pos { x, y }
    }

    pub fn dist(self, other: Pos) -> u32 {
        ((self.x - other.x).abs() + (self.y - other.y).abs()) as u32
    }

    pub(crate) fn neighbors(self) -> [Pos; 4] {
        [self + Dir::Up, self + Dir::Right, self + Dir::Down, self + Dir::Left]
    }
}

impl fmt::Debug for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Right, Dir::Down, Dir::Left];

impl Dir {
    pub fn inverse(self) -> Self {
        match self {
            Dir::Up => Dir::Down,
            Dir::Right => Dir::Left,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
        }
    }

    /// Unit vector as `(dx, dy)`, y grows downwards.
    pub fn vector(self) -> (i32, i32) {
        match self {
            Dir::Up => (0, -1),
            Dir::Right => (1, 0),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Dir::Up => "UP",
            Dir::Right => "RIGHT",
            Dir::Down => "DOWN",
            Dir::Left => "LEFT",
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "u"),
            Dir::Right => write!(f, "r"),
            Dir::Down => write!(f, "d"),
            Dir::Left => write!(f, "l"),
        }
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        let (dx, dy) = dir.vector();
        Pos::new(self.x + dx, self.y + dy)
    }
}

impl Sub<Dir> for Pos {
    type Output = Pos;

    fn sub(self, dir: Dir) -> Pos {
        self + dir.inverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions() {
        let pos = Pos::new(3, 5);
        assert_eq!(pos + Dir::Up, Pos::new(3, 4));
        assert_eq!(pos + Dir::Right, Pos::new(4, 5));
        assert_eq!(pos - Dir::Right, Pos::new(2, 5));
        for &dir in &DIRECTIONS {
            assert_eq!(pos + dir + dir.inverse(), pos);
            assert_eq!(pos.dist(pos + dir), 1);
        }
        assert_eq!(Pos::new(0, 0).dist(Pos::new(-2, 3)), 5);
    }

    #[test]
    fn tiles() {
        assert!(Tile::new(MapCell::Wall, Contents::Empty).is_wall());
        assert!(Tile::new(MapCell::Goal, Contents::Box).is_goal());
        assert!(Tile::new(MapCell::Goal, Contents::Box).has_box());
        assert!(Tile::new(MapCell::Empty, Contents::Player).has_player());
        assert!(!Tile::new(MapCell::Empty, Contents::Player).is_goal());
        assert_eq!(Tile::new(MapCell::Goal, Contents::Player), Tile::PlayerOnGoal);
    }
}
