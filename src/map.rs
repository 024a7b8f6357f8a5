use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use crate::config::Format;
use crate::data::{Contents, MapCell, Pos, Tile};
use crate::map_formatter::MapFormatter;
use crate::state::State;
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfBounds {
    pub pos: Pos,
    pub width: i32,
    pub height: i32,
}

impl Display for OutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position {:?} is outside of the {}x{} grid",
            self.pos, self.width, self.height
        )
    }
}

impl Error for OutOfBounds {}

/// The constant part of a level - walls and goals.
#[derive(Clone, PartialEq, Eq)]
pub struct GoalMap {
    pub grid: Vec2d<MapCell>,
    pub goals: Vec<Pos>,
}

impl GoalMap {
    pub fn new(grid: Vec2d<MapCell>, goals: Vec<Pos>) -> Self {
        GoalMap { grid, goals }
    }

    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    /// Anything outside the grid blocks movement just like a wall.
    pub fn is_wall(&self, pos: Pos) -> bool {
        match self.grid.get(pos) {
            Some(&cell) => cell == MapCell::Wall,
            None => true,
        }
    }

    pub fn is_goal(&self, pos: Pos) -> bool {
        self.grid.get(pos) == Some(&MapCell::Goal)
    }

    pub fn tile(&self, state: &State, pos: Pos) -> Result<Tile, OutOfBounds> {
        let cell = *self.grid.get(pos).ok_or(OutOfBounds {
            pos,
            width: self.width(),
            height: self.height(),
        })?;
        let contents = if state.player_pos == pos {
            Contents::Player
        } else if state.has_box(pos) {
            Contents::Box
        } else {
            Contents::Empty
        };
        Ok(Tile::new(cell, contents))
    }

    /// Every goal has a box on it.
    pub fn is_victory(&self, state: &State) -> bool {
        self.goals.iter().all(|&goal| state.has_box(goal))
    }

    pub fn xsb(&self) -> MapFormatter<'_> {
        MapFormatter::new(&self.grid, None, Format::Xsb)
    }

    pub fn format_with_state<'a>(&'a self, format: Format, state: &'a State) -> MapFormatter<'a> {
        MapFormatter::new(&self.grid, Some(state), format)
    }
}

impl Display for GoalMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.xsb())
    }
}

impl Debug for GoalMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
