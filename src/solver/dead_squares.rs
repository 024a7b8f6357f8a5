use std::fmt::{self, Debug, Display, Formatter};

use crate::config::DeadSquareMethod;
use crate::data::{MapCell, Pos, DIRECTIONS};
use crate::map::GoalMap;
use crate::vec2d::Vec2d;

/// Cells from which a box can never reach any goal.
///
/// Depends only on walls and goals so it's computed once per level.
#[derive(Clone, PartialEq, Eq)]
pub struct DeadSquares(Vec2d<bool>);

impl DeadSquares {
    #[inline(never)] // this is called only once and this way it's easier to see in callgrind
    pub fn detect(map: &GoalMap, method: DeadSquareMethod) -> Self {
        match method {
            DeadSquareMethod::Reachability => Self::pull_reachability(map),
            DeadSquareMethod::Corners => Self::corners(map),
            DeadSquareMethod::Disabled => DeadSquares(map.grid.scratchpad()),
        }
    }

    /// Puts a box on every goal and pulls it around.
    /// Pulling is the reverse of pushing so whatever can be pulled to can be pushed from.
    /// Other boxes and the player's path are ignored which only makes the result more permissive.
    fn pull_reachability(map: &GoalMap) -> Self {
        let mut live = map.grid.scratchpad();

        for &goal in &map.goals {
            if live[goal] {
                continue;
            }
            live[goal] = true;

            let mut to_visit = vec![goal];
            while let Some(box_pos) = to_visit.pop() {
                for &dir in &DIRECTIONS {
                    // the player stands at `new_box_pos` and steps back to `player_pos`
                    let new_box_pos = box_pos + dir;
                    let player_pos = new_box_pos + dir;
                    if map.is_wall(new_box_pos) || map.is_wall(player_pos) || live[new_box_pos] {
                        continue;
                    }
                    live[new_box_pos] = true;
                    to_visit.push(new_box_pos);
                }
            }
        }

        let mut dead = map.grid.scratchpad();
        for pos in map.grid.positions() {
            dead[pos] = map.grid[pos] != MapCell::Wall && !live[pos];
        }
        DeadSquares(dead)
    }

    /// Cheaper but weaker - only finds cells with walls on two perpendicular sides.
    fn corners(map: &GoalMap) -> Self {
        let mut dead = map.grid.scratchpad();
        for pos in map.grid.positions() {
            if map.grid[pos] != MapCell::Empty {
                continue;
            }
            let [up, right, down, left] = pos.neighbors();
            let (up, right, down, left) = (
                map.is_wall(up),
                map.is_wall(right),
                map.is_wall(down),
                map.is_wall(left),
            );
            dead[pos] = (up || down) && (left || right);
        }
        DeadSquares(dead)
    }

    pub fn is_dead(&self, pos: Pos) -> bool {
        self.0.get(pos) == Some(&true)
    }

    pub fn contains_any(&self, boxes: &[Pos]) -> bool {
        boxes.iter().any(|&b| self.is_dead(b))
    }

    pub fn count(&self) -> usize {
        self.0.positions().filter(|&pos| self.0[pos]).count()
    }
}

impl Display for DeadSquares {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Debug for DeadSquares {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use crate::level::Level;

    fn detect(level: &str, method: DeadSquareMethod) -> String {
        let level: Level = level.parse().unwrap();
        DeadSquares::detect(&level.map, method).to_string()
    }

    #[test]
    fn dead_ends() {
        let level = r"
#####
##@##
##$##
#  .#
#####";
        let expected = r"
00000
00100
00000
01000
00000
"
        .trim_start();
        assert_eq!(detect(level, DeadSquareMethod::Reachability), expected);
    }

    #[test]
    fn corners_only() {
        let level = r"
######
#@   #
#$ . #
#    #
######";
        let expected = r"
000000
010010
000000
010010
000000
"
        .trim_start();
        assert_eq!(detect(level, DeadSquareMethod::Corners), expected);
    }

    #[test]
    fn deeper_pockets() {
        // the whole bottom row and both sides are dead but only the 4 corners are found by the fallback
        let level = r"
#######
#  .  #
#@ $  #
#     #
#######";
        let reachability = r"
0000000
0100010
0100010
0111110
0000000
"
        .trim_start();
        let corners = r"
0000000
0100010
0000000
0100010
0000000
"
        .trim_start();
        assert_eq!(detect(level, DeadSquareMethod::Reachability), reachability);
        assert_eq!(detect(level, DeadSquareMethod::Corners), corners);
    }

    #[test]
    fn unreachable_goal_area() {
        // a goal nothing can be pushed into - everything except the goal is dead, no panic
        let level = r"
#####
#@$##
##.##
#####";
        let expected = r"
00000
01100
00000
00000
"
        .trim_start();
        assert_eq!(detect(level, DeadSquareMethod::Reachability), expected);
    }

    #[test]
    fn disabled() {
        let level = r"
####
#@$#
#.##
####";
        assert_eq!(
            detect(level, DeadSquareMethod::Disabled),
            "0000\n0000\n0000\n0000\n"
        );
    }

    fn random_map(rng: &mut ChaCha8Rng) -> GoalMap {
        let width = rng.gen_range(1..8);
        let height = rng.gen_range(1..8);
        let rows: Vec<Vec<MapCell>> = (0..height)
            .map(|_| {
                (0..width)
                    .map(|_| match rng.gen_range(0..10) {
                        0..=2 => MapCell::Wall,
                        3 => MapCell::Goal,
                        _ => MapCell::Empty,
                    })
                    .collect()
            })
            .collect();
        let grid = Vec2d::new(&rows, MapCell::Empty);
        let goals = grid
            .positions()
            .filter(|&pos| grid[pos] == MapCell::Goal)
            .collect();
        GoalMap::new(grid, goals)
    }

    #[test]
    fn random_layouts() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5ee_d5);
        for _ in 0..500 {
            let map = random_map(&mut rng);
            for &method in &[DeadSquareMethod::Reachability, DeadSquareMethod::Corners] {
                let dead = DeadSquares::detect(&map, method);

                // never a goal, never a wall
                for &goal in &map.goals {
                    assert!(!dead.is_dead(goal), "{}\n{}", map, dead);
                }
                for pos in map.grid.positions() {
                    if map.grid[pos] == MapCell::Wall {
                        assert!(!dead.is_dead(pos));
                    }
                }

                // idempotent
                assert_eq!(dead, DeadSquares::detect(&map, method));
            }
        }
    }

    #[test]
    fn corners_are_subset_of_reachability() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..500 {
            let map = random_map(&mut rng);
            if map.goals.is_empty() {
                continue;
            }
            let reachability = DeadSquares::detect(&map, DeadSquareMethod::Reachability);
            let corners = DeadSquares::detect(&map, DeadSquareMethod::Corners);
            for pos in map.grid.positions() {
                if corners.is_dead(pos) {
                    assert!(reachability.is_dead(pos), "{}\n{}", map, reachability);
                }
            }
        }
    }
}
