use std::fmt::{self, Debug, Display, Formatter};

use crate::config::Format;
use crate::data::{Contents, MapCell, Pos, Tile};
use crate::state::State;
use crate::vec2d::Vec2d;

pub struct MapFormatter<'a> {
    grid: &'a Vec2d<MapCell>,
    state: Option<&'a State>,
    format: Format,
}

impl<'a> MapFormatter<'a> {
    pub(crate) fn new(grid: &'a Vec2d<MapCell>, state: Option<&'a State>, format: Format) -> Self {
        Self {
            grid,
            state,
            format,
        }
    }

    fn write_to_formatter(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut state_grid = self.grid.scratchpad_with_default(Contents::Empty);
        if let Some(state) = self.state {
            for &b in state.boxes() {
                state_grid[b] = Contents::Box;
            }
            state_grid[state.player_pos] = Contents::Player;
        }

        for y in 0..self.grid.height() {
            // don't print trailing empty cells to match the input level strings
            let mut last_non_empty = 0;
            for x in 0..self.grid.width() {
                let pos = Pos::new(x, y);
                if self.grid[pos] != MapCell::Empty || state_grid[pos] != Contents::Empty {
                    last_non_empty = x;
                }
            }

            for x in 0..=last_non_empty.min(self.grid.width() - 1) {
                let pos = Pos::new(x, y);
                let tile = Tile::new(self.grid[pos], state_grid[pos]);
                match self.format {
                    Format::Custom => Self::write_tile_custom(tile, f)?,
                    Format::Xsb => Self::write_tile_xsb(tile, f)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn write_tile_custom(tile: Tile, f: &mut Formatter<'_>) -> fmt::Result {
        match tile {
            Tile::Wall => write!(f, "<>"),
            Tile::Free => write!(f, "  "),
            Tile::Goal => write!(f, " _"),
            Tile::BoxOnFree => write!(f, "B "),
            Tile::BoxOnGoal => write!(f, "B_"),
            Tile::PlayerOnFree => write!(f, "P "),
            Tile::PlayerOnGoal => write!(f, "P_"),
        }
    }

    fn write_tile_xsb(tile: Tile, f: &mut Formatter<'_>) -> fmt::Result {
        match tile {
            Tile::Wall => write!(f, "#"),
            Tile::Free => write!(f, " "),
            Tile::Goal => write!(f, "."),
            Tile::BoxOnFree => write!(f, "$"),
            Tile::BoxOnGoal => write!(f, "*"),
            Tile::PlayerOnFree => write!(f, "@"),
            Tile::PlayerOnGoal => write!(f, "+"),
        }
    }
}

impl<'a> Display for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_to_formatter(f)
    }
}

impl<'a> Debug for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
