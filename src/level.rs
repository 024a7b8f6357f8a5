use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::fs;
use std::path::Path;

use crate::config::Format;
use crate::data::{Pos, Tile};
use crate::map::{GoalMap, OutOfBounds};
use crate::map_formatter::MapFormatter;
use crate::moves::Moves;
use crate::parser::{self, ParserErr};
use crate::solution_formatter::SolutionFormatter;
use crate::state::State;
use crate::LoadLevel;

/// A board snapshot - the constant layout together with the current positions.
#[derive(Clone, PartialEq, Eq)]
pub struct Level {
    pub map: GoalMap,
    pub state: State,
}

impl Level {
    pub fn new(map: GoalMap, state: State) -> Self {
        Level { map, state }
    }

    /// Parses a level in the given format, `str::parse` detects the format instead.
    pub fn parse_format(text: &str, format: Format) -> Result<Self, ParserErr> {
        parser::parse_format(text, format)
    }

    pub fn width(&self) -> i32 {
        self.map.width()
    }

    pub fn height(&self) -> i32 {
        self.map.height()
    }

    pub fn tile(&self, x: i32, y: i32) -> Result<Tile, OutOfBounds> {
        self.map.tile(&self.state, Pos::new(x, y))
    }

    pub fn is_victory(&self) -> bool {
        self.map.is_victory(&self.state)
    }

    pub fn xsb(&self) -> MapFormatter<'_> {
        self.format(Format::Xsb)
    }

    pub fn custom(&self) -> MapFormatter<'_> {
        self.format(Format::Custom)
    }

    pub fn format(&self, format: Format) -> MapFormatter<'_> {
        self.map.format_with_state(format, &self.state)
    }

    pub fn format_solution<'a>(
        &'a self,
        format: Format,
        moves: &'a Moves,
        include_steps: bool,
    ) -> SolutionFormatter<'a> {
        SolutionFormatter::new(&self.map, &self.state, moves, include_steps, format)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.xsb())
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.xsb())
    }
}

impl<P: AsRef<Path>> LoadLevel for P {
    fn load_level(&self) -> Result<Level, Box<dyn Error>> {
        let level = fs::read_to_string(self)?;
        Ok(level.parse()?)
    }
}
