use std::fmt::{self, Debug, Display, Formatter};

use crate::config::Format;
use crate::map::GoalMap;
use crate::moves::Moves;
use crate::state::State;

/// Replays a solution and renders the board after every push
/// (or after every move if `include_steps` is set).
pub struct SolutionFormatter<'a> {
    map: &'a GoalMap,
    initial_state: &'a State,
    moves: &'a Moves,
    include_steps: bool,
    format: Format,
}

impl<'a> SolutionFormatter<'a> {
    pub(crate) fn new(
        map: &'a GoalMap,
        initial_state: &'a State,
        moves: &'a Moves,
        include_steps: bool,
        format: Format,
    ) -> Self {
        Self {
            map,
            initial_state,
            moves,
            include_steps,
            format,
        }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}",
            self.map.format_with_state(self.format, self.initial_state)
        )?;
        let mut state = self.initial_state.clone();
        for &action in self.moves {
            // moves from a different level would corrupt the state
            if !action.is_possible(self.map, &state) {
                return writeln!(f, "Impossible move: {}", action);
            }
            action.perform(&mut state);
            if action.is_push() || self.include_steps {
                writeln!(f, "{}", self.map.format_with_state(self.format, &state))?;
            }
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use crate::data::Dir;
    use crate::level::Level;
    use crate::moves::{Action, Moves};

    use super::*;

    #[test]
    fn pushes_only() {
        let level: Level = "#@$ .#".parse().unwrap();
        let moves = Moves::new(vec![Action::Push(Dir::Right), Action::Push(Dir::Right)]);
        let expected = "#@$ .#\n\n# @$.#\n\n#  @*#\n\n";
        assert_eq!(
            level.format_solution(Format::Xsb, &moves, false).to_string(),
            expected
        );
    }

    #[test]
    fn with_steps() {
        let level: Level = "#@ $.#".parse().unwrap();
        let moves = Moves::new(vec![Action::Move(Dir::Right), Action::Push(Dir::Right)]);
        let expected = "#@ $.#\n\n# @$.#\n\n#  @*#\n\n";
        assert_eq!(
            level.format_solution(Format::Xsb, &moves, true).to_string(),
            expected
        );
        let expected = "#@ $.#\n\n#  @*#\n\n";
        assert_eq!(
            level.format_solution(Format::Xsb, &moves, false).to_string(),
            expected
        );
    }
}
