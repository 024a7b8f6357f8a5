use std::fmt::{self, Debug, Display, Formatter};

use arrayvec::ArrayVec;

use crate::data::{Dir, DIRECTIONS};
use crate::map::GoalMap;
use crate::state::State;

// Terminology:
// move = changing player position by one cell
// push = a move that changes a box position
// step = a move that doesn't change a box position

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Move(Dir),
    Push(Dir),
}

impl Action {
    pub fn direction(self) -> Dir {
        match self {
            Action::Move(dir) | Action::Push(dir) => dir,
        }
    }

    pub fn is_push(self) -> bool {
        match self {
            Action::Move(_) => false,
            Action::Push(_) => true,
        }
    }

    pub fn is_possible(self, map: &GoalMap, state: &State) -> bool {
        let dest = state.player_pos + self.direction();
        if map.is_wall(dest) {
            return false;
        }
        match self {
            Action::Move(_) => !state.has_box(dest),
            Action::Push(dir) => {
                let push_dest = dest + dir;
                state.has_box(dest) && !map.is_wall(push_dest) && !state.has_box(push_dest)
            }
        }
    }

    /// All legal actions - steps first, then pushes, each in `DIRECTIONS` order.
    pub fn possible(map: &GoalMap, state: &State) -> ArrayVec<Action, 8> {
        let mut actions = ArrayVec::new();
        for &dir in &DIRECTIONS {
            let action = Action::Move(dir);
            if action.is_possible(map, state) {
                actions.push(action);
            }
        }
        for &dir in &DIRECTIONS {
            let action = Action::Push(dir);
            if action.is_possible(map, state) {
                actions.push(action);
            }
        }
        actions
    }

    /// Applies the action in place. The caller must check it's possible first.
    pub fn perform(self, state: &mut State) {
        let dir = self.direction();
        let new_player_pos = state.player_pos + dir;
        if self.is_push() {
            state.move_box(new_player_pos, new_player_pos + dir);
        }
        state.player_pos = new_player_pos;
    }

    /// Exact inverse of `perform`.
    pub fn undo(self, state: &mut State) {
        let dir = self.direction();
        let old_player_pos = state.player_pos - dir;
        if self.is_push() {
            let box_pos = state.player_pos + dir;
            state.move_box(box_pos, state.player_pos);
        }
        state.player_pos = old_player_pos;
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Action::Move(dir) => write!(f, "{}", dir),
            Action::Push(dir) => write!(f, "{}", dir.to_string().to_uppercase()),
        }
    }
}

impl Debug for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// A solution - actions in the order they should be played.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Action>);

impl Moves {
    pub(crate) fn new(moves: Vec<Action>) -> Self {
        Moves(moves)
    }

    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    pub fn push_cnt(&self) -> usize {
        self.0.iter().filter(|a| a.is_push()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn dirs(&self) -> Vec<Dir> {
        self.0.iter().map(|a| a.direction()).collect()
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Action> {
        self.0.iter()
    }
}

impl IntoIterator for Moves {
    type Item = Action;
    type IntoIter = ::std::vec::IntoIter<Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Action;
    type IntoIter = ::std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for action in self {
            write!(f, "{}", action)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
