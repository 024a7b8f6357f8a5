use crate::data::Pos;

/// The dynamic part of a board - everything that can change by playing.
///
/// Walls and goals are constant per level and live in `GoalMap`
/// so comparing and hashing states only touches the player and the boxes.
#[derive(Debug, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct State {
    pub player_pos: Pos,
    // kept sorted so the same arrangement reached with boxes in a different order is one state
    pub(crate) boxes: Vec<Pos>,
}

impl State {
    pub fn new(player_pos: Pos, mut boxes: Vec<Pos>) -> State {
        boxes.sort();
        State { player_pos, boxes }
    }

    pub fn boxes(&self) -> &[Pos] {
        &self.boxes
    }

    pub fn has_box(&self, pos: Pos) -> bool {
        self.boxes.binary_search(&pos).is_ok()
    }

    /// Moves the box at `from` to `to`, keeping the boxes sorted.
    pub(crate) fn move_box(&mut self, from: Pos, to: Pos) {
        let index = self
            .boxes
            .binary_search(&from)
            .unwrap_or_else(|_| panic!("No box at {:?}", from));
        self.boxes.remove(index);
        let index = self.boxes.binary_search(&to).unwrap_or_else(|i| i);
        self.boxes.insert(index, to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_order_does_not_matter() {
        let a = State::new(Pos::new(1, 1), vec![Pos::new(3, 1), Pos::new(2, 2)]);
        let b = State::new(Pos::new(1, 1), vec![Pos::new(2, 2), Pos::new(3, 1)]);
        assert_eq!(a, b);
    }

    #[test]
    fn moving_boxes_keeps_order() {
        let mut state = State::new(
            Pos::new(0, 0),
            vec![Pos::new(1, 1), Pos::new(2, 1), Pos::new(3, 1)],
        );
        state.move_box(Pos::new(1, 1), Pos::new(4, 1));
        assert_eq!(
            state,
            State::new(
                Pos::new(0, 0),
                vec![Pos::new(4, 1), Pos::new(2, 1), Pos::new(3, 1)]
            )
        );
        assert!(state.has_box(Pos::new(4, 1)));
        assert!(!state.has_box(Pos::new(1, 1)));
    }
}
