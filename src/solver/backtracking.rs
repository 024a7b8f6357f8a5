use crate::moves::Moves;
use crate::solver::a_star::{NodeInfo, StateId};

/// Follows predecessor links from `final_id` back to the initial state
/// and returns the actions in the order they were performed.
pub(crate) fn reconstruct_moves(nodes: &[NodeInfo], final_id: StateId) -> Moves {
    let mut actions = Vec::with_capacity(nodes[final_id].dist as usize);
    let mut id = final_id;
    while let Some((prev_id, action)) = nodes[id].prev {
        actions.push(action);
        id = prev_id;
    }
    actions.reverse();
    Moves::new(actions)
}
