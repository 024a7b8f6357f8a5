use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::time::Duration;

use prettytable::{format, Cell, Row, Table};
use separator::Separatable;

use crate::moves::Action;
use crate::solver::heuristics::Cost;

/// Index of a state interned in the search arena.
pub(crate) type StateId = usize;

/// What the search knows about an interned state.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NodeInfo {
    /// Best known number of actions from the initial state.
    pub(crate) dist: Cost,
    pub(crate) prev: Option<(StateId, Action)>,
}

/// A frontier entry. The same state can be queued multiple times,
/// entries with `dist` worse than the recorded one are stale and skipped when popped.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchNode {
    pub(crate) id: StateId,
    pub(crate) dist: Cost,
    pub(crate) cost: Cost,
    seq: u64,
}

impl SearchNode {
    pub(crate) fn new(id: StateId, dist: Cost, h: Cost, seq: u64) -> Self {
        SearchNode {
            id,
            dist,
            cost: dist + h,
            seq,
        }
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // intentionally reversed for BinaryHeap
        // equal cost - the one queued first wins
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchNode {}

#[derive(Clone, Default)]
pub struct Stats {
    created_states: Vec<usize>,
    visited_states: Vec<usize>,
    duplicate_states: Vec<usize>,
    pruned: usize,
    elapsed: Duration,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats::default()
    }

    pub fn total_created(&self) -> usize {
        self.created_states.iter().sum()
    }

    pub fn total_unique_visited(&self) -> usize {
        self.visited_states.iter().sum()
    }

    pub fn total_reached_duplicates(&self) -> usize {
        self.duplicate_states.iter().sum()
    }

    /// Successors thrown away because they pushed a box onto a dead square.
    pub fn total_pruned(&self) -> usize {
        self.pruned
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub(crate) fn add_created(&mut self, node: &SearchNode) -> bool {
        Self::add(&mut self.created_states, node)
    }

    pub(crate) fn add_unique_visited(&mut self, node: &SearchNode) -> bool {
        Self::add(&mut self.visited_states, node)
    }

    pub(crate) fn add_reached_duplicate(&mut self, node: &SearchNode) -> bool {
        Self::add(&mut self.duplicate_states, node)
    }

    pub(crate) fn add_pruned(&mut self) {
        self.pruned += 1;
    }

    pub(crate) fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }

    fn add(counts: &mut Vec<usize>, node: &SearchNode) -> bool {
        let mut ret = false;
        let depth = node.dist as usize;

        // while because some depths might be skipped
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "unique visited by depth: {:?}", self.visited_states)?;
        writeln!(f, "total created: {}", separated(self.total_created()))?;
        writeln!(
            f,
            "total reached duplicates: {}",
            separated(self.total_reached_duplicates())
        )?;
        writeln!(
            f,
            "total unique visited: {}",
            separated(self.total_unique_visited())
        )?;
        writeln!(f, "total pruned: {}", separated(self.total_pruned()))
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let visited = self.total_unique_visited();
        let duplicates = self.total_reached_duplicates();
        let left = created - visited - duplicates;
        writeln!(f, "States created total: {}", separated(created))?;
        writeln!(f, "Unique visited total: {}", separated(visited))?;
        writeln!(f, "Reached duplicates total: {}", separated(duplicates))?;
        writeln!(f, "Created but not reached total: {}", separated(left))?;
        writeln!(f, "Pruned by dead squares: {}", separated(self.pruned))?;
        writeln!(f, "Elapsed: {} ms", separated(self.elapsed.as_millis() as usize))?;
        writeln!(f)?;

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_CLEAN);
        table.set_titles(Row::new(vec![
            Cell::new("Depth"),
            Cell::new("Created"),
            Cell::new("Unique"),
            Cell::new("Duplicates"),
            Cell::new("Unknown (not reached)"),
        ]));
        // created_states is the longest vec
        for (depth, &created) in self.created_states.iter().enumerate() {
            let visited = self.visited_states.get(depth).cloned().unwrap_or(0);
            let duplicates = self.duplicate_states.get(depth).cloned().unwrap_or(0);
            let left = created - visited - duplicates;
            table.add_row(Row::new(vec![
                Cell::new(&format!("{}:", depth)),
                Cell::new(&separated(created)),
                Cell::new(&separated(visited)),
                Cell::new(&separated(duplicates)),
                Cell::new(&separated(left)),
            ]));
        }
        write!(f, "{}", table)
    }
}

// separator doesn't cover every integer type
fn separated(n: usize) -> String {
    (n as u64).separated_string()
}

#[cfg(test)]
mod tests {
    use std::collections::BinaryHeap;

    use super::*;

    #[test]
    fn frontier_order() {
        let mut heap = BinaryHeap::new();
        heap.push(SearchNode::new(0, 0, 5, 0));
        heap.push(SearchNode::new(1, 2, 1, 1));
        heap.push(SearchNode::new(2, 1, 2, 2));
        heap.push(SearchNode::new(3, 0, 4, 3));

        let order: Vec<_> = std::iter::from_fn(|| heap.pop()).map(|n| n.id).collect();
        // 1 and 2 have the same cost, 1 was queued first
        assert_eq!(order, vec![1, 2, 3, 0]);
    }

    #[test]
    fn counting_by_depth() {
        let mut stats = Stats::new();
        assert!(stats.add_created(&SearchNode::new(0, 0, 3, 0)));
        assert!(stats.add_created(&SearchNode::new(1, 2, 1, 1)));
        assert!(!stats.add_created(&SearchNode::new(2, 1, 1, 2)));
        assert!(stats.add_unique_visited(&SearchNode::new(0, 0, 3, 0)));
        stats.add_reached_duplicate(&SearchNode::new(1, 2, 1, 1));
        stats.add_pruned();

        assert_eq!(stats.total_created(), 3);
        assert_eq!(stats.total_unique_visited(), 1);
        assert_eq!(stats.total_reached_duplicates(), 1);
        assert_eq!(stats.total_pruned(), 1);

        let out = stats.to_string();
        assert!(out.contains("States created total: 3"));
        assert!(out.contains("Created but not reached total: 1"));
    }
}
