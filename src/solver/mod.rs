mod a_star;
mod backtracking;
pub mod dead_squares;
mod heuristics;

use std::collections::BinaryHeap;
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::time::{Duration, Instant};

use fnv::FnvHashMap;
use typed_arena::Arena;

use crate::config::{Budget, Config, DeadSquareMethod, HeuristicKind};
use crate::data::{MapCell, Pos};
use crate::level::Level;
use crate::map::GoalMap;
use crate::moves::{Action, Moves};
use crate::state::State;
use crate::Solve;

use self::a_star::{NodeInfo, SearchNode, StateId};
use self::backtracking::reconstruct_moves;
use self::dead_squares::DeadSquares;
use self::heuristics::estimate;

pub use self::a_star::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    OutOfBounds(Pos),
    PlayerOnWall,
    PlayerOnBox,
    BoxOnWall(Pos),
    DuplicateBox(Pos),
    BoxesGoals,
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::OutOfBounds(pos) => write!(f, "Position {:?} is outside of the map", pos),
            SolverErr::PlayerOnWall => write!(f, "Player is inside a wall"),
            SolverErr::PlayerOnBox => write!(f, "Player is standing on a box"),
            SolverErr::BoxOnWall(pos) => write!(f, "Box at {:?} is inside a wall", pos),
            SolverErr::DuplicateBox(pos) => write!(f, "More than one box at {:?}", pos),
            SolverErr::BoxesGoals => write!(f, "Different number of boxes and goals"),
        }
    }
}

impl Error for SolverErr {}

/// Which limit stopped the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    Visited(usize),
    Time(Duration),
}

impl Display for Limit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Limit::Visited(max) => write!(f, "visited {} states", max),
            Limit::Time(limit) => write!(f, "ran for {} ms", limit.as_millis()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved(Moves),
    /// The whole reachable state space (after pruning) was searched.
    Unsolvable,
    /// Inconclusive - the level might still have a solution.
    BudgetExceeded(Limit),
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Solved(moves) => write!(f, "{}", moves),
            Outcome::Unsolvable => write!(f, "No solution"),
            Outcome::BudgetExceeded(limit) => write!(f, "Gave up after the search {}", limit),
        }
    }
}

pub struct SolverOk {
    pub outcome: Outcome,
    pub stats: Stats,
    pub heuristic: HeuristicKind,
    pub dead_squares: DeadSquareMethod,
}

impl SolverOk {
    fn new(
        outcome: Outcome,
        stats: Stats,
        heuristic: HeuristicKind,
        dead_squares: DeadSquareMethod,
    ) -> Self {
        Self {
            outcome,
            stats,
            heuristic,
            dead_squares,
        }
    }

    pub fn moves(&self) -> Option<&Moves> {
        match self.outcome {
            Outcome::Solved(ref moves) => Some(moves),
            _ => None,
        }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Heuristic: {}, dead squares: {}",
            self.heuristic, self.dead_squares
        )?;
        match self.outcome {
            Outcome::Solved(ref moves) => writeln!(
                f,
                "Solution: {} moves, {} pushes",
                moves.move_cnt(),
                moves.push_cnt()
            )?,
            ref outcome => writeln!(f, "{}", outcome)?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Level {
    fn solve(&self, config: &Config) -> Result<SolverOk, SolverErr> {
        solve(self, config)
    }
}

/// Everything that stays the same during the whole search.
struct StaticData<'a> {
    map: &'a GoalMap,
    dead_squares: DeadSquares,
    heuristic: HeuristicKind,
}

fn solve(level: &Level, config: &Config) -> Result<SolverOk, SolverErr> {
    debug!("Processing level...");
    let static_data = process_level(level, config)?;
    debug!("Processed level");

    let (outcome, stats) = search(&static_data, &level.state, config.budget);
    match outcome {
        Outcome::Solved(ref moves) => info!(
            "Solved: {} moves, {} pushes, {} states visited",
            moves.move_cnt(),
            moves.push_cnt(),
            stats.total_unique_visited()
        ),
        Outcome::Unsolvable => info!(
            "No solution after visiting {} states",
            stats.total_unique_visited()
        ),
        Outcome::BudgetExceeded(limit) => info!("Search stopped, it {}", limit),
    }
    Ok(SolverOk::new(
        outcome,
        stats,
        config.heuristic,
        config.dead_squares,
    ))
}

fn process_level<'a>(level: &'a Level, config: &Config) -> Result<StaticData<'a>, SolverErr> {
    // levels can be built by hand through `Level::new`, nothing is guaranteed here
    let map = &level.map;
    let state = &level.state;

    let player_pos = state.player_pos;
    match map.grid.get(player_pos) {
        None => return Err(SolverErr::OutOfBounds(player_pos)),
        Some(&MapCell::Wall) => return Err(SolverErr::PlayerOnWall),
        Some(_) => {}
    }
    for &goal in &map.goals {
        if !map.grid.contains(goal) {
            return Err(SolverErr::OutOfBounds(goal));
        }
    }
    for (i, &box_pos) in state.boxes.iter().enumerate() {
        match map.grid.get(box_pos) {
            None => return Err(SolverErr::OutOfBounds(box_pos)),
            Some(&MapCell::Wall) => return Err(SolverErr::BoxOnWall(box_pos)),
            Some(_) => {}
        }
        if box_pos == player_pos {
            return Err(SolverErr::PlayerOnBox);
        }
        // boxes are sorted
        if i > 0 && state.boxes[i - 1] == box_pos {
            return Err(SolverErr::DuplicateBox(box_pos));
        }
    }

    // a level without boxes is already solved no matter where the goals are
    if !state.boxes.is_empty() && state.boxes.len() != map.goals.len() {
        return Err(SolverErr::BoxesGoals);
    }

    let dead_squares = DeadSquares::detect(map, config.dead_squares);
    debug!(
        "Found {} dead squares using {}:\n{}",
        dead_squares.count(),
        config.dead_squares,
        dead_squares
    );

    Ok(StaticData {
        map,
        dead_squares,
        heuristic: config.heuristic,
    })
}

/// Every distinct state is allocated once and referred to by its index afterwards.
struct Interner<'a> {
    arena: &'a Arena<State>,
    ids: FnvHashMap<&'a State, StateId>,
    states: Vec<&'a State>,
}

impl<'a> Interner<'a> {
    fn new(arena: &'a Arena<State>) -> Self {
        Interner {
            arena,
            ids: FnvHashMap::default(),
            states: Vec::new(),
        }
    }

    fn id(&self, state: &State) -> Option<StateId> {
        self.ids.get(state).cloned()
    }

    fn insert(&mut self, state: State) -> StateId {
        let id = self.states.len();
        let state: &'a State = self.arena.alloc(state);
        self.ids.insert(state, id);
        self.states.push(state);
        id
    }

    fn get(&self, id: StateId) -> &'a State {
        self.states[id]
    }
}

fn search(sd: &StaticData<'_>, initial_state: &State, budget: Budget) -> (Outcome, Stats) {
    let started = Instant::now();
    let mut stats = Stats::new();

    if initial_state.boxes.is_empty() {
        debug!("No boxes, nothing to do");
        stats.set_elapsed(started.elapsed());
        return (Outcome::Solved(Moves::default()), stats);
    }
    if sd.dead_squares.contains_any(&initial_state.boxes) {
        debug!("A box starts on a dead square");
        stats.add_pruned();
        stats.set_elapsed(started.elapsed());
        return (Outcome::Unsolvable, stats);
    }

    let arena = Arena::new();
    let mut interner = Interner::new(&arena);
    let mut nodes: Vec<NodeInfo> = Vec::new();
    let mut to_visit = BinaryHeap::new();
    let mut seq = 0;
    let mut visited = 0;

    let initial_id = interner.insert(initial_state.clone());
    nodes.push(NodeInfo {
        dist: 0,
        prev: None,
    });
    let start = SearchNode::new(
        initial_id,
        0,
        estimate(sd.heuristic, sd.map, initial_state),
        seq,
    );
    stats.add_created(&start);
    to_visit.push(start);

    while let Some(cur_node) = to_visit.pop() {
        // a shorter way to this state was found after this entry was queued
        if cur_node.dist > nodes[cur_node.id].dist {
            stats.add_reached_duplicate(&cur_node);
            continue;
        }

        if let Some(limit) = exhausted(budget, visited, started) {
            debug!("Budget exhausted: {}", limit);
            stats.set_elapsed(started.elapsed());
            return (Outcome::BudgetExceeded(limit), stats);
        }

        visited += 1;
        if stats.add_unique_visited(&cur_node) {
            debug!("Visited new depth: {}", cur_node.dist);
            trace!("{:?}", stats);
        }

        let cur_state = interner.get(cur_node.id);
        if sd.map.is_victory(cur_state) {
            debug!("Solved, backtracking path");
            let moves = reconstruct_moves(&nodes, cur_node.id);
            stats.set_elapsed(started.elapsed());
            return (Outcome::Solved(moves), stats);
        }

        let new_dist = cur_node.dist + 1;
        for action in Action::possible(sd.map, cur_state) {
            if let Action::Push(dir) = action {
                // the box ends up two cells away from where the player stands now
                let new_box_pos = cur_state.player_pos + dir + dir;
                if sd.dead_squares.is_dead(new_box_pos) {
                    stats.add_pruned();
                    continue;
                }
            }

            let mut new_state = cur_state.clone();
            action.perform(&mut new_state);

            let new_id = match interner.id(&new_state) {
                Some(id) if nodes[id].dist <= new_dist => continue,
                Some(id) => {
                    nodes[id] = NodeInfo {
                        dist: new_dist,
                        prev: Some((cur_node.id, action)),
                    };
                    id
                }
                None => {
                    nodes.push(NodeInfo {
                        dist: new_dist,
                        prev: Some((cur_node.id, action)),
                    });
                    interner.insert(new_state)
                }
            };

            seq += 1;
            let h = estimate(sd.heuristic, sd.map, interner.get(new_id));
            let next_node = SearchNode::new(new_id, new_dist, h, seq);
            stats.add_created(&next_node);
            to_visit.push(next_node);
        }
    }

    debug!("Frontier exhausted");
    stats.set_elapsed(started.elapsed());
    (Outcome::Unsolvable, stats)
}

fn exhausted(budget: Budget, visited: usize, started: Instant) -> Option<Limit> {
    if let Some(max) = budget.max_visited {
        if visited >= max {
            return Some(Limit::Visited(max));
        }
    }
    if let Some(limit) = budget.time_limit {
        if started.elapsed() >= limit {
            return Some(Limit::Time(limit));
        }
    }
    None
}
