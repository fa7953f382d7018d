mod search_node;

pub use self::search_node::Stats;

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};
use std::fmt::{self, Debug, Formatter};

use fnv::FnvHashSet;
use log::debug;

use crate::board::Board;
use crate::config::Method;
use crate::data::DIRECTIONS;
use crate::level::Level;
use crate::moves::Moves;
use crate::simulate::simulate;
use crate::state::State;
use crate::terrain::Elevation;
use crate::Solve;

use self::search_node::SearchNode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub moves: Moves,
    /// Summed terrain cost, or the move count when searching without a
    /// terrain model.
    pub cost: i32,
}

pub struct SolverOk {
    /// `None` means the frontier ran dry without reaching the target - a
    /// valid terminal outcome, not an error.
    pub solution: Option<Solution>,
    pub stats: Stats,
    method: Method,
}

impl SolverOk {
    fn new(solution: Option<Solution>, stats: Stats, method: Method) -> Self {
        Self {
            solution,
            stats,
            method,
        }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.solution {
            None => writeln!(f, "No solution")?,
            Some(ref solution) => writeln!(
                f,
                "{}: {} moves, cost {}",
                self.method,
                solution.moves.move_cnt(),
                solution.cost
            )?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Level {
    fn solve(
        &self,
        method: Method,
        terrain: Option<&Elevation>,
        print_status: bool,
    ) -> SolverOk {
        if let Some(terrain) = terrain {
            assert_covers(terrain, &self.board);
        }
        debug!("Starting {} search", method);
        match method {
            Method::MoveOptimal => search_moves(self, terrain, print_status),
            Method::CostOptimal => search_cost(self, terrain, print_status),
        }
    }
}

/// A hand-made elevation grid smaller than the board would feed the -1
/// out-of-bounds sentinel into edge costs and corrupt the search ordering.
pub(crate) fn assert_covers(terrain: &Elevation, board: &Board) {
    assert!(
        terrain.grid_width() >= board.width() && terrain.grid_height() >= board.height(),
        "terrain {}x{} does not cover the {}x{} board",
        terrain.grid_width(),
        terrain.grid_height(),
        board.width(),
        board.height()
    );
}

fn initial_state(level: &Level) -> State {
    State::new(level.player_pos, level.board.clone(), Moves::default(), 0)
}

fn solution(state: State, terrain: Option<&Elevation>) -> Solution {
    let cost = match terrain {
        Some(_) => state.cost,
        None => state.moves.move_cnt() as i32,
    };
    Solution {
        moves: state.moves,
        cost,
    }
}

/// Uninformed breadth-first search. All edges count as one move, so the
/// first time the target is popped the path has the fewest moves possible.
/// Deduplicates on insertion: a state is enqueued only if its canonical
/// identifier has never been seen.
fn search_moves(level: &Level, terrain: Option<&Elevation>, print_status: bool) -> SolverOk {
    let mut stats = Stats::new();

    let mut to_visit = VecDeque::new();
    let mut seen = FnvHashSet::default();

    let start = initial_state(level);
    stats.add_created(0);
    seen.insert(start.key());
    to_visit.push_back(start);

    while let Some(cur_state) = to_visit.pop_front() {
        let depth = cur_state.moves.move_cnt();
        if stats.add_unique_visited(depth) && print_status {
            println!("Visited new depth: {}", depth);
            println!("{:?}", stats);
        }

        if cur_state.player_pos == level.target_pos {
            debug!("Found solution at depth {}", depth);
            return SolverOk::new(
                Some(solution(cur_state, terrain)),
                stats,
                Method::MoveOptimal,
            );
        }

        for &dir in &DIRECTIONS {
            let outcome = match simulate(&cur_state.board, cur_state.player_pos, dir, terrain)
            {
                Some(outcome) => outcome,
                None => continue, // illegal move, silently skipped
            };
            let mut moves = cur_state.moves.clone();
            moves.add(dir);
            let next_state = State::new(
                outcome.player_pos,
                outcome.board,
                moves,
                cur_state.cost + outcome.cost,
            );
            stats.add_created(depth + 1);

            let key = next_state.key();
            if seen.contains(&key) {
                stats.add_reached_duplicate(depth + 1);
            } else {
                seen.insert(key);
                to_visit.push_back(next_state);
            }
        }
    }

    debug!("Frontier exhausted");
    SolverOk::new(None, stats, Method::MoveOptimal)
}

/// Cost-aware best-first search ordered by f = accumulated cost + Manhattan
/// distance to the target. The heuristic ignores elevation and every real
/// step costs at least 1, so it never overestimates and the first goal pop
/// is cost-optimal (A*). Deduplicates on expansion: a state is marked
/// visited when popped and never re-expanded, even if re-enqueued.
fn search_cost(level: &Level, terrain: Option<&Elevation>, print_status: bool) -> SolverOk {
    let mut stats = Stats::new();

    let mut to_visit = BinaryHeap::new();
    let mut visited = FnvHashSet::default();
    let mut next_seq = 0u64;

    let start = initial_state(level);
    stats.add_created(0);
    let f = start.player_pos.dist(level.target_pos);
    to_visit.push(Reverse(SearchNode::new(start, f, next_seq)));
    next_seq += 1;

    while let Some(Reverse(cur_node)) = to_visit.pop() {
        let cur_state = cur_node.state;
        let depth = cur_state.moves.move_cnt();

        if cur_state.player_pos == level.target_pos {
            stats.add_unique_visited(depth);
            debug!("Found solution at depth {}", depth);
            return SolverOk::new(
                Some(solution(cur_state, terrain)),
                stats,
                Method::CostOptimal,
            );
        }

        let key = cur_state.key();
        if visited.contains(&key) {
            stats.add_reached_duplicate(depth);
            continue;
        }
        visited.insert(key);
        if stats.add_unique_visited(depth) && print_status {
            println!("Visited new depth: {}", depth);
            println!("{:?}", stats);
        }

        for &dir in &DIRECTIONS {
            let outcome = match simulate(&cur_state.board, cur_state.player_pos, dir, terrain)
            {
                Some(outcome) => outcome,
                None => continue,
            };
            let mut moves = cur_state.moves.clone();
            moves.add(dir);
            let next_state = State::new(
                outcome.player_pos,
                outcome.board,
                moves,
                cur_state.cost + outcome.cost,
            );
            if visited.contains(&next_state.key()) {
                stats.add_reached_duplicate(depth + 1);
                continue;
            }
            stats.add_created(depth + 1);
            let f = next_state.cost + next_state.player_pos.dist(level.target_pos);
            to_visit.push(Reverse(SearchNode::new(next_state, f, next_seq)));
            next_seq += 1;
        }
    }

    debug!("Frontier exhausted");
    SolverOk::new(None, stats, Method::CostOptimal)
}
