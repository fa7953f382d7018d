use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use separator::Separatable;

use crate::state::State;

/// Heap entry for the cost-aware search. `f` is accumulated cost plus the
/// Manhattan estimate; `seq` is the insertion sequence number, breaking ties
/// so the ordering is a strict total order and runs reproduce exactly.
#[derive(Debug)]
pub(crate) struct SearchNode {
    pub(crate) state: State,
    pub(crate) f: i32,
    pub(crate) seq: u64,
}

impl SearchNode {
    pub(crate) fn new(state: State, f: i32, seq: u64) -> Self {
        SearchNode { state, f, seq }
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.f, self.seq).cmp(&(other.f, other.seq))
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.seq == other.seq
    }
}

impl Eq for SearchNode {}

/// Per-depth search statistics, depth = number of moves from the start.
#[derive(PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<i32>,
    visited_states: Vec<i32>,
    duplicate_states: Vec<i32>,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats {
            created_states: vec![],
            visited_states: vec![],
            duplicate_states: vec![],
        }
    }

    pub fn total_created(&self) -> i32 {
        self.created_states.iter().sum::<i32>()
    }

    pub fn total_unique_visited(&self) -> i32 {
        self.visited_states.iter().sum::<i32>()
    }

    pub fn total_reached_duplicates(&self) -> i32 {
        self.duplicate_states.iter().sum::<i32>()
    }

    pub(crate) fn add_created(&mut self, depth: usize) -> bool {
        Self::add(&mut self.created_states, depth)
    }

    pub(crate) fn add_unique_visited(&mut self, depth: usize) -> bool {
        Self::add(&mut self.visited_states, depth)
    }

    pub(crate) fn add_reached_duplicate(&mut self, depth: usize) -> bool {
        Self::add(&mut self.duplicate_states, depth)
    }

    /// Returns true when a new depth was reached.
    fn add(counts: &mut Vec<i32>, depth: usize) -> bool {
        let mut ret = false;

        // while because the cost-aware search can skip depths
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
        writeln!(f, "total created / unique visited / reached duplicates:")?;
        writeln!(
            f,
            "{:<16}{:<16}{}",
            self.total_created().separated_string(),
            self.total_unique_visited().separated_string(),
            self.total_reached_duplicates().separated_string()
        )
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let visited = self.total_unique_visited();
        let duplicates = self.total_reached_duplicates();
        let left = created - visited - duplicates;
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Unique visited total: {}", visited.separated_string())?;
        writeln!(
            f,
            "Reached duplicates total: {}",
            duplicates.separated_string()
        )?;
        writeln!(
            f,
            "Created but not reached total: {}",
            left.separated_string()
        )?;
        writeln!(f)?;

        writeln!(
            f,
            "{:<15}{:<15}{:<15}{:<15}{}",
            "Depth", "Created", "Unique", "Duplicates", "Unknown (not reached)"
        )?;
        for depth in 0..self.created_states.len() {
            // created_states is always the longest vec
            let created = self.created_states[depth];
            let visited = *self.visited_states.get(depth).unwrap_or(&0);
            let duplicates = *self.duplicate_states.get(depth).unwrap_or(&0);
            let left = created - visited - duplicates;
            writeln!(
                f,
                "{:<15}{:<15}{:<15}{:<15}{}",
                format!("{}:", depth),
                created.separated_string(),
                visited.separated_string(),
                duplicates.separated_string(),
                left.separated_string()
            )?;
        }
        Ok(())
    }
}
