//! The resumable depth-first search [`Stepper`].
//!
//! Each call to [`Stepper::step`] does exactly one unit of work: pop one
//! position off the frontier stack and, if it is new, mark it visited and
//! push its unvisited neighbours. Because neighbours are pushed in
//! up/down/left/right order, the last one pushed (right) is explored first
//! and the search always continues along the most recently discovered
//! branch before backtracking to older ones.

use std::collections::HashSet;

use maze_grid::Position;

use crate::path::ParentMap;
use crate::traits::SearchSpace;

/// Outcome of a single [`Stepper::step`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepResult {
    /// More work remains.
    Continue,
    /// The goal was popped at this position.
    Found(Position),
    /// The frontier is empty and the goal was never reached.
    Exhausted,
}

/// Lifecycle of a [`Stepper`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    #[default]
    Idle,
    Running,
    Solved(Position),
    Exhausted,
}

impl SearchStatus {
    /// Whether no further step can change the search.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved(_) | Self::Exhausted)
    }
}

/// All mutable state of one search run.
#[derive(Debug, Clone, Default)]
pub(crate) struct SearchState {
    /// LIFO stack; may hold several copies of a position.
    frontier: Vec<Position>,
    visited: HashSet<Position>,
    /// Visited positions in the order they were processed.
    order: Vec<Position>,
    parents: ParentMap,
    current: Option<Position>,
}

impl SearchState {
    fn clear(&mut self) {
        self.frontier.clear();
        self.visited.clear();
        self.order.clear();
        self.parents.clear();
        self.current = None;
    }
}

/// Single-step depth-first search engine.
///
/// The stepper does not own the space it searches; every [`step`](Self::step)
/// borrows it, so the caller decides where the maze lives.
#[derive(Debug, Clone, Default)]
pub struct Stepper {
    state: SearchState,
    status: SearchStatus,
    // scratch buffer for neighbour queries
    nbuf: Vec<Position>,
}

impl Stepper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a fresh search from `start`, discarding any previous run.
    pub fn initialize(&mut self, start: Position) {
        self.state.clear();
        self.state.frontier.push(start);
        self.state.parents.insert(start, None);
        self.status = SearchStatus::Running;
        log::trace!("search initialized at {start}");
    }

    /// Drop all search state and return to [`SearchStatus::Idle`].
    pub fn reset(&mut self) {
        self.state.clear();
        self.status = SearchStatus::Idle;
    }

    /// Advance the search by one unit of work.
    ///
    /// Terminal searches repeat their outcome without touching any state.
    /// An idle stepper has nothing to search and reports
    /// [`StepResult::Exhausted`], also without changing state.
    pub fn step<S: SearchSpace + ?Sized>(&mut self, space: &S) -> StepResult {
        match self.status {
            SearchStatus::Running => {}
            SearchStatus::Solved(goal) => return StepResult::Found(goal),
            SearchStatus::Idle | SearchStatus::Exhausted => return StepResult::Exhausted,
        }

        let Some(p) = self.state.frontier.pop() else {
            self.status = SearchStatus::Exhausted;
            log::debug!(
                "frontier exhausted after {} visited cells",
                self.state.order.len()
            );
            return StepResult::Exhausted;
        };
        self.state.current = Some(p);

        // Stale duplicate from an earlier push.
        if !self.state.visited.insert(p) {
            return StepResult::Continue;
        }
        self.state.order.push(p);

        if space.is_goal(p) {
            self.status = SearchStatus::Solved(p);
            log::debug!(
                "goal {p} found after {} visited cells",
                self.state.order.len()
            );
            return StepResult::Found(p);
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        space.neighbors(p, &mut nbuf);
        for &n in &nbuf {
            if self.state.visited.contains(&n) {
                continue;
            }
            self.state.frontier.push(n);
            // Overwrite: the last pusher before `n` is visited becomes its parent.
            self.state.parents.insert(n, Some(p));
        }
        self.nbuf = nbuf;

        log::trace!("visited {p}, frontier {}", self.state.frontier.len());
        StepResult::Continue
    }

    /// Step until the search reaches a terminal outcome.
    pub fn finish<S: SearchSpace + ?Sized>(&mut self, space: &S) -> StepResult {
        loop {
            match self.step(space) {
                StepResult::Continue => {}
                done => return done,
            }
        }
    }

    #[inline]
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// The most recently popped position, if any.
    #[inline]
    pub fn current(&self) -> Option<Position> {
        self.state.current
    }

    #[inline]
    pub fn is_visited(&self, p: Position) -> bool {
        self.state.visited.contains(&p)
    }

    #[inline]
    pub fn visited_count(&self) -> usize {
        self.state.visited.len()
    }

    /// Visited positions in processing order.
    #[inline]
    pub fn visit_order(&self) -> &[Position] {
        &self.state.order
    }

    /// Number of frontier entries, duplicates included.
    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.state.frontier.len()
    }

    #[inline]
    pub fn parents(&self) -> &ParentMap {
        &self.state.parents
    }
}
