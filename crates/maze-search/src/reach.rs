//! Breadth-first reachability, independent of the depth-first stepper.

use std::collections::{HashSet, VecDeque};

use maze_grid::Position;

use crate::traits::SearchSpace;

/// Every position reachable from `from` (including `from` itself).
///
/// Goal cells are expanded like any other cell, so the result is the full
/// connected region.
pub fn reachable<S: SearchSpace + ?Sized>(space: &S, from: Position) -> HashSet<Position> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    let mut nbuf = Vec::with_capacity(4);

    seen.insert(from);
    queue.push_back(from);

    while let Some(cp) = queue.pop_front() {
        nbuf.clear();
        space.neighbors(cp, &mut nbuf);
        for &np in &nbuf {
            if seen.insert(np) {
                queue.push_back(np);
            }
        }
    }

    seen
}

/// Whether `to` can be reached from `from`.
pub fn is_reachable<S: SearchSpace + ?Sized>(space: &S, from: Position, to: Position) -> bool {
    reachable(space, from).contains(&to)
}
