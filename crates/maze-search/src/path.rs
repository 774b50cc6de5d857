//! Solution path reconstruction from parent links.

use std::collections::HashMap;

use maze_grid::Position;

/// Backlinks recorded during a search. The start maps to `None`.
pub type ParentMap = HashMap<Position, Option<Position>>;

/// Walk parent links back from `goal` and return the path start → goal,
/// both ends included.
///
/// The walk stops at the `None` sentinel or at a position with no entry.
/// A map containing a cycle yields an empty path.
pub fn reconstruct(goal: Position, parents: &ParentMap) -> Vec<Position> {
    let limit = parents.len() + 1;
    let mut path = Vec::new();
    let mut cur = Some(goal);

    while let Some(p) = cur {
        if path.len() == limit {
            log::warn!("parent links from {goal} do not terminate");
            return Vec::new();
        }
        path.push(p);
        cur = parents.get(&p).copied().flatten();
    }

    path.reverse();
    path
}
