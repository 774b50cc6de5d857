use maze_grid::{Maze, Position};

/// Interface the stepper searches over.
pub trait SearchSpace {
    /// Append the enterable neighbours of `p` into `buf`, in exploration
    /// order. The caller clears `buf` before calling.
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>);

    /// Whether reaching `p` ends the search.
    fn is_goal(&self, p: Position) -> bool;
}

impl SearchSpace for Maze {
    #[inline]
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>) {
        self.neighbors_into(p, buf);
    }

    #[inline]
    fn is_goal(&self, p: Position) -> bool {
        self.classify(p) == maze_grid::CellKind::Goal
    }
}
