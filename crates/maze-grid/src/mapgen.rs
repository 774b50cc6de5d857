//! Random maze generation.
//!
//! The generator scatters walls over an open interior and then carves a
//! guaranteed corridor down the first interior column and along the last
//! interior row, so the start in the top-left corner always reaches the goal
//! in the bottom-right corner.

use rand::{Rng, RngExt};

use crate::cell::CellKind;
use crate::error::LayoutError;
use crate::grid::Maze;

/// Smallest accepted side length: a border plus a 2×2 interior.
pub const MIN_SIDE: usize = 4;

/// Default probability that an interior cell becomes a wall.
pub const DEFAULT_WALL_CHANCE: f64 = 0.25;

/// Maze generator driven by a caller-supplied random source.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    /// Probability (0.0–1.0) that an interior cell is a wall before the
    /// corridor is carved.
    pub wall_chance: f64,
}

impl<R: Rng> MazeGen<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            wall_chance: DEFAULT_WALL_CHANCE,
        }
    }

    /// Set the wall probability (builder). Clamped to `0.0..=1.0`.
    pub fn with_wall_chance(mut self, chance: f64) -> Self {
        self.wall_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Generate a `rows × cols` maze with the start at `(1, 1)` and the goal
    /// at `(rows - 2, cols - 2)`.
    pub fn generate(&mut self, rows: usize, cols: usize) -> Result<Maze, LayoutError> {
        if rows < MIN_SIDE || cols < MIN_SIDE {
            return Err(LayoutError::TooSmall { rows, cols });
        }

        let mut cells = vec![CellKind::Wall; rows * cols];
        let idx = |r: usize, c: usize| r * cols + c;

        for r in 1..rows - 1 {
            for c in 1..cols - 1 {
                if !self.rng.random_bool(self.wall_chance) {
                    cells[idx(r, c)] = CellKind::Open;
                }
            }
        }

        // Corridor: first interior column, then last interior row.
        for r in 1..rows - 1 {
            cells[idx(r, 1)] = CellKind::Open;
        }
        for c in 1..cols - 1 {
            cells[idx(rows - 2, c)] = CellKind::Open;
        }

        cells[idx(1, 1)] = CellKind::Start;
        cells[idx(rows - 2, cols - 2)] = CellKind::Goal;

        Ok(Maze::from_cells(cells, rows, cols))
    }
}

/// Convenience wrapper: generate with the default wall probability.
pub fn generate<R: Rng>(rows: usize, cols: usize, rng: R) -> Result<Maze, LayoutError> {
    MazeGen::new(rng).generate(rows, cols)
}
