//! Error types for maze construction and solve configuration.

use std::fmt;

/// A maze that cannot be solved as configured, or invalid solve settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The maze has no start cell.
    MissingStart,
    /// The maze has no goal cell.
    MissingGoal,
    /// Step interval bounds are inconsistent.
    InvalidSpeed { min_ms: u64, max_ms: u64, step_ms: u64 },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart => f.write_str("maze has no start cell"),
            Self::MissingGoal => f.write_str("maze has no goal cell"),
            Self::InvalidSpeed {
                min_ms,
                max_ms,
                step_ms,
            } => write!(
                f,
                "invalid speed range: min {min_ms}ms, max {max_ms}ms, step {step_ms}ms"
            ),
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// A maze layout that could not be turned into a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// No rows, or rows with no cells.
    Empty,
    /// A row differs in width from the first row.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// An integer cell code outside `0..=3`.
    InvalidCode { row: usize, col: usize, code: i32 },
    /// A text-layout character with no cell meaning.
    InvalidChar { row: usize, col: usize, ch: char },
    /// Requested generator dimensions are below the minimum.
    TooSmall { rows: usize, cols: usize },
    /// Stored cells do not fill a `rows` x `cols` grid.
    CellCount {
        rows: usize,
        cols: usize,
        found: usize,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("maze layout is empty"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "maze row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidCode { row, col, code } => {
                write!(f, "invalid cell code {code} at row {row}, column {col}")
            }
            Self::InvalidChar { row, col, ch } => write!(
                f,
                "invalid layout character \u{201c}{ch}\u{201d} at row {row}, column {col}"
            ),
            Self::TooSmall { rows, cols } => {
                write!(f, "maze of {rows}x{cols} is too small, need at least 4x4")
            }
            Self::CellCount { rows, cols, found } => {
                write!(f, "maze of {rows}x{cols} has {found} cells")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
