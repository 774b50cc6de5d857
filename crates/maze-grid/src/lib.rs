//! Maze grid types for the mazestep solver.
//!
//! - [`Position`] / [`Direction`]: cell coordinates and the fixed
//!   up/down/left/right exploration order
//! - [`CellKind`]: wall / open / start / goal, with the 0–3 integer encoding
//! - [`Maze`]: an immutable grid built from integer rows or a text layout
//! - [`presets`] and [`mapgen`]: the built-in and randomly generated mazes

pub mod cell;
pub mod error;
pub mod grid;
pub mod layout;
pub mod mapgen;
pub mod pos;
pub mod presets;

pub use cell::CellKind;
pub use error::{ConfigurationError, LayoutError};
pub use grid::Maze;
pub use mapgen::MazeGen;
pub use pos::{Direction, Position};
