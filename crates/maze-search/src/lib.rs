//! Step-by-step depth-first maze search.
//!
//! Instead of solving a maze in one call, a [`Stepper`] advances by one
//! unit of work per [`step`](Stepper::step), exposing its frontier, visited
//! cells and current position in between. A [`RunController`] wraps it with start / reset
//! commands and a caller-driven step interval.
//!
//! - **Depth-first stepping** ([`Stepper`], [`StepResult`])
//! - **Path reconstruction** from parent links ([`reconstruct`])
//! - **Breadth-first reachability** as an independent check ([`reachable`])
//! - **Timed runs** ([`RunController`], [`SpeedConfig`])
//!
//! Everything searches through the [`SearchSpace`] trait, implemented for
//! [`maze_grid::Maze`].

mod controller;
mod path;
mod reach;
mod stepper;
mod traits;

pub use controller::{RunController, RunState, SpeedConfig};
pub use path::{ParentMap, reconstruct};
pub use reach::{is_reachable, reachable};
pub use stepper::{SearchStatus, StepResult, Stepper};
pub use traits::SearchSpace;
