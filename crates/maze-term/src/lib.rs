//! Terminal front end for the mazestep solver.
//!
//! Models draw into a [`Screen`] of styled character cells; the [`App`] loop
//! diffs consecutive screens and hands only the changed cells to a
//! [`Driver`]. [`CrosstermDriver`] is the real terminal back end.

pub mod app;
pub mod messages;
pub mod screen;
pub mod term;

pub use app::{App, AppConfig, DEFAULT_FRAME_TIME, Driver, Effect, Model};
pub use messages::{Key, Msg};
pub use screen::{Cell, Frame, Rgb, Screen, Style};
pub use term::CrosstermDriver;
