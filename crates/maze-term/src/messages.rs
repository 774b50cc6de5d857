//! Input events: [`Msg`] and [`Key`].

use std::time::Instant;

/// A keyboard key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Escape,
    Enter,
    Space,
    /// A printable character other than space.
    Char(char),
}

/// A message delivered to the model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    /// Sent once when the loop starts.
    Init,
    /// A key was pressed.
    KeyDown { key: Key, ctrl: bool },
    /// One frame of the loop's clock has passed.
    Tick { now: Instant },
    /// The terminal was resized.
    Resize { width: u16, height: u16 },
    /// Request to quit (e.g. Ctrl-C).
    Quit,
}

impl Msg {
    /// A key press without modifiers.
    pub fn key(key: Key) -> Self {
        Self::KeyDown { key, ctrl: false }
    }
}
