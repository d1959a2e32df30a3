//! Terminal input module (engine-facing).
//!
//! Turns lines of text into [`types::Command`]s. Input is line-buffered:
//! the player types a letter and presses Enter, so no raw mode is needed.
//!
//! Key bindings: `w` up, `a` left, `s` down, `d` right, `q` quit, in either
//! case. Anything else is an invalid command.

pub mod line;
pub mod map;

pub use maze_escape_core as core;
pub use maze_escape_types as types;

pub use line::LineInput;
pub use map::parse_command;
