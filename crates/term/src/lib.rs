//! Terminal "game renderer" module.
//!
//! A small rendering layer for the maze. The grid and entity positions are
//! laid out into a framebuffer by [`MazeView`], then [`TerminalRenderer`]
//! clears the screen and prints the whole frame through crossterm.
//!
//! Goals:
//! - Keep `core` free of terminal I/O
//! - Full redraw every turn, no partial-update artifacts
//! - Framebuffer layout testable without a terminal

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use maze_escape_core as core;
pub use maze_escape_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{MazeView, Palette};
pub use renderer::{encode_full_into, TerminalRenderer};
