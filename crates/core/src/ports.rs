//! Collaborator traits.
//!
//! The engine never touches a terminal. Frames go out through a
//! [`Renderer`], commands come in through an [`InputSource`].

use std::io;

use crate::grid::Grid;
use crate::types::{Command, Notice, Position};

/// Draws a complete frame.
pub trait Renderer {
    /// Replace the previous frame with `grid`, the player and the monster.
    ///
    /// If both entities share a cell the player is drawn.
    fn render(&mut self, grid: &Grid, player: Position, monster: Position) -> io::Result<()>;

    /// Queue a status message for the next frame.
    fn notify(&mut self, notice: Notice);
}

/// Yields one command per call, blocking until input is available.
pub trait InputSource {
    fn next_command(&mut self) -> io::Result<Command>;
}
