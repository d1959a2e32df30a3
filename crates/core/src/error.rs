//! Errors raised while building a level or an engine.
//!
//! All of these are construction-time failures: once a [`crate::GameEngine`]
//! exists, no move can produce one.

use crate::types::Position;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    #[error("level has no rows")]
    EmptyGrid,

    #[error("row {row} is {found} cells wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown glyph {glyph:?} at ({x}, {y})")]
    UnknownGlyph { glyph: char, x: usize, y: usize },

    #[error("level has no exit tile")]
    MissingExit,

    #[error("level has {count} exit tiles, expected exactly one")]
    MultipleExits { count: usize },

    #[error("position {pos} is outside the {width}x{height} grid")]
    OutOfBounds {
        pos: Position,
        width: usize,
        height: usize,
    },

    #[error("{entity} start {pos} is a wall")]
    StartOnWall { entity: &'static str, pos: Position },

    #[error("player and monster both start at {pos}")]
    StartsOverlap { pos: Position },
}
