//! Maze Escape (workspace facade crate).
//!
//! Re-exports the workspace crates under stable `maze_escape::{core,input,term,types}`
//! paths; the implementation lives in dedicated crates under `crates/`.

pub use maze_escape_core as core;
pub use maze_escape_input as input;
pub use maze_escape_term as term;
pub use maze_escape_types as types;
