//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the maze rules, the game state machine and the turn
//! loop. It never touches a terminal: frames and commands cross the
//! [`ports`] traits, which makes the whole game drivable from tests.
//!
//! # Module Structure
//!
//! - [`grid`]: immutable level parsed from ASCII rows, bounds-checked tile lookup
//! - [`engine`]: player/monster positions, move validation, win/lose transitions
//! - [`rng`]: seeded LCG used for the monster's random walk
//! - [`config`]: compiled-in reference level and monster turn policy
//! - [`session`]: draw → read → apply loop over the collaborator traits
//! - [`error`]: construction-time failures
//!
//! # Game Rules
//!
//! - The player moves one orthogonal cell per command; walls and the grid edge block
//! - Reaching the exit wins, even with the monster adjacent
//! - Sharing a cell with the monster loses, whoever moved last
//! - The monster picks one of four directions uniformly and wastes its turn on a wall
//! - Unrecognized commands cost nothing
//!
//! # Example
//!
//! ```
//! use maze_escape_core::{GameConfig, GameEngine};
//! use maze_escape_types::{Direction, GameState, MoveOutcome, Position};
//!
//! let mut game = GameEngine::new(GameConfig::seeded(7)).unwrap();
//!
//! assert_eq!(game.attempt_move(Direction::Left), MoveOutcome::Blocked);
//! assert_eq!(game.attempt_move(Direction::Up), MoveOutcome::Moved);
//! assert_eq!(game.player(), Position::new(1, 10));
//! assert_eq!(game.current_state(), GameState::InProgress);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod ports;
pub mod rng;
pub mod session;

pub use maze_escape_types as types;

// Re-export commonly used types for convenience
pub use config::{GameConfig, MonsterTurnPolicy};
pub use engine::{GameEngine, Turn};
pub use error::MazeError;
pub use grid::Grid;
pub use ports::{InputSource, Renderer};
pub use rng::SimpleRng;
pub use session::Session;
