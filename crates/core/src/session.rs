//! Session: the turn loop.
//!
//! Draw, read a command, apply it, repeat until the game is won or lost or
//! the input runs out. Invalid commands cost no turn.

use std::io;

use tracing::{debug, info};

use crate::engine::GameEngine;
use crate::ports::{InputSource, Renderer};
use crate::types::{Command, GameState, MoveOutcome, Notice};

pub struct Session {
    engine: GameEngine,
}

impl Session {
    pub fn new(engine: GameEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn into_engine(self) -> GameEngine {
        self.engine
    }

    /// Play until a terminal state or `Quit`.
    ///
    /// Returns the final state; `InProgress` means the player quit. The last
    /// frame is always drawn before returning, carrying the end-of-game
    /// message when there is one.
    pub fn run<I, R>(&mut self, input: &mut I, renderer: &mut R) -> io::Result<GameState>
    where
        I: InputSource,
        R: Renderer,
    {
        loop {
            self.draw(renderer)?;

            let state = self.engine.current_state();
            if state.is_terminal() {
                return Ok(state);
            }

            match input.next_command()? {
                Command::Quit => {
                    info!(turns = self.engine.turns(), "player quit");
                    return Ok(GameState::InProgress);
                }
                Command::Invalid => {
                    debug!("invalid command");
                    renderer.notify(Notice::InvalidCommand);
                }
                Command::Move(dir) => {
                    let turn = self.engine.play_turn(dir);
                    if turn.player == MoveOutcome::Blocked {
                        renderer.notify(Notice::Blocked);
                    }
                    match self.engine.current_state() {
                        GameState::Won => renderer.notify(Notice::Escaped),
                        GameState::Lost => renderer.notify(Notice::Caught),
                        GameState::InProgress => {}
                    }
                }
            }
        }
    }

    fn draw<R: Renderer>(&self, renderer: &mut R) -> io::Result<()> {
        renderer.render(
            self.engine.grid(),
            self.engine.player(),
            self.engine.monster(),
        )
    }
}
