//! Engine module - the complete game state and turn rules
//!
//! Owns the grid, both entity positions, the RNG and the game state. Every
//! mutation goes through a method here; moves are validated against the grid
//! before they are committed, and collisions are checked after both the
//! player's and the monster's move.

use tracing::{debug, info};

use crate::config::{GameConfig, MonsterTurnPolicy};
use crate::error::MazeError;
use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::types::{Direction, GameState, MoveOutcome, Position, Tile};

/// What happened during one full turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub player: MoveOutcome,
    /// `None` when the monster did not act this turn.
    pub monster: Option<MoveOutcome>,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameEngine {
    grid: Grid,
    player: Position,
    monster: Position,
    state: GameState,
    policy: MonsterTurnPolicy,
    rng: SimpleRng,
    /// Number of direction commands processed (blocked ones included).
    turns: u32,
}

impl GameEngine {
    /// Build an engine from a config, validating the level and both starts.
    pub fn new(config: GameConfig) -> Result<Self, MazeError> {
        let grid = Grid::parse(config.map.as_slice())?;

        for (entity, pos) in [
            ("player", config.player_start),
            ("monster", config.monster_start),
        ] {
            if grid.tile_at(pos)? == Tile::Wall {
                return Err(MazeError::StartOnWall { entity, pos });
            }
        }
        if config.player_start == config.monster_start {
            return Err(MazeError::StartsOverlap {
                pos: config.player_start,
            });
        }

        let rng = match config.seed {
            Some(seed) => SimpleRng::new(seed),
            None => SimpleRng::from_clock(),
        };

        Ok(Self {
            grid,
            player: config.player_start,
            monster: config.monster_start,
            state: GameState::InProgress,
            policy: config.monster_policy,
            rng,
            turns: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn monster(&self) -> Position {
        self.monster
    }

    pub fn current_state(&self) -> GameState {
        self.state
    }

    pub fn policy(&self) -> MonsterTurnPolicy {
        self.policy
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Try to move the player one cell.
    ///
    /// Walls and the grid edge block. The exit wins regardless of where the
    /// monster is. Stepping onto the monster loses. Once the game has ended
    /// nothing moves and the outcome is `Blocked`.
    pub fn attempt_move(&mut self, dir: Direction) -> MoveOutcome {
        if self.state.is_terminal() {
            return MoveOutcome::Blocked;
        }

        let target = self.player.step(dir);
        let outcome = match self.grid.tile_at(target) {
            Err(_) | Ok(Tile::Wall) => MoveOutcome::Blocked,
            Ok(Tile::Exit) => {
                self.player = target;
                self.finish(GameState::Won);
                MoveOutcome::Escaped
            }
            Ok(Tile::Floor) => {
                self.player = target;
                if self.player == self.monster {
                    self.finish(GameState::Lost);
                    MoveOutcome::Caught
                } else {
                    MoveOutcome::Moved
                }
            }
        };

        debug!(
            dir = dir.as_str(),
            outcome = outcome.as_str(),
            x = self.player.x,
            y = self.player.y,
            "player move"
        );
        outcome
    }

    /// Move the monster in a uniformly random direction.
    ///
    /// A wall or the edge wastes the turn; there is no retry.
    pub fn step_monster(&mut self) -> MoveOutcome {
        if self.state.is_terminal() {
            return MoveOutcome::Blocked;
        }
        let dir = self.rng.next_direction();
        self.move_monster(dir)
    }

    /// Move the monster one cell in `dir`, then check for a catch.
    ///
    /// Even a blocked monster catches a player standing on its cell.
    pub fn move_monster(&mut self, dir: Direction) -> MoveOutcome {
        if self.state.is_terminal() {
            return MoveOutcome::Blocked;
        }

        let target = self.monster.step(dir);
        let moved = self.grid.is_passable(target);
        if moved {
            self.monster = target;
        }

        let outcome = if self.monster == self.player {
            self.finish(GameState::Lost);
            MoveOutcome::Caught
        } else if moved {
            MoveOutcome::Moved
        } else {
            MoveOutcome::Blocked
        };

        debug!(
            dir = dir.as_str(),
            outcome = outcome.as_str(),
            x = self.monster.x,
            y = self.monster.y,
            "monster move"
        );
        outcome
    }

    /// Run one turn: the player's move, then the monster's if the policy
    /// grants it one.
    pub fn play_turn(&mut self, dir: Direction) -> Turn {
        if self.state.is_terminal() {
            return Turn {
                player: MoveOutcome::Blocked,
                monster: None,
            };
        }

        self.turns += 1;
        let player = self.attempt_move(dir);

        let monster_acts = match self.policy {
            MonsterTurnPolicy::AfterPlayerMoved => player == MoveOutcome::Moved,
            MonsterTurnPolicy::EveryDirectionCommand => !self.state.is_terminal(),
        };
        let monster = monster_acts.then(|| self.step_monster());

        Turn { player, monster }
    }

    fn finish(&mut self, state: GameState) {
        self.state = state;
        info!(
            state = state.as_str(),
            turns = self.turns,
            player = %self.player,
            monster = %self.monster,
            "game over"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORRIDOR: [&str; 3] = ["###E###", "#.....#", "#######"];

    fn corridor(player: Position, monster: Position) -> GameEngine {
        GameEngine::new(GameConfig::with_map(&CORRIDOR, player, monster)).unwrap()
    }

    #[test]
    fn blocked_move_leaves_everything_untouched() {
        let mut engine = corridor(Position::new(1, 1), Position::new(5, 1));
        assert_eq!(engine.attempt_move(Direction::Left), MoveOutcome::Blocked);
        assert_eq!(engine.attempt_move(Direction::Up), MoveOutcome::Blocked);
        assert_eq!(engine.player(), Position::new(1, 1));
        assert_eq!(engine.current_state(), GameState::InProgress);
    }

    #[test]
    fn blocked_monster_still_catches_a_player_on_its_cell() {
        let mut engine = corridor(Position::new(1, 1), Position::new(2, 1));
        // Force overlap without going through attempt_move's own check.
        engine.player = engine.monster;
        assert_eq!(engine.move_monster(Direction::Up), MoveOutcome::Caught);
        assert_eq!(engine.current_state(), GameState::Lost);
    }

    #[test]
    fn play_turn_counts_blocked_commands() {
        let mut engine = corridor(Position::new(1, 1), Position::new(5, 1));
        engine.play_turn(Direction::Left);
        engine.play_turn(Direction::Right);
        assert_eq!(engine.turns(), 2);
    }

    #[test]
    fn terminal_engine_ignores_turns() {
        let mut engine = corridor(Position::new(3, 1), Position::new(5, 1));
        assert_eq!(engine.attempt_move(Direction::Up), MoveOutcome::Escaped);
        let turns = engine.turns();
        let turn = engine.play_turn(Direction::Down);
        assert_eq!(turn.player, MoveOutcome::Blocked);
        assert_eq!(turn.monster, None);
        assert_eq!(engine.turns(), turns);
        assert_eq!(engine.current_state(), GameState::Won);
    }
}
