//! Game configuration.
//!
//! There are no flags or config files: [`GameConfig::default`] is the
//! reference level. Tests and benches build their own configs.

use crate::types::{Position, MONSTER_START, PLAYER_START, REFERENCE_MAP};

/// When the monster gets its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonsterTurnPolicy {
    /// Only after the player actually moved (not blocked, not game-ending).
    #[default]
    AfterPlayerMoved,
    /// After every direction command that did not end the game, including
    /// moves into a wall. This is how the classic terminal version plays.
    EveryDirectionCommand,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub map: Vec<String>,
    pub player_start: Position,
    pub monster_start: Position,
    pub monster_policy: MonsterTurnPolicy,
    /// Fixed RNG seed; `None` seeds from the clock.
    pub seed: Option<u32>,
}

impl GameConfig {
    /// Reference config with a fixed seed.
    pub fn seeded(seed: u32) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Custom level with the default policy and a fixed seed.
    pub fn with_map<S: AsRef<str>>(rows: &[S], player_start: Position, monster_start: Position) -> Self {
        Self {
            map: rows.iter().map(|row| row.as_ref().to_string()).collect(),
            player_start,
            monster_start,
            monster_policy: MonsterTurnPolicy::default(),
            seed: Some(1),
        }
    }

    pub fn with_policy(mut self, policy: MonsterTurnPolicy) -> Self {
        self.monster_policy = policy;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            map: REFERENCE_MAP.iter().map(|row| row.to_string()).collect(),
            player_start: PLAYER_START,
            monster_start: MONSTER_START,
            monster_policy: MonsterTurnPolicy::default(),
            seed: None,
        }
    }
}
