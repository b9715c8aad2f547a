use crate::error::{GameError, Result};
use crate::player::ai::StrategyConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "game_config.json";

/// Turn cadence, seed and scoring weights for one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub max_turns: u32,
    /// How long the referee waits after signalling before it looks at the board.
    pub settle_ms: u64,
    /// Pause after the termination check, for watching the game.
    pub turn_pause_ms: u64,
    /// `None` draws one from OS entropy at startup.
    pub seed: Option<u64>,
    pub strategy: StrategyConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            max_turns: 50,
            settle_ms: 200,
            turn_pause_ms: 800,
            seed: None,
            strategy: StrategyConfig::default(),
        }
    }
}

impl GameConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&config_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "using default config");
            Self::default()
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_turns == 0 {
            return Err(GameError::InvalidConfig("max_turns must be at least 1".into()));
        }
        Ok(())
    }

    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    pub fn turn_pause(&self) -> Duration {
        Duration::from_millis(self.turn_pause_ms)
    }
}
