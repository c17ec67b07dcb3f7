//! Game configuration shared by the binary and the move drivers.

use crate::constants::{DEFAULT_SIZE, MAX_GAME_LEN_FACTOR, MAX_SIZE, MIN_SIZE};
use crate::error::ConfigError;
use crate::state::BoardState;

/// Settings for a game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Board size (NxN).
    pub size: usize,
    /// Seed for the random move source; `None` seeds from the environment.
    pub seed: Option<u64>,
    /// Cap on moves in a self-play game; `None` uses a multiple of the board area.
    pub max_moves: Option<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            seed: None,
            max_moves: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&self.size) {
            return Err(ConfigError::invalid_size(self.size));
        }
        if self.max_moves == Some(0) {
            return Err(ConfigError::InvalidConfiguration(
                "max_moves must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Move cap for self-play.
    pub fn move_limit(&self) -> usize {
        self.max_moves
            .unwrap_or(self.size * self.size * MAX_GAME_LEN_FACTOR)
    }

    /// Validate and create a fresh game.
    pub fn new_game(&self) -> Result<BoardState, ConfigError> {
        self.validate()?;
        BoardState::new(self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.move_limit(), 9 * 9 * 3);
        assert_eq!(config.new_game().unwrap().size(), 9);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = GameConfig {
            size: 1,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            config.new_game(),
            Err(ConfigError::InvalidConfiguration(_))
        ));

        let config = GameConfig {
            max_moves: Some(0),
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_explicit_move_limit() {
        let config = GameConfig {
            max_moves: Some(10),
            ..GameConfig::default()
        };
        assert_eq!(config.move_limit(), 10);
    }
}
