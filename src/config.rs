use std::path::Path;

use log::warn;

use crate::ai::{HeuristicConfig, SearchConfig, MAX_WIN_BONUS};
use crate::error::ConfigError;
use crate::game::Player;

/// Who sits where at the table.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Let the machine open every game.
    pub machine_starts: bool,
}

impl GameConfig {
    /// The human always plays Red and the machine Yellow.
    pub const HUMAN: Player = Player::Red;
    pub const MACHINE: Player = Player::Yellow;

    pub fn first_player(&self) -> Player {
        if self.machine_starts {
            Self::MACHINE
        } else {
            Self::HUMAN
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            machine_starts: false,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub heuristic: HeuristicConfig,
    pub game: GameConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.threads == 0 {
            return Err(ConfigError::Validation(
                "search.threads must be >= 1".into(),
            ));
        }
        if self.heuristic.win_bonus <= 0 {
            return Err(ConfigError::Validation(
                "heuristic.win_bonus must be > 0".into(),
            ));
        }
        if self.heuristic.win_bonus > MAX_WIN_BONUS {
            return Err(ConfigError::Validation(format!(
                "heuristic.win_bonus must be <= {MAX_WIN_BONUS}"
            )));
        }
        if self.heuristic.draw_bonus.unsigned_abs() >= self.heuristic.win_bonus.unsigned_abs() {
            return Err(ConfigError::Validation(
                "heuristic.draw_bonus must be smaller in magnitude than heuristic.win_bonus".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
