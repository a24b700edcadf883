use std::path::Path;
use std::sync::Arc;

use crate::error::ConfigError;
use crate::game::{Player, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: [PlayerConfig; 2],
}

/// Board dimensions. Defaults to the classic 6×7 grid.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub height: usize,
    pub width: usize,
}

/// One player's display identity.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub color: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            board: BoardConfig::default(),
            players: [
                PlayerConfig {
                    name: "Player 1".to_string(),
                    color: "red".to_string(),
                },
                PlayerConfig {
                    name: "Player 2".to_string(),
                    color: "yellow".to_string(),
                },
            ],
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
        }
    }
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

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.height == 0 {
            return Err(ConfigError::Validation("board.height must be > 0".into()));
        }
        if self.board.width == 0 {
            return Err(ConfigError::Validation("board.width must be > 0".into()));
        }
        if self.board.height < 4 && self.board.width < 4 {
            return Err(ConfigError::Validation(
                "board must be at least 4 cells tall or wide so four-in-a-row is possible".into(),
            ));
        }
        for player in &self.players {
            if player.name.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "player names must not be empty".into(),
                ));
            }
            if player.color.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "player colors must not be empty".into(),
                ));
            }
        }
        if self.players[0].name == self.players[1].name {
            return Err(ConfigError::Validation(
                "player names must be distinct".into(),
            ));
        }
        Ok(())
    }

    /// Build the shared player identities for a new game.
    pub fn players(&self) -> [Arc<Player>; 2] {
        [
            Arc::new(Player::new(
                self.players[0].name.clone(),
                self.players[0].color.clone(),
            )),
            Arc::new(Player::new(
                self.players[1].name.clone(),
                self.players[1].color.clone(),
            )),
        ]
    }
}
