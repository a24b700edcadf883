use std::path::PathBuf;

/// Errors reported by the game engine.
///
/// Full columns and moves after the round has ended are not errors; the
/// engine ignores those silently. An out-of-range column is a caller
/// contract violation and is reported explicitly.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("column {column} is out of range for a {width}-column board")]
    InvalidColumn { column: usize, width: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
