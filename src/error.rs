use std::path::PathBuf;

use crate::game::{BoardError, MoveError};

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

/// Rejected move text. Handled by re-prompting, never returned past the
/// input reader.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("'{0}' is not a column number")]
    NotANumber(String),

    #[error("column {value} is outside 1 to {width}")]
    OutOfRange { value: usize, width: usize },

    /// Holds the 1-based label the player typed.
    #[error("column {0} is full")]
    ColumnFull(usize),
}

/// Errors that end a game session.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("board error: {0}")]
    Board(#[from] BoardError),

    #[error("move error: {0}")]
    Move(#[from] MoveError),
}
