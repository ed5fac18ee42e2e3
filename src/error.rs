use std::path::PathBuf;

/// Errors from dropping a piece. All are recoverable: the state is left
/// untouched and the caller is expected to ask for another column.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range (expected 0-6)")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameOver,
}

/// A pair of masks that cannot describe a real board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("red {red:#x} and yellow {yellow:#x} share cells")]
    Overlap { red: u64, yellow: u64 },

    #[error("mask {mask:#x} has bits outside the 7x6 grid")]
    OutOfGrid { mask: u64 },
}

/// Errors from pitting two agents against each other.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArenaError {
    #[error("{agent} selected illegal action {action} (legal: {legal:?})")]
    IllegalAction {
        agent: String,
        action: usize,
        legal: Vec<usize>,
    },

    #[error("{agent} returned no action in an unfinished game")]
    NoAction { agent: String },
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
