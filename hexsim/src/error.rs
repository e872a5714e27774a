// error.rs - Error types for the hexsim core

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    EmptyDimension { rows: usize, cols: usize },
    #[error("grid of {rows}x{cols} cells does not fit in memory")]
    TooLarge { rows: usize, cols: usize },
}

#[derive(Debug, Error)]
pub enum SimError {
    #[error("next generation is {found:?} but the live grid is {expected:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    #[error("row coroutine failed: {0}")]
    RowTask(#[from] tokio::task::JoinError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read or write config: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
