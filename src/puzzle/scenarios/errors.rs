use crate::puzzle::PuzzleError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to access scenario file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: {value:?} is not a tile number")]
    InvalidNumber { line: usize, value: String },
    #[error("line {line}: {source}")]
    InvalidBoard {
        line: usize,
        #[source]
        source: PuzzleError,
    },
    #[error("invalid scenario config")]
    Config(#[from] toml::de::Error),
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
}
