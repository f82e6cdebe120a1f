use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("Invalid slot token: {0:?} (expected an integer or null)")]
    InvalidToken(String),

    #[error("Level-order input has values but an absent root")]
    MissingRoot,

    #[error("{count} slot(s) have no open parent position")]
    DanglingSlots { count: usize },

    #[error("Configuration error in {path}: {message}")]
    ConfigFile { path: PathBuf, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Output failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type TreeResult<T> = Result<T, TreeError>;
