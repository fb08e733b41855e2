// src/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum JotterError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database Error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("Home directory not found")]
    HomeDirNotFound,

    #[error("Entry #{0} not found")]
    EntryNotFound(i64),

    #[error("Editor exited with a non-zero status")]
    EditorError,
}

pub type Result<T> = std::result::Result<T, JotterError>;
