use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Error encoding or decoding JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
    /// Error reading a grid file
    #[error("Grid could not be read")]
    Io(#[from] io::Error),
}
