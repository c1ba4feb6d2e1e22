//! Error types for nearby

use thiserror::Error;

/// Main error type for nearby operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error: {0}")]
    Server(String),

    #[error("No marker label for index {0} (labels cover 0-6)")]
    MarkerLabel(usize),
}

/// Result type alias for nearby operations
pub type Result<T> = std::result::Result<T, Error>;
