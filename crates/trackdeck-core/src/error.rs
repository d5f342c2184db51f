//! Error types for TrackDeck.

use thiserror::Error;

/// Main error type for TrackDeck operations.
#[derive(Error, Debug)]
pub enum DeckError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Timeline error: {0}")]
    Timeline(String),
}

/// Result type alias for TrackDeck operations.
pub type Result<T> = std::result::Result<T, DeckError>;
