//! Panel subsystem errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PanelError {
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("invalid {name} argument: {value:?}")]
    InvalidArgument {
        name: &'static str,
        value: String,
    },

    #[error("invalid track selector: {0:?}")]
    Selector(String),

    #[error("no template named {0:?} among the project's root items")]
    TemplateMissing(&'static str),

    #[error("project has no sequence")]
    NoActiveSequence,

    #[error("sequence has no video track to host markers")]
    NoMarkerTrack,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for panel operations.
pub type Result<T> = std::result::Result<T, PanelError>;
