//! Error types for the paperfolio crates.

use thiserror::Error;

use crate::paper::PaperId;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the paperfolio crates.
#[derive(Error, Debug)]
pub enum Error {
    /// No paper with the given identifier exists in the catalog.
    ///
    /// The web handlers never surface this as a failure; a missing paper is
    /// rendered as an explicit not-found page instead. This variant exists
    /// for callers of the catalog API that need a hard error.
    #[error("Paper not found: {id}")]
    PaperNotFound {
        /// The requested paper identifier.
        id: PaperId,
    },

    /// Invalid configuration provided.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the configuration error.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error (unexpected state).
    #[error("Internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl Error {
    /// Creates an internal error with the given message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
