//! Error types for the portfolio workspace.

use crate::project::ProjectId;

/// Errors that can occur while operating on the record store.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// No record exists with the requested id.
    #[error("Project not found: {id}")]
    NotFound {
        /// Project id that was not found
        id: ProjectId,
    },

    /// I/O error (snapshot file operations, network, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

/// Convenience `Result` type alias for portfolio operations.
///
/// This is the standard Result type used throughout the portfolio codebase.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new not-found error for the given project id.
    pub fn not_found(id: ProjectId) -> Self {
        Error::NotFound { id }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Returns whether this error means the requested record is absent.
    ///
    /// The HTTP layer maps exactly these errors to 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
