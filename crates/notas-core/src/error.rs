//! Error types for notas-core

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias using notas-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in notas-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Input rejected before contacting the service
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Bad credentials, or a missing/expired session
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Note not found on the service
    #[error("Note not found: {0}")]
    NotFound(String),

    /// Account or resource already exists
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Transport-level failure
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Service answered with an unexpected status
    #[error("Server error: {0}")]
    Server(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Session persistence error
    #[error("Session storage error: {0}")]
    SessionStorage(String),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl Error {
    /// Map a non-success HTTP status and its message to an error kind.
    pub fn from_status(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => Self::Validation(message),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Self::Auth(message),
            StatusCode::NOT_FOUND => Self::NotFound(message),
            StatusCode::CONFLICT => Self::Conflict(message),
            _ => Self::Server(message),
        }
    }

    /// Missing session on an authenticated call.
    pub fn not_signed_in() -> Self {
        Self::Auth("Not signed in".to_string())
    }
}
