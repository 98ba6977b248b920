//! Error types for the contact form.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation errors live in [`crate::domain::ValidationError`].

use thiserror::Error;

/// Errors that can occur when inserting into the remote datastore.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Datastore returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to encode the request body
    #[error("JSON error: {0}")]
    JsonError(String),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Table not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Key rejected or row-level security denied the insert
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Generic storage error with context
    #[error("{0}")]
    Other(String),
}

impl StorageError {
    /// Text shown to the user after "Error al guardar datos: ".
    ///
    /// The datastore's own message when it sent one, otherwise the error's
    /// display form.
    pub fn message(&self) -> String {
        match self {
            Self::ApiError { message, .. }
            | Self::NotFound(message)
            | Self::Unauthorized(message)
            | Self::HttpError(message)
            | Self::Other(message) => message.clone(),
            Self::JsonError(_) | Self::Timeout | Self::RateLimitExceeded => self.to_string(),
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::JsonError(err.to_string())
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
