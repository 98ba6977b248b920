//! Submission status shown in the form-wide banner.

use serde::{Deserialize, Serialize};

/// Message shown after a record is stored.
pub const SUCCESS_MESSAGE: &str = "Datos guardados correctamente";

/// Prefix of the message shown when storing fails; the storage error text follows it.
pub const FAILURE_PREFIX: &str = "Error al guardar datos: ";

/// Result of the most recent submission attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum SubmissionStatus {
    /// Nothing submitted yet.
    #[default]
    None,

    /// A storage request is in flight.
    Pending,

    /// The last record was stored.
    Succeeded(String),

    /// The last storage request failed.
    Failed(String),
}

impl SubmissionStatus {
    pub fn succeeded() -> Self {
        Self::Succeeded(SUCCESS_MESSAGE.to_string())
    }

    /// Failure status for the given storage error text.
    pub fn failed(reason: impl std::fmt::Display) -> Self {
        Self::Failed(format!("{}{}", FAILURE_PREFIX, reason))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Banner text, present only for completed submissions.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Succeeded(message) | Self::Failed(message) => Some(message.as_str()),
            Self::None | Self::Pending => None,
        }
    }
}
