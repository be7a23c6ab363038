//! Domain-level error taxonomy.
//!
//! These errors are transport agnostic. The inbound HTTP adapter maps them to
//! the status codes and JSON bodies of the externally observable contract.

use crate::domain::application::FieldViolation;

/// Failure outcomes of the application service operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Create-path validation failures, collected in rule order.
    #[error("application rejected: {}", errors.join(" "))]
    Validation { errors: Vec<String> },

    /// First update-path field violation.
    #[error("invalid field {}: {}", violation.path, violation.msg)]
    FieldValidation { violation: FieldViolation },

    /// No application with the requested id.
    #[error("application {id} not found")]
    NotFound { id: i32 },

    /// The store failed; the message is surfaced opaquely.
    #[error("persistence failure: {message}")]
    Persistence { message: String },
}

impl Error {
    /// Create-path rejection carrying the collected messages.
    pub fn validation(errors: Vec<String>) -> Self {
        Self::Validation { errors }
    }

    /// Missing-record outcome for the requested id.
    pub fn not_found(id: i32) -> Self {
        Self::NotFound { id }
    }

    /// Opaque store failure.
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
        }
    }
}

impl From<FieldViolation> for Error {
    fn from(violation: FieldViolation) -> Self {
        Self::FieldValidation { violation }
    }
}
