use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ModelError {
    #[error("Validation Error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unknown {kind} '{value}' {location}")]
    UnknownToken {
        kind: &'static str,
        value: String,
        location: ErrorLocation,
    },
}

impl ModelError {
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        ModelError::Validation {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn unknown_token(kind: &'static str, value: impl Into<String>) -> Self {
        ModelError::UnknownToken {
            kind,
            value: value.into(),
            location: ErrorLocation::caller(),
        }
    }
}
