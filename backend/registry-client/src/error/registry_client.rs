//! Error type for every registry operation.
//!
//! Key design decisions:
//! - One enum, classified by [`ErrorKind`] so callers branch on a tag, not on
//!   message text or downcasts
//! - Remote rejections keep the registry's `{status, title}` verbatim
//! - Transport failures are categorized before being stringified
//! - All errors include ErrorLocation; sync constructors use `#[track_caller]`

use crate::error::config::ConfigError;
use crate::params::{FieldViolation, ParamValidationError};

use common::{ErrorLocation, HttpStatusCode};
use models::{ApiProblem, ModelError};

use std::error::Error as StdError;
use std::fmt;
use std::time::Duration;

use thiserror::Error as ThisError;

/// Coarse classification of a [`RegistryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A caller-supplied identifier, parameter or model failed a local rule.
    /// No request was sent.
    Validation,
    /// The request never produced a response (connect, timeout, cancellation).
    Transport,
    /// The registry answered with an unexpected status and a problem body.
    Api,
    /// A response arrived but its body or headers could not be decoded.
    Decode,
    /// The request could not be assembled locally (URL, body encoding, config).
    Request,
}

/// Why a request produced no response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportFailure {
    Timeout,
    Connect,
    Cancelled,
    DeadlineExceeded,
    Body,
    Request,
    Other,
}

impl fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TransportFailure::Timeout => "timeout",
            TransportFailure::Connect => "connect",
            TransportFailure::Cancelled => "cancelled",
            TransportFailure::DeadlineExceeded => "deadline exceeded",
            TransportFailure::Body => "body",
            TransportFailure::Request => "request",
            TransportFailure::Other => "other",
        };
        f.write_str(text)
    }
}

#[derive(Debug, ThisError)]
pub enum RegistryError {
    #[error("Validation Error: invalid {field} '{value}': must match pattern {pattern} {location}")]
    InvalidIdentifier {
        field: &'static str,
        value: String,
        pattern: String,
        location: ErrorLocation,
    },

    #[error("Validation Error: invalid parameters for {operation}: {source} {location}")]
    InvalidParams {
        operation: &'static str,
        #[source]
        source: ParamValidationError,
        location: ErrorLocation,
    },

    #[error("Validation Error: {message} {location}")]
    InvalidModel {
        message: String,
        location: ErrorLocation,
    },

    #[error("Transport Error ({failure}): {message} {location}")]
    Transport {
        failure: TransportFailure,
        message: String,
        location: ErrorLocation,
    },

    #[error("Registry API Error: {problem} {location}")]
    Api {
        problem: ApiProblem,
        location: ErrorLocation,
    },

    #[error("Malformed Error Body: unexpected HTTP {status}: {message} {location}")]
    MalformedErrorBody {
        status: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    #[error("Decode Error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    #[error("Content Type Error: header {header} has unsupported value '{value}' {location}")]
    InvalidContentType {
        header: &'static str,
        value: String,
        location: ErrorLocation,
    },

    #[error("Encode Error: {message} {location}")]
    Encode {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl RegistryError {
    #[track_caller]
    pub fn invalid_identifier(
        field: &'static str,
        value: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Self {
        RegistryError::InvalidIdentifier {
            field,
            value: value.into(),
            pattern: pattern.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn invalid_params(operation: &'static str, source: ParamValidationError) -> Self {
        RegistryError::InvalidParams {
            operation,
            source,
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn transport(failure: TransportFailure, message: impl Into<String>) -> Self {
        RegistryError::Transport {
            failure,
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn cancelled() -> Self {
        Self::transport(TransportFailure::Cancelled, "request cancelled by caller")
    }

    #[track_caller]
    pub fn deadline_exceeded(limit: Duration) -> Self {
        Self::transport(
            TransportFailure::DeadlineExceeded,
            format!("no response within {}ms", limit.as_millis()),
        )
    }

    #[track_caller]
    pub fn api(problem: ApiProblem) -> Self {
        RegistryError::Api {
            problem,
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn malformed_error_body(status: HttpStatusCode, message: impl Into<String>) -> Self {
        RegistryError::MalformedErrorBody {
            status,
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn decode(message: impl Into<String>) -> Self {
        RegistryError::Decode {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn invalid_content_type(header: &'static str, value: impl Into<String>) -> Self {
        RegistryError::InvalidContentType {
            header,
            value: value.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn encode(message: impl Into<String>) -> Self {
        RegistryError::Encode {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn url_parse(message: impl Into<String>) -> Self {
        RegistryError::UrlParse {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    /// Create from reqwest error with proper categorization.
    ///
    /// The message carries the whole source chain, so OS-level causes such as
    /// "Connection refused" survive into the text.
    #[track_caller]
    pub fn from_reqwest(error: &reqwest::Error) -> Self {
        // Check for specific error types BEFORE converting to string
        let failure = if error.is_timeout() {
            TransportFailure::Timeout
        } else if error.is_connect() {
            TransportFailure::Connect
        } else if error.is_body() || error.is_decode() {
            TransportFailure::Body
        } else if error.is_request() || error.is_builder() {
            TransportFailure::Request
        } else {
            TransportFailure::Other
        };

        Self::transport(failure, error_chain(error))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistryError::InvalidIdentifier { .. }
            | RegistryError::InvalidParams { .. }
            | RegistryError::InvalidModel { .. } => ErrorKind::Validation,
            RegistryError::Transport { .. } => ErrorKind::Transport,
            RegistryError::Api { .. } => ErrorKind::Api,
            RegistryError::MalformedErrorBody { .. }
            | RegistryError::Decode { .. }
            | RegistryError::InvalidContentType { .. } => ErrorKind::Decode,
            RegistryError::Encode { .. }
            | RegistryError::UrlParse { .. }
            | RegistryError::Config(_) => ErrorKind::Request,
        }
    }

    /// Status reported by the registry, when a response was received.
    pub fn status(&self) -> Option<HttpStatusCode> {
        match self {
            RegistryError::Api { problem, .. } => Some(HttpStatusCode(problem.status)),
            RegistryError::MalformedErrorBody { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn api_problem(&self) -> Option<&ApiProblem> {
        match self {
            RegistryError::Api { problem, .. } => Some(problem),
            _ => None,
        }
    }

    pub fn transport_failure(&self) -> Option<TransportFailure> {
        match self {
            RegistryError::Transport { failure, .. } => Some(*failure),
            _ => None,
        }
    }

    /// Every failing field when parameter validation rejected the call.
    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            RegistryError::InvalidParams { source, .. } => source.violations(),
            _ => &[],
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status().is_some_and(|status| status.is_not_found())
    }

    pub fn is_conflict(&self) -> bool {
        self.status().is_some_and(|status| status.is_conflict())
    }
}

fn error_chain(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl From<url::ParseError> for RegistryError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        RegistryError::url_parse(error.to_string())
    }
}

impl From<reqwest::Error> for RegistryError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        RegistryError::from_reqwest(&error)
    }
}

impl From<ModelError> for RegistryError {
    #[track_caller]
    fn from(error: ModelError) -> Self {
        RegistryError::InvalidModel {
            message: error.to_string(),
            location: ErrorLocation::caller(),
        }
    }
}
