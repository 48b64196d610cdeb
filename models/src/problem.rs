use std::fmt;

use serde::{Deserialize, Serialize};

/// Structured failure body returned by the registry for any rejected call.
///
/// Only `status` and `title` are part of the contract; extra fields in the
/// body (`detail`, `instance`, ...) are ignored when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiProblem {
    pub status: u16,
    pub title: String,
}

impl ApiProblem {
    pub fn new(status: u16, title: impl Into<String>) -> Self {
        Self {
            status,
            title: title.into(),
        }
    }
}

impl fmt::Display for ApiProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {} - {}", self.status, self.title)
    }
}
