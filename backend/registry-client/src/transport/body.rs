use crate::error::RegistryError;

use serde::Serialize;
use serde_json::Value;

pub const OPAQUE_CONTENT_TYPE: &str = "*/*";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Outbound request body.
///
/// The variant alone decides the `Content-Type` header; content is never
/// sniffed.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    /// No body and no content type.
    #[default]
    Empty,
    /// Raw payload (e.g. a schema document), sent as `*/*`.
    Opaque(Vec<u8>),
    /// JSON document, sent as `application/json`.
    Structured(Value),
}

impl RequestBody {
    pub fn opaque(bytes: impl Into<Vec<u8>>) -> Self {
        RequestBody::Opaque(bytes.into())
    }

    /// Encode `value` as a structured body.
    #[track_caller]
    pub fn structured<T: Serialize + ?Sized>(value: &T) -> Result<Self, RegistryError> {
        match serde_json::to_value(value) {
            Ok(value) => Ok(RequestBody::Structured(value)),
            Err(e) => Err(RegistryError::encode(e.to_string())),
        }
    }

    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            RequestBody::Empty => None,
            RequestBody::Opaque(_) => Some(OPAQUE_CONTENT_TYPE),
            RequestBody::Structured(_) => Some(JSON_CONTENT_TYPE),
        }
    }

    /// Bytes to put on the wire; `None` for [`RequestBody::Empty`].
    #[track_caller]
    pub fn into_bytes(self) -> Result<Option<Vec<u8>>, RegistryError> {
        match self {
            RequestBody::Empty => Ok(None),
            RequestBody::Opaque(bytes) => Ok(Some(bytes)),
            RequestBody::Structured(value) => match serde_json::to_vec(&value) {
                Ok(bytes) => Ok(Some(bytes)),
                Err(e) => Err(RegistryError::encode(e.to_string())),
            },
        }
    }
}

impl From<Vec<u8>> for RequestBody {
    fn from(bytes: Vec<u8>) -> Self {
        RequestBody::Opaque(bytes)
    }
}

impl From<String> for RequestBody {
    fn from(text: String) -> Self {
        RequestBody::Opaque(text.into_bytes())
    }
}

impl From<&str> for RequestBody {
    fn from(text: &str) -> Self {
        RequestBody::Opaque(text.as_bytes().to_vec())
    }
}
