use crate::error::RegistryError;

use models::ArtifactType;

use std::str::FromStr;

use reqwest::header::HeaderMap;

/// Response header naming the format of raw artifact content.
pub const ARTIFACT_TYPE_HEADER: &str = "X-Registry-ArtifactType";

/// Raw artifact payload as returned by content endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactContent {
    /// Body text, exactly as received.
    pub content: String,
    /// Set only when the call negotiated the format header.
    pub artifact_type: Option<ArtifactType>,
}

/// Read and validate [`ARTIFACT_TYPE_HEADER`].
///
/// A missing, empty, non-text or unknown value is an error naming the
/// value; there is no default format.
#[track_caller]
pub fn parse_artifact_type(headers: &HeaderMap) -> Result<ArtifactType, RegistryError> {
    let Some(raw) = headers.get(ARTIFACT_TYPE_HEADER) else {
        return Err(RegistryError::invalid_content_type(ARTIFACT_TYPE_HEADER, ""));
    };

    let value = match raw.to_str() {
        Ok(value) => value.trim(),
        Err(_) => {
            return Err(RegistryError::invalid_content_type(
                ARTIFACT_TYPE_HEADER,
                String::from_utf8_lossy(raw.as_bytes()),
            ));
        }
    };

    match ArtifactType::from_str(value) {
        Ok(artifact_type) => Ok(artifact_type),
        Err(_) => Err(RegistryError::invalid_content_type(ARTIFACT_TYPE_HEADER, value)),
    }
}
