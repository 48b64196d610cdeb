//! Uniform decoding of registry responses.
//!
//! Every function takes the response by value: the body is consumed or
//! dropped exactly once on every path, whichever branch returns.
//!
//! A status other than the expected one is always decoded as an
//! [`ApiProblem`]; a body that is not a problem document becomes
//! [`RegistryError::MalformedErrorBody`] carrying the original status.

use crate::error::RegistryError;
use crate::transport::content_type::{ArtifactContent, parse_artifact_type};

use common::HttpStatusCode;
use models::ApiProblem;

use log::debug;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

/// Decode a JSON body into `T` when the status is `expected`.
pub async fn resolve<T: DeserializeOwned>(
    response: Response,
    expected: StatusCode,
) -> Result<T, RegistryError> {
    let status = response.status();
    let body = read_body(response).await?;

    if status != expected {
        return Err(api_error(status, &body));
    }

    decode_json(&body)
}

/// Check the status of a call that produces no value; a matching body is ignored.
pub async fn resolve_empty(response: Response, expected: StatusCode) -> Result<(), RegistryError> {
    let status = response.status();

    if status == expected {
        return Ok(());
    }

    let body = read_body(response).await?;
    Err(api_error(status, &body))
}

/// Return the body text verbatim when the status is `expected`.
pub async fn resolve_raw(
    response: Response,
    expected: StatusCode,
) -> Result<String, RegistryError> {
    let status = response.status();
    let body = read_body(response).await?;

    if status != expected {
        return Err(api_error(status, &body));
    }

    match String::from_utf8(body) {
        Ok(text) => Ok(text),
        Err(e) => Err(RegistryError::decode(format!("response body is not UTF-8: {e}"))),
    }
}

/// Raw variant that also negotiates the artifact type header when asked.
pub async fn resolve_content(
    response: Response,
    expected: StatusCode,
    negotiate: bool,
) -> Result<ArtifactContent, RegistryError> {
    let artifact_type = if negotiate && response.status() == expected {
        Some(parse_artifact_type(response.headers())?)
    } else {
        None
    };

    let content = resolve_raw(response, expected).await?;

    Ok(ArtifactContent {
        content,
        artifact_type,
    })
}

/// Decode a success body; failures are [`RegistryError::Decode`], never API errors.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, RegistryError> {
    match serde_json::from_slice(body) {
        Ok(value) => Ok(value),
        Err(e) => Err(RegistryError::decode(format!(
            "failed to decode response body: {e}"
        ))),
    }
}

/// Turn an unexpected-status body into the matching error.
pub fn api_error(status: StatusCode, body: &[u8]) -> RegistryError {
    debug!("Unexpected status {status}, decoding problem body");

    match serde_json::from_slice::<ApiProblem>(body) {
        Ok(problem) => RegistryError::api(problem),
        Err(e) => RegistryError::malformed_error_body(
            HttpStatusCode(status.as_u16()),
            format!("failed to decode error body: {e}"),
        ),
    }
}

async fn read_body(response: Response) -> Result<Vec<u8>, RegistryError> {
    match response.bytes().await {
        Ok(bytes) => Ok(bytes.to_vec()),
        Err(e) => Err(RegistryError::from_reqwest(&e)),
    }
}
