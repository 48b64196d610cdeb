use crate::error::RegistryError;
use crate::params::{ContentParams, GlobalIdContentParams, QueryPairs};
use crate::registry_client::RegistryClient;
use crate::transport::{ArtifactContent, RequestBody, RequestContext};
use crate::validation::IdentifierKind;

use models::ArtifactReference;

use reqwest::{Method, StatusCode};

impl RegistryClient {
    /// Content addressed by global id.
    ///
    /// The artifact type header is negotiated exactly when
    /// `return_artifact_type` is set.
    pub async fn content_by_global_id(
        &self,
        ctx: &RequestContext,
        global_id: i64,
        params: &GlobalIdContentParams,
    ) -> Result<ArtifactContent, RegistryError> {
        let global_id = check_numeric_id("Global ID", global_id)?;
        let query = self.check_params(params)?;
        let url = self.endpoint(&["ids", "globalIds", global_id.as_str()], &query)?;
        self.fetch_content(ctx, url, params.return_artifact_type)
            .await
    }

    pub async fn content_by_content_id(
        &self,
        ctx: &RequestContext,
        content_id: i64,
        params: &ContentParams,
    ) -> Result<ArtifactContent, RegistryError> {
        let content_id = check_numeric_id("Content ID", content_id)?;
        let query = self.check_params(params)?;
        let url = self.endpoint(&["ids", "contentIds", content_id.as_str()], &query)?;
        self.fetch_content(ctx, url, false).await
    }

    /// Content addressed by its SHA-256 hash (hex).
    pub async fn content_by_hash(
        &self,
        ctx: &RequestContext,
        content_hash: &str,
        params: &ContentParams,
    ) -> Result<ArtifactContent, RegistryError> {
        self.check_id(content_hash, IdentifierKind::ContentHash)?;
        let query = self.check_params(params)?;
        let url = self.endpoint(&["ids", "contentHashes", content_hash], &query)?;
        self.fetch_content(ctx, url, false).await
    }

    pub async fn references_by_global_id(
        &self,
        ctx: &RequestContext,
        global_id: i64,
    ) -> Result<Vec<ArtifactReference>, RegistryError> {
        let global_id = check_numeric_id("Global ID", global_id)?;
        let url = self.endpoint(
            &["ids", "globalIds", global_id.as_str(), "references"],
            &QueryPairs::new(),
        )?;
        self.fetch(ctx, Method::GET, url, RequestBody::Empty, StatusCode::OK)
            .await
    }
}

const NUMERIC_ID_PATTERN: &str = r"^[0-9]+$";

/// Registry ids are non-negative; rendered as a path segment.
#[track_caller]
fn check_numeric_id(field: &'static str, id: i64) -> Result<String, RegistryError> {
    if id < 0 {
        return Err(RegistryError::invalid_identifier(
            field,
            id.to_string(),
            NUMERIC_ID_PATTERN,
        ));
    }
    Ok(id.to_string())
}
