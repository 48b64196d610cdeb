use crate::error::RegistryError;
use crate::params::{
    CreateArtifactParams, ListArtifactsParams, QueryPairs, SearchArtifactsByContentParams,
    SearchArtifactsParams,
};
use crate::registry_client::RegistryClient;
use crate::transport::{RequestBody, RequestContext};
use crate::validation::IdentifierKind;

use models::{
    ArtifactMetadata, ArtifactSearchResults, CreateArtifact, CreateArtifactResponse,
    EditableArtifactMetadata,
};

use reqwest::{Method, StatusCode};

impl RegistryClient {
    pub async fn search_artifacts(
        &self,
        ctx: &RequestContext,
        params: &SearchArtifactsParams,
    ) -> Result<ArtifactSearchResults, RegistryError> {
        let query = self.check_params(params)?;
        let url = self.endpoint(&["search", "artifacts"], &query)?;
        self.fetch(ctx, Method::GET, url, RequestBody::Empty, StatusCode::OK)
            .await
    }

    /// Find artifacts whose content matches `content`, sent as an opaque body.
    pub async fn search_artifacts_by_content(
        &self,
        ctx: &RequestContext,
        content: impl Into<Vec<u8>>,
        params: &SearchArtifactsByContentParams,
    ) -> Result<ArtifactSearchResults, RegistryError> {
        let query = self.check_params(params)?;
        let url = self.endpoint(&["search", "artifacts"], &query)?;
        let body = RequestBody::opaque(content);
        self.fetch(ctx, Method::POST, url, body, StatusCode::OK).await
    }

    pub async fn list_artifacts(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        params: &ListArtifactsParams,
    ) -> Result<ArtifactSearchResults, RegistryError> {
        self.check_id(group_id, IdentifierKind::GroupId)?;
        let query = self.check_params(params)?;
        let url = self.endpoint(&["groups", group_id, "artifacts"], &query)?;
        self.fetch(ctx, Method::GET, url, RequestBody::Empty, StatusCode::OK)
            .await
    }

    pub async fn create_artifact(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        artifact: &CreateArtifact,
        params: &CreateArtifactParams,
    ) -> Result<CreateArtifactResponse, RegistryError> {
        self.check_id(group_id, IdentifierKind::GroupId)?;
        if let Some(artifact_id) = &artifact.artifact_id {
            self.check_id(artifact_id, IdentifierKind::ArtifactId)?;
        }
        if let Some(first_version) = &artifact.first_version {
            self.check_new_version(first_version)?;
        }
        let query = self.check_params(params)?;
        let url = self.endpoint(&["groups", group_id, "artifacts"], &query)?;
        let body = RequestBody::structured(artifact)?;
        self.fetch(ctx, Method::POST, url, body, StatusCode::OK).await
    }

    pub async fn get_artifact(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        artifact_id: &str,
    ) -> Result<ArtifactMetadata, RegistryError> {
        self.check_id(group_id, IdentifierKind::GroupId)?;
        self.check_id(artifact_id, IdentifierKind::ArtifactId)?;
        let url = self.endpoint(
            &["groups", group_id, "artifacts", artifact_id],
            &QueryPairs::new(),
        )?;
        self.fetch(ctx, Method::GET, url, RequestBody::Empty, StatusCode::OK)
            .await
    }

    pub async fn update_artifact(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        artifact_id: &str,
        metadata: &EditableArtifactMetadata,
    ) -> Result<(), RegistryError> {
        self.check_id(group_id, IdentifierKind::GroupId)?;
        self.check_id(artifact_id, IdentifierKind::ArtifactId)?;
        let url = self.endpoint(
            &["groups", group_id, "artifacts", artifact_id],
            &QueryPairs::new(),
        )?;
        let body = RequestBody::structured(metadata)?;
        self.fetch_empty(ctx, Method::PUT, url, body, StatusCode::NO_CONTENT)
            .await
    }

    pub async fn delete_artifact(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        artifact_id: &str,
    ) -> Result<(), RegistryError> {
        self.check_id(group_id, IdentifierKind::GroupId)?;
        self.check_id(artifact_id, IdentifierKind::ArtifactId)?;
        let url = self.endpoint(
            &["groups", group_id, "artifacts", artifact_id],
            &QueryPairs::new(),
        )?;
        self.fetch_empty(
            ctx,
            Method::DELETE,
            url,
            RequestBody::Empty,
            StatusCode::NO_CONTENT,
        )
        .await
    }

    pub async fn delete_artifacts_in_group(
        &self,
        ctx: &RequestContext,
        group_id: &str,
    ) -> Result<(), RegistryError> {
        self.check_id(group_id, IdentifierKind::GroupId)?;
        let url = self.endpoint(&["groups", group_id, "artifacts"], &QueryPairs::new())?;
        self.fetch_empty(
            ctx,
            Method::DELETE,
            url,
            RequestBody::Empty,
            StatusCode::NO_CONTENT,
        )
        .await
    }
}
