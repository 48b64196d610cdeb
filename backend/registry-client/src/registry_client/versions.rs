use crate::error::RegistryError;
use crate::params::{
    ContentParams, CreateVersionParams, ListVersionsParams, QueryPairs, ReferencesParams,
    SearchVersionsParams, UpdateStateParams,
};
use crate::registry_client::RegistryClient;
use crate::transport::{ArtifactContent, RequestBody, RequestContext};
use crate::validation::IdentifierKind;

use models::{
    ArtifactReference, Comment, CommentBody, CreateVersion, EditableVersionMetadata,
    VersionContent, VersionMetadata, VersionSearchResults, VersionState, VersionStateBody,
};

use reqwest::{Method, StatusCode};
use url::Url;

impl RegistryClient {
    /// `.../groups/{g}/artifacts/{a}/versions[/{version}][/{tail...}]`
    fn version_url(
        &self,
        group_id: &str,
        artifact_id: &str,
        version_expression: Option<&str>,
        tail: &[&str],
        query: &QueryPairs,
    ) -> Result<Url, RegistryError> {
        self.check_id(group_id, IdentifierKind::GroupId)?;
        self.check_id(artifact_id, IdentifierKind::ArtifactId)?;

        let mut segments = vec!["groups", group_id, "artifacts", artifact_id, "versions"];
        if let Some(version_expression) = version_expression {
            self.check_id(version_expression, IdentifierKind::VersionExpression)?;
            segments.push(version_expression);
        }
        segments.extend_from_slice(tail);

        self.endpoint(&segments, query)
    }

    pub async fn list_versions(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        artifact_id: &str,
        params: &ListVersionsParams,
    ) -> Result<VersionSearchResults, RegistryError> {
        let query = self.check_params(params)?;
        let url = self.version_url(group_id, artifact_id, None, &[], &query)?;
        self.fetch(ctx, Method::GET, url, RequestBody::Empty, StatusCode::OK)
            .await
    }

    pub async fn search_versions(
        &self,
        ctx: &RequestContext,
        params: &SearchVersionsParams,
    ) -> Result<VersionSearchResults, RegistryError> {
        let query = self.check_params(params)?;
        let url = self.endpoint(&["search", "versions"], &query)?;
        self.fetch(ctx, Method::GET, url, RequestBody::Empty, StatusCode::OK)
            .await
    }

    pub async fn create_version(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        artifact_id: &str,
        version: &CreateVersion,
        params: &CreateVersionParams,
    ) -> Result<VersionMetadata, RegistryError> {
        self.check_new_version(version)?;

        let query = self.check_params(params)?;
        let url = self.version_url(group_id, artifact_id, None, &[], &query)?;
        let body = RequestBody::structured(version)?;
        self.fetch(ctx, Method::POST, url, body, StatusCode::OK).await
    }

    pub async fn get_version(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        artifact_id: &str,
        version_expression: &str,
    ) -> Result<VersionMetadata, RegistryError> {
        let url = self.version_url(
            group_id,
            artifact_id,
            Some(version_expression),
            &[],
            &QueryPairs::new(),
        )?;
        self.fetch(ctx, Method::GET, url, RequestBody::Empty, StatusCode::OK)
            .await
    }

    pub async fn update_version(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        artifact_id: &str,
        version_expression: &str,
        metadata: &EditableVersionMetadata,
    ) -> Result<(), RegistryError> {
        let url = self.version_url(
            group_id,
            artifact_id,
            Some(version_expression),
            &[],
            &QueryPairs::new(),
        )?;
        let body = RequestBody::structured(metadata)?;
        self.fetch_empty(ctx, Method::PUT, url, body, StatusCode::NO_CONTENT)
            .await
    }

    pub async fn delete_version(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        artifact_id: &str,
        version_expression: &str,
    ) -> Result<(), RegistryError> {
        let url = self.version_url(
            group_id,
            artifact_id,
            Some(version_expression),
            &[],
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

    /// Raw schema document of one version.
    ///
    /// With `negotiate` set the `X-Registry-ArtifactType` response header is
    /// required and parsed into [`ArtifactContent::artifact_type`].
    pub async fn get_version_content(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        artifact_id: &str,
        version_expression: &str,
        params: &ContentParams,
        negotiate: bool,
    ) -> Result<ArtifactContent, RegistryError> {
        let query = self.check_params(params)?;
        let url = self.version_url(
            group_id,
            artifact_id,
            Some(version_expression),
            &["content"],
            &query,
        )?;
        self.fetch_content(ctx, url, negotiate).await
    }

    /// Replace the content of a `DRAFT` version.
    pub async fn update_version_content(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        artifact_id: &str,
        version_expression: &str,
        content: &VersionContent,
    ) -> Result<(), RegistryError> {
        let url = self.version_url(
            group_id,
            artifact_id,
            Some(version_expression),
            &["content"],
            &QueryPairs::new(),
        )?;
        let body = RequestBody::structured(content)?;
        self.fetch_empty(ctx, Method::PUT, url, body, StatusCode::NO_CONTENT)
            .await
    }

    pub async fn get_version_state(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        artifact_id: &str,
        version_expression: &str,
    ) -> Result<VersionState, RegistryError> {
        let url = self.version_url(
            group_id,
            artifact_id,
            Some(version_expression),
            &["state"],
            &QueryPairs::new(),
        )?;
        let body: VersionStateBody = self
            .fetch(ctx, Method::GET, url, RequestBody::Empty, StatusCode::OK)
            .await?;
        Ok(body.state)
    }

    pub async fn update_version_state(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        artifact_id: &str,
        version_expression: &str,
        state: VersionState,
        params: &UpdateStateParams,
    ) -> Result<(), RegistryError> {
        let query = self.check_params(params)?;
        let url = self.version_url(
            group_id,
            artifact_id,
            Some(version_expression),
            &["state"],
            &query,
        )?;
        let body = RequestBody::structured(&VersionStateBody { state })?;
        self.fetch_empty(ctx, Method::PUT, url, body, StatusCode::NO_CONTENT)
            .await
    }

    pub async fn list_version_references(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        artifact_id: &str,
        version_expression: &str,
        params: &ReferencesParams,
    ) -> Result<Vec<ArtifactReference>, RegistryError> {
        let query = self.check_params(params)?;
        let url = self.version_url(
            group_id,
            artifact_id,
            Some(version_expression),
            &["references"],
            &query,
        )?;
        self.fetch(ctx, Method::GET, url, RequestBody::Empty, StatusCode::OK)
            .await
    }

    pub async fn list_comments(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        artifact_id: &str,
        version_expression: &str,
    ) -> Result<Vec<Comment>, RegistryError> {
        let url = self.version_url(
            group_id,
            artifact_id,
            Some(version_expression),
            &["comments"],
            &QueryPairs::new(),
        )?;
        self.fetch(ctx, Method::GET, url, RequestBody::Empty, StatusCode::OK)
            .await
    }

    pub async fn add_comment(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        artifact_id: &str,
        version_expression: &str,
        value: &str,
    ) -> Result<Comment, RegistryError> {
        let url = self.version_url(
            group_id,
            artifact_id,
            Some(version_expression),
            &["comments"],
            &QueryPairs::new(),
        )?;
        let body = RequestBody::structured(&CommentBody {
            value: value.to_string(),
        })?;
        self.fetch(ctx, Method::POST, url, body, StatusCode::OK).await
    }

    pub async fn update_comment(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        artifact_id: &str,
        version_expression: &str,
        comment_id: &str,
        value: &str,
    ) -> Result<(), RegistryError> {
        self.check_id(comment_id, IdentifierKind::CommentId)?;
        let url = self.version_url(
            group_id,
            artifact_id,
            Some(version_expression),
            &["comments", comment_id],
            &QueryPairs::new(),
        )?;
        let body = RequestBody::structured(&CommentBody {
            value: value.to_string(),
        })?;
        self.fetch_empty(ctx, Method::PUT, url, body, StatusCode::NO_CONTENT)
            .await
    }

    pub async fn delete_comment(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        artifact_id: &str,
        version_expression: &str,
        comment_id: &str,
    ) -> Result<(), RegistryError> {
        self.check_id(comment_id, IdentifierKind::CommentId)?;
        let url = self.version_url(
            group_id,
            artifact_id,
            Some(version_expression),
            &["comments", comment_id],
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
}
