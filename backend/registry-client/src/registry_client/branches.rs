use crate::error::RegistryError;
use crate::params::{ListBranchesParams, QueryPairs};
use crate::registry_client::RegistryClient;
use crate::transport::{RequestBody, RequestContext};
use crate::validation::IdentifierKind;

use models::{
    AddVersionToBranch, BranchMetadata, BranchSearchResults, CreateBranch,
    EditableBranchMetadata, ReplaceBranchVersions, VersionSearchResults,
};

use reqwest::{Method, StatusCode};
use url::Url;

impl RegistryClient {
    /// `.../groups/{g}/artifacts/{a}/branches[/{branch}][/{tail...}]`
    fn branch_url(
        &self,
        group_id: &str,
        artifact_id: &str,
        branch_id: Option<&str>,
        tail: &[&str],
        query: &QueryPairs,
    ) -> Result<Url, RegistryError> {
        self.check_id(group_id, IdentifierKind::GroupId)?;
        self.check_id(artifact_id, IdentifierKind::ArtifactId)?;

        let mut segments = vec!["groups", group_id, "artifacts", artifact_id, "branches"];
        if let Some(branch_id) = branch_id {
            self.check_id(branch_id, IdentifierKind::BranchId)?;
            segments.push(branch_id);
        }
        segments.extend_from_slice(tail);

        self.endpoint(&segments, query)
    }

    pub async fn list_branches(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        artifact_id: &str,
        params: &ListBranchesParams,
    ) -> Result<BranchSearchResults, RegistryError> {
        let query = self.check_params(params)?;
        let url = self.branch_url(group_id, artifact_id, None, &[], &query)?;
        self.fetch(ctx, Method::GET, url, RequestBody::Empty, StatusCode::OK)
            .await
    }

    pub async fn create_branch(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        artifact_id: &str,
        branch: &CreateBranch,
    ) -> Result<BranchMetadata, RegistryError> {
        self.check_id(&branch.branch_id, IdentifierKind::BranchId)?;
        for version in &branch.versions {
            self.check_id(version, IdentifierKind::Version)?;
        }

        let url = self.branch_url(group_id, artifact_id, None, &[], &QueryPairs::new())?;
        let body = RequestBody::structured(branch)?;
        self.fetch(ctx, Method::POST, url, body, StatusCode::OK).await
    }

    pub async fn get_branch(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        artifact_id: &str,
        branch_id: &str,
    ) -> Result<BranchMetadata, RegistryError> {
        let url = self.branch_url(
            group_id,
            artifact_id,
            Some(branch_id),
            &[],
            &QueryPairs::new(),
        )?;
        self.fetch(ctx, Method::GET, url, RequestBody::Empty, StatusCode::OK)
            .await
    }

    pub async fn update_branch(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        artifact_id: &str,
        branch_id: &str,
        metadata: &EditableBranchMetadata,
    ) -> Result<(), RegistryError> {
        let url = self.branch_url(
            group_id,
            artifact_id,
            Some(branch_id),
            &[],
            &QueryPairs::new(),
        )?;
        let body = RequestBody::structured(metadata)?;
        self.fetch_empty(ctx, Method::PUT, url, body, StatusCode::NO_CONTENT)
            .await
    }

    pub async fn delete_branch(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        artifact_id: &str,
        branch_id: &str,
    ) -> Result<(), RegistryError> {
        let url = self.branch_url(
            group_id,
            artifact_id,
            Some(branch_id),
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

    pub async fn list_branch_versions(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        artifact_id: &str,
        branch_id: &str,
        params: &ListBranchesParams,
    ) -> Result<VersionSearchResults, RegistryError> {
        let query = self.check_params(params)?;
        let url = self.branch_url(
            group_id,
            artifact_id,
            Some(branch_id),
            &["versions"],
            &query,
        )?;
        self.fetch(ctx, Method::GET, url, RequestBody::Empty, StatusCode::OK)
            .await
    }

    /// Replace the branch's version list; order is kept as given.
    pub async fn replace_branch_versions(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        artifact_id: &str,
        branch_id: &str,
        versions: &[String],
    ) -> Result<(), RegistryError> {
        for version in versions {
            self.check_id(version, IdentifierKind::Version)?;
        }

        let url = self.branch_url(
            group_id,
            artifact_id,
            Some(branch_id),
            &["versions"],
            &QueryPairs::new(),
        )?;
        let body = RequestBody::structured(&ReplaceBranchVersions {
            versions: versions.to_vec(),
        })?;
        self.fetch_empty(ctx, Method::PUT, url, body, StatusCode::NO_CONTENT)
            .await
    }

    pub async fn add_version_to_branch(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        artifact_id: &str,
        branch_id: &str,
        version: &str,
    ) -> Result<(), RegistryError> {
        self.check_id(version, IdentifierKind::Version)?;

        let url = self.branch_url(
            group_id,
            artifact_id,
            Some(branch_id),
            &["versions"],
            &QueryPairs::new(),
        )?;
        let body = RequestBody::structured(&AddVersionToBranch {
            version: version.to_string(),
        })?;
        self.fetch_empty(ctx, Method::POST, url, body, StatusCode::NO_CONTENT)
            .await
    }
}
