use crate::error::RegistryError;
use crate::params::{ListGroupsParams, QueryPairs, SearchGroupsParams};
use crate::registry_client::RegistryClient;
use crate::transport::{RequestBody, RequestContext};
use crate::validation::IdentifierKind;

use models::{CreateGroup, EditableGroupMetadata, GroupMetadata, GroupSearchResults};

use reqwest::{Method, StatusCode};

impl RegistryClient {
    pub async fn list_groups(
        &self,
        ctx: &RequestContext,
        params: &ListGroupsParams,
    ) -> Result<GroupSearchResults, RegistryError> {
        let query = self.check_params(params)?;
        let url = self.endpoint(&["groups"], &query)?;
        self.fetch(ctx, Method::GET, url, RequestBody::Empty, StatusCode::OK)
            .await
    }

    pub async fn search_groups(
        &self,
        ctx: &RequestContext,
        params: &SearchGroupsParams,
    ) -> Result<GroupSearchResults, RegistryError> {
        let query = self.check_params(params)?;
        let url = self.endpoint(&["search", "groups"], &query)?;
        self.fetch(ctx, Method::GET, url, RequestBody::Empty, StatusCode::OK)
            .await
    }

    pub async fn create_group(
        &self,
        ctx: &RequestContext,
        group: &CreateGroup,
    ) -> Result<GroupMetadata, RegistryError> {
        self.check_id(&group.group_id, IdentifierKind::GroupId)?;
        let url = self.endpoint(&["groups"], &QueryPairs::new())?;
        let body = RequestBody::structured(group)?;
        self.fetch(ctx, Method::POST, url, body, StatusCode::OK).await
    }

    pub async fn get_group(
        &self,
        ctx: &RequestContext,
        group_id: &str,
    ) -> Result<GroupMetadata, RegistryError> {
        self.check_id(group_id, IdentifierKind::GroupId)?;
        let url = self.endpoint(&["groups", group_id], &QueryPairs::new())?;
        self.fetch(ctx, Method::GET, url, RequestBody::Empty, StatusCode::OK)
            .await
    }

    pub async fn update_group(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        metadata: &EditableGroupMetadata,
    ) -> Result<(), RegistryError> {
        self.check_id(group_id, IdentifierKind::GroupId)?;
        let url = self.endpoint(&["groups", group_id], &QueryPairs::new())?;
        let body = RequestBody::structured(metadata)?;
        self.fetch_empty(ctx, Method::PUT, url, body, StatusCode::NO_CONTENT)
            .await
    }

    /// Deletes the group and every artifact in it.
    pub async fn delete_group(
        &self,
        ctx: &RequestContext,
        group_id: &str,
    ) -> Result<(), RegistryError> {
        self.check_id(group_id, IdentifierKind::GroupId)?;
        let url = self.endpoint(&["groups", group_id], &QueryPairs::new())?;
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
