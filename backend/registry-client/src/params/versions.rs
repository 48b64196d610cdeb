use crate::params::{Checks, ParamValidationError, QueryPairs, QueryParams, SORT_ORDERS};
use crate::validation::{IdentifierKind, Validator};

use models::VersionState;

pub const VERSION_SORT_FIELDS: &[&str] = &[
    "groupId",
    "artifactId",
    "version",
    "name",
    "createdOn",
    "modifiedOn",
    "globalId",
];

/// `GET /groups/{groupId}/artifacts/{artifactId}/versions`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListVersionsParams {
    pub offset: i64,
    pub limit: i64,
    pub order: String,
    pub order_by: String,
}

impl QueryParams for ListVersionsParams {
    const OPERATION: &'static str = "list versions";

    fn validate(&self, validator: &Validator) -> Result<(), ParamValidationError> {
        Checks::new(validator)
            .non_negative("offset", self.offset)
            .non_negative("limit", self.limit)
            .one_of("order", &self.order, SORT_ORDERS)
            .one_of("order_by", &self.order_by, VERSION_SORT_FIELDS)
            .finish()
    }

    fn to_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        query
            .int("offset", self.offset)
            .int("limit", self.limit)
            .text("order", &self.order)
            .text("orderby", &self.order_by);
        query
    }
}

/// `GET /search/versions`
///
/// Label filters are sent as repeated `labels` keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchVersionsParams {
    pub version: String,
    pub offset: i64,
    pub limit: i64,
    pub order: String,
    pub order_by: String,
    pub labels: Vec<String>,
    pub description: String,
    pub group_id: String,
    pub global_id: i64,
    pub content_id: i64,
    pub artifact_id: String,
    pub name: String,
    /// One of the [`VersionState`] tokens.
    pub state: String,
    pub artifact_type: String,
}

impl QueryParams for SearchVersionsParams {
    const OPERATION: &'static str = "search versions";

    fn validate(&self, validator: &Validator) -> Result<(), ParamValidationError> {
        Checks::new(validator)
            .identifier("version", &self.version, IdentifierKind::Version)
            .non_negative("offset", self.offset)
            .non_negative("limit", self.limit)
            .one_of("order", &self.order, SORT_ORDERS)
            .one_of("order_by", &self.order_by, VERSION_SORT_FIELDS)
            .labels("labels", &self.labels, IdentifierKind::LabelFilter)
            .identifier("group_id", &self.group_id, IdentifierKind::GroupId)
            .non_negative("global_id", self.global_id)
            .non_negative("content_id", self.content_id)
            .identifier("artifact_id", &self.artifact_id, IdentifierKind::ArtifactId)
            .one_of("state", &self.state, VersionState::TOKENS)
            .artifact_type("artifact_type", &self.artifact_type)
            .finish()
    }

    fn to_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        query
            .text("version", &self.version)
            .int("offset", self.offset)
            .int("limit", self.limit)
            .text("order", &self.order)
            .text("orderby", &self.order_by)
            .repeated("labels", &self.labels)
            .text("description", &self.description)
            .text("groupId", &self.group_id)
            .int("globalId", self.global_id)
            .int("contentId", self.content_id)
            .text("artifactId", &self.artifact_id)
            .text("name", &self.name)
            .text("state", &self.state)
            .text("artifactType", &self.artifact_type);
        query
    }
}

/// `POST /groups/{groupId}/artifacts/{artifactId}/versions`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateVersionParams {
    pub dry_run: bool,
}

impl QueryParams for CreateVersionParams {
    const OPERATION: &'static str = "create version";

    fn validate(&self, _validator: &Validator) -> Result<(), ParamValidationError> {
        Ok(())
    }

    fn to_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        query.flag("dryRun", self.dry_run);
        query
    }
}

/// `PUT .../versions/{versionExpression}/state`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateStateParams {
    pub dry_run: bool,
}

impl QueryParams for UpdateStateParams {
    const OPERATION: &'static str = "update version state";

    fn validate(&self, _validator: &Validator) -> Result<(), ParamValidationError> {
        Ok(())
    }

    fn to_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        query.flag("dryRun", self.dry_run);
        query
    }
}
