use crate::params::{
    Checks, IF_EXISTS_ACTIONS, ParamValidationError, QueryPairs, QueryParams, SORT_ORDERS,
};
use crate::validation::{IdentifierKind, Validator};

pub const ARTIFACT_SORT_FIELDS: &[&str] = &[
    "groupId",
    "artifactId",
    "createdOn",
    "modifiedOn",
    "artifactType",
    "name",
];

/// `GET /groups/{groupId}/artifacts`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListArtifactsParams {
    pub limit: i64,
    pub offset: i64,
    pub order: String,
    pub order_by: String,
}

impl QueryParams for ListArtifactsParams {
    const OPERATION: &'static str = "list artifacts";

    fn validate(&self, validator: &Validator) -> Result<(), ParamValidationError> {
        Checks::new(validator)
            .non_negative("limit", self.limit)
            .non_negative("offset", self.offset)
            .one_of("order", &self.order, SORT_ORDERS)
            .one_of("order_by", &self.order_by, ARTIFACT_SORT_FIELDS)
            .finish()
    }

    fn to_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        query
            .int("limit", self.limit)
            .int("offset", self.offset)
            .text("order", &self.order)
            .text("orderby", &self.order_by);
        query
    }
}

/// `GET /search/artifacts`
///
/// Label filters are sent as repeated `labels` keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchArtifactsParams {
    pub name: String,
    pub offset: i64,
    pub limit: i64,
    pub order: String,
    pub order_by: String,
    /// `key` or `key:value` entries.
    pub labels: Vec<String>,
    pub description: String,
    pub group_id: String,
    pub global_id: i64,
    pub content_id: i64,
    pub artifact_id: String,
    pub artifact_type: String,
}

impl QueryParams for SearchArtifactsParams {
    const OPERATION: &'static str = "search artifacts";

    fn validate(&self, validator: &Validator) -> Result<(), ParamValidationError> {
        Checks::new(validator)
            .non_negative("offset", self.offset)
            .non_negative("limit", self.limit)
            .one_of("order", &self.order, SORT_ORDERS)
            .one_of("order_by", &self.order_by, ARTIFACT_SORT_FIELDS)
            .labels("labels", &self.labels, IdentifierKind::LabelFilter)
            .identifier("group_id", &self.group_id, IdentifierKind::GroupId)
            .non_negative("global_id", self.global_id)
            .non_negative("content_id", self.content_id)
            .identifier("artifact_id", &self.artifact_id, IdentifierKind::ArtifactId)
            .artifact_type("artifact_type", &self.artifact_type)
            .finish()
    }

    fn to_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        query
            .text("name", &self.name)
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
            .text("artifactType", &self.artifact_type);
        query
    }
}

/// `POST /search/artifacts` (content in the body).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchArtifactsByContentParams {
    /// Compare canonicalized content rather than raw bytes.
    pub canonical: bool,
    pub artifact_type: String,
    pub group_id: String,
    pub offset: i64,
    pub limit: i64,
    pub order: String,
    pub order_by: String,
}

impl QueryParams for SearchArtifactsByContentParams {
    const OPERATION: &'static str = "search artifacts by content";

    fn validate(&self, validator: &Validator) -> Result<(), ParamValidationError> {
        Checks::new(validator)
            .artifact_type("artifact_type", &self.artifact_type)
            .identifier("group_id", &self.group_id, IdentifierKind::GroupId)
            .non_negative("offset", self.offset)
            .non_negative("limit", self.limit)
            .one_of("order", &self.order, SORT_ORDERS)
            .one_of("order_by", &self.order_by, ARTIFACT_SORT_FIELDS)
            .finish()
    }

    fn to_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        query
            .flag("canonical", self.canonical)
            .text("artifactType", &self.artifact_type)
            .text("groupId", &self.group_id)
            .int("offset", self.offset)
            .int("limit", self.limit)
            .text("order", &self.order)
            .text("orderby", &self.order_by);
        query
    }
}

/// `POST /groups/{groupId}/artifacts`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateArtifactParams {
    /// `FAIL`, `CREATE_VERSION` or `FIND_OR_CREATE_VERSION`.
    pub if_exists: String,
    pub canonical: bool,
    pub dry_run: bool,
}

impl QueryParams for CreateArtifactParams {
    const OPERATION: &'static str = "create artifact";

    fn validate(&self, validator: &Validator) -> Result<(), ParamValidationError> {
        Checks::new(validator)
            .one_of("if_exists", &self.if_exists, IF_EXISTS_ACTIONS)
            .finish()
    }

    fn to_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        query
            .text("ifExists", &self.if_exists)
            .flag("canonical", self.canonical)
            .flag("dryRun", self.dry_run);
        query
    }
}
