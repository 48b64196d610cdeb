use crate::params::{Checks, ParamValidationError, QueryPairs, QueryParams, SORT_ORDERS};
use crate::validation::{IdentifierKind, Validator};

pub const GROUP_SORT_FIELDS: &[&str] = &["groupId", "createdOn", "modifiedOn"];

/// `GET /groups`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListGroupsParams {
    pub limit: i64,
    pub offset: i64,
    pub order: String,
    pub order_by: String,
}

impl QueryParams for ListGroupsParams {
    const OPERATION: &'static str = "list groups";

    fn validate(&self, validator: &Validator) -> Result<(), ParamValidationError> {
        Checks::new(validator)
            .non_negative("limit", self.limit)
            .non_negative("offset", self.offset)
            .one_of("order", &self.order, SORT_ORDERS)
            .one_of("order_by", &self.order_by, GROUP_SORT_FIELDS)
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

/// `GET /search/groups`
///
/// Unlike artifact and version search, label filters here travel as a
/// single comma-joined `labels` value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchGroupsParams {
    pub offset: i64,
    pub limit: i64,
    pub order: String,
    pub order_by: String,
    pub labels: Vec<String>,
    pub description: String,
    pub group_id: String,
}

impl QueryParams for SearchGroupsParams {
    const OPERATION: &'static str = "search groups";

    fn validate(&self, validator: &Validator) -> Result<(), ParamValidationError> {
        Checks::new(validator)
            .non_negative("offset", self.offset)
            .non_negative("limit", self.limit)
            .one_of("order", &self.order, SORT_ORDERS)
            .one_of("order_by", &self.order_by, GROUP_SORT_FIELDS)
            .labels("labels", &self.labels, IdentifierKind::JoinedLabelFilter)
            .identifier("group_id", &self.group_id, IdentifierKind::GroupId)
            .finish()
    }

    fn to_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        query
            .int("offset", self.offset)
            .int("limit", self.limit)
            .text("order", &self.order)
            .text("orderby", &self.order_by)
            .joined("labels", &self.labels)
            .text("description", &self.description)
            .text("groupId", &self.group_id);
        query
    }
}
