use crate::params::{Checks, ParamValidationError, QueryPairs, QueryParams};
use crate::validation::Validator;

/// `GET .../branches` and `GET .../branches/{branchId}/versions`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListBranchesParams {
    pub offset: i64,
    pub limit: i64,
}

impl QueryParams for ListBranchesParams {
    const OPERATION: &'static str = "list branches";

    fn validate(&self, validator: &Validator) -> Result<(), ParamValidationError> {
        Checks::new(validator)
            .non_negative("offset", self.offset)
            .non_negative("limit", self.limit)
            .finish()
    }

    fn to_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        query.int("offset", self.offset).int("limit", self.limit);
        query
    }
}
