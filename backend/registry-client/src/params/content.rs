use crate::params::{
    Checks, ParamValidationError, QueryPairs, QueryParams, REFERENCE_HANDLING, REFERENCE_TYPES,
};
use crate::validation::Validator;

/// `GET .../versions/{versionExpression}/content`, content by content id or hash.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentParams {
    /// `PRESERVE`, `DEREFERENCE` or `REWRITE`.
    pub references: String,
}

impl QueryParams for ContentParams {
    const OPERATION: &'static str = "get content";

    fn validate(&self, validator: &Validator) -> Result<(), ParamValidationError> {
        Checks::new(validator)
            .one_of("references", &self.references, REFERENCE_HANDLING)
            .finish()
    }

    fn to_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        query.text("references", &self.references);
        query
    }
}

/// `GET /ids/globalIds/{globalId}`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalIdContentParams {
    pub references: String,
    /// Ask the registry to send the `X-Registry-ArtifactType` header.
    pub return_artifact_type: bool,
}

impl QueryParams for GlobalIdContentParams {
    const OPERATION: &'static str = "get content by global id";

    fn validate(&self, validator: &Validator) -> Result<(), ParamValidationError> {
        Checks::new(validator)
            .one_of("references", &self.references, REFERENCE_HANDLING)
            .finish()
    }

    fn to_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        query
            .text("references", &self.references)
            .flag("returnArtifactType", self.return_artifact_type);
        query
    }
}

/// `GET .../versions/{versionExpression}/references`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferencesParams {
    /// `OUTBOUND` or `INBOUND`.
    pub ref_type: String,
}

impl QueryParams for ReferencesParams {
    const OPERATION: &'static str = "list references";

    fn validate(&self, validator: &Validator) -> Result<(), ParamValidationError> {
        Checks::new(validator)
            .one_of("ref_type", &self.ref_type, REFERENCE_TYPES)
            .finish()
    }

    fn to_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        query.text("refType", &self.ref_type);
        query
    }
}
