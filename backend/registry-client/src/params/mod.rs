//! Per-operation query parameter objects.
//!
//! Each object validates itself field by field, collecting every failure
//! rather than stopping at the first, and serializes itself into query
//! pairs. Zero-valued fields never appear in the query: the registry owns
//! the defaults.

pub mod artifacts;
pub mod branches;
pub mod content;
pub mod groups;
pub mod versions;

pub use artifacts::{
    CreateArtifactParams, ListArtifactsParams, SearchArtifactsByContentParams,
    SearchArtifactsParams,
};
pub use branches::ListBranchesParams;
pub use content::{ContentParams, GlobalIdContentParams, ReferencesParams};
pub use groups::{ListGroupsParams, SearchGroupsParams};
pub use versions::{
    CreateVersionParams, ListVersionsParams, SearchVersionsParams, UpdateStateParams,
};

use crate::validation::{IdentifierKind, Validator};

use models::ArtifactType;

use std::error::Error as StdError;
use std::fmt;

pub const SORT_ORDERS: &[&str] = &["asc", "desc"];
pub const IF_EXISTS_ACTIONS: &[&str] = &["FAIL", "CREATE_VERSION", "FIND_OR_CREATE_VERSION"];
pub const REFERENCE_HANDLING: &[&str] = &["PRESERVE", "DEREFERENCE", "REWRITE"];
pub const REFERENCE_TYPES: &[&str] = &["OUTBOUND", "INBOUND"];

/// A rule a parameter field can violate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// Numeric lower bound.
    Gte(i64),
    /// Membership in a fixed set of tokens.
    OneOf(&'static [&'static str]),
    /// Full match against an identifier pattern.
    Pattern(&'static str),
}

impl Constraint {
    /// Short rule tag (`gte`, `oneof`, `pattern`).
    pub const fn tag(&self) -> &'static str {
        match self {
            Constraint::Gte(_) => "gte",
            Constraint::OneOf(_) => "oneof",
            Constraint::Pattern(_) => "pattern",
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Gte(bound) => write!(f, "gte={bound}"),
            Constraint::OneOf(allowed) => write!(f, "oneof={}", allowed.join(" ")),
            Constraint::Pattern(pattern) => write!(f, "pattern={pattern}"),
        }
    }
}

/// One failing field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub value: String,
    pub constraint: Constraint,
}

impl FieldViolation {
    pub fn tag(&self) -> &'static str {
        self.constraint.tag()
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field '{}' with value '{}' failed '{}'",
            self.field, self.value, self.constraint
        )
    }
}

/// All violations found in one parameter object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamValidationError {
    violations: Vec<FieldViolation>,
}

impl ParamValidationError {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Whether `field` failed the rule tagged `tag`.
    pub fn has(&self, field: &str, tag: &str) -> bool {
        self.violations
            .iter()
            .any(|violation| violation.field == field && violation.tag() == tag)
    }
}

impl fmt::Display for ParamValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, violation) in self.violations.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl StdError for ParamValidationError {}

/// Ordered query pairs; keys are the registry's wire names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPairs(Vec<(&'static str, String)>);

impl QueryPairs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.0.iter().map(|(key, value)| (*key, value.as_str()))
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.iter().filter(|(k, _)| *k == key).map(|(_, v)| v).collect()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub(crate) fn int(&mut self, key: &'static str, value: i64) -> &mut Self {
        if value != 0 {
            self.0.push((key, value.to_string()));
        }
        self
    }

    pub(crate) fn text(&mut self, key: &'static str, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.0.push((key, value.to_string()));
        }
        self
    }

    pub(crate) fn flag(&mut self, key: &'static str, value: bool) -> &mut Self {
        if value {
            self.0.push((key, String::from("true")));
        }
        self
    }

    /// `key=a&key=b`
    pub(crate) fn repeated(&mut self, key: &'static str, values: &[String]) -> &mut Self {
        for value in values.iter().filter(|value| !value.is_empty()) {
            self.0.push((key, value.clone()));
        }
        self
    }

    /// `key=a,b`
    pub(crate) fn joined(&mut self, key: &'static str, values: &[String]) -> &mut Self {
        let joined = values
            .iter()
            .filter(|value| !value.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",");
        self.text(key, &joined)
    }
}

/// A parameter object for one registry operation.
pub trait QueryParams {
    /// Operation name used in error messages.
    const OPERATION: &'static str;

    /// Check every populated field; report all failures together.
    fn validate(&self, validator: &Validator) -> Result<(), ParamValidationError>;

    /// Serialize populated fields in a fixed key order.
    fn to_query(&self) -> QueryPairs;
}

/// Collects field violations for one parameter object.
pub(crate) struct Checks<'v> {
    validator: &'v Validator,
    violations: Vec<FieldViolation>,
}

impl<'v> Checks<'v> {
    pub(crate) fn new(validator: &'v Validator) -> Self {
        Self {
            validator,
            violations: Vec::new(),
        }
    }

    pub(crate) fn non_negative(&mut self, field: &'static str, value: i64) -> &mut Self {
        if value < 0 {
            self.violations.push(FieldViolation {
                field,
                value: value.to_string(),
                constraint: Constraint::Gte(0),
            });
        }
        self
    }

    /// Empty values are unset and always pass.
    pub(crate) fn one_of(
        &mut self,
        field: &'static str,
        value: &str,
        allowed: &'static [&'static str],
    ) -> &mut Self {
        if !value.is_empty() && !allowed.contains(&value) {
            self.violations.push(FieldViolation {
                field,
                value: value.to_string(),
                constraint: Constraint::OneOf(allowed),
            });
        }
        self
    }

    pub(crate) fn artifact_type(&mut self, field: &'static str, value: &str) -> &mut Self {
        self.one_of(field, value, ArtifactType::TOKENS)
    }

    /// Empty values are unset and always pass.
    pub(crate) fn identifier(
        &mut self,
        field: &'static str,
        value: &str,
        kind: IdentifierKind,
    ) -> &mut Self {
        if !value.is_empty() && !self.validator.is_valid(value, kind) {
            self.violations.push(FieldViolation {
                field,
                value: value.to_string(),
                constraint: Constraint::Pattern(kind.pattern()),
            });
        }
        self
    }

    /// `kind` is the label encoding the query uses. Empty entries are unset
    /// and always pass, matching [`QueryPairs::repeated`] and [`QueryPairs::joined`].
    pub(crate) fn labels(
        &mut self,
        field: &'static str,
        labels: &[String],
        kind: IdentifierKind,
    ) -> &mut Self {
        for label in labels.iter().filter(|label| !label.is_empty()) {
            if !self.validator.is_valid(label, kind) {
                self.violations.push(FieldViolation {
                    field,
                    value: label.clone(),
                    constraint: Constraint::Pattern(kind.pattern()),
                });
            }
        }
        self
    }

    pub(crate) fn finish(&mut self) -> Result<(), ParamValidationError> {
        if self.violations.is_empty() {
            return Ok(());
        }

        Err(ParamValidationError {
            violations: std::mem::take(&mut self.violations),
        })
    }
}
