//! Identifier validation with registry-specific patterns.
//!
//! Validates path-segment identifiers BEFORE a URL is built, so obviously
//! invalid input never reaches the network.

use crate::error::RegistryError;

use std::fmt;

use regex::Regex;

pub const GROUP_ID_PATTERN: &str = r"^.{1,512}$";
pub const ARTIFACT_ID_PATTERN: &str = r"^.{1,512}$";
pub const VERSION_PATTERN: &str = r"^[a-zA-Z0-9._\-+]{1,256}$";
/// A concrete version, or `branch=<branch id>` resolving to the branch tip.
pub const VERSION_EXPRESSION_PATTERN: &str =
    r"^(?:[a-zA-Z0-9._\-+]{1,256}|branch=[a-zA-Z0-9._\-+]{1,256})$";
pub const BRANCH_ID_PATTERN: &str = r"^[a-zA-Z0-9._\-+]{1,256}$";
pub const COMMENT_ID_PATTERN: &str = r"^[a-zA-Z0-9._\-]{1,256}$";
pub const CONTENT_HASH_PATTERN: &str = r"^[a-fA-F0-9]{1,128}$";
/// Label filter: `key` or `key:value`.
pub const LABEL_FILTER_PATTERN: &str = r"^[^:]{1,256}(?::.{0,512})?$";
/// Label filter sent inside one comma-joined value; commas are separators.
pub const JOINED_LABEL_FILTER_PATTERN: &str = r"^[^:,]{1,256}(?::[^,]{0,512})?$";
/// Dot segments are removed by URL normalization and can never name a resource.
pub const DOT_SEGMENT_RULE: &str = "not '.' or '..'";

/// The kind of identifier being validated; selects pattern and field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    GroupId,
    ArtifactId,
    Version,
    VersionExpression,
    BranchId,
    CommentId,
    ContentHash,
    LabelFilter,
    JoinedLabelFilter,
}

impl IdentifierKind {
    /// Human-readable field name used in error messages.
    pub const fn field_name(&self) -> &'static str {
        match self {
            IdentifierKind::GroupId => "Group ID",
            IdentifierKind::ArtifactId => "Artifact ID",
            IdentifierKind::Version => "Version",
            IdentifierKind::VersionExpression => "Version Expression",
            IdentifierKind::BranchId => "Branch ID",
            IdentifierKind::CommentId => "Comment ID",
            IdentifierKind::ContentHash => "Content Hash",
            IdentifierKind::LabelFilter | IdentifierKind::JoinedLabelFilter => "Label",
        }
    }

    pub const fn pattern(&self) -> &'static str {
        match self {
            IdentifierKind::GroupId => GROUP_ID_PATTERN,
            IdentifierKind::ArtifactId => ARTIFACT_ID_PATTERN,
            IdentifierKind::Version => VERSION_PATTERN,
            IdentifierKind::VersionExpression => VERSION_EXPRESSION_PATTERN,
            IdentifierKind::BranchId => BRANCH_ID_PATTERN,
            IdentifierKind::CommentId => COMMENT_ID_PATTERN,
            IdentifierKind::ContentHash => CONTENT_HASH_PATTERN,
            IdentifierKind::LabelFilter => LABEL_FILTER_PATTERN,
            IdentifierKind::JoinedLabelFilter => JOINED_LABEL_FILTER_PATTERN,
        }
    }

    /// Whether values of this kind become a URL path segment.
    pub const fn is_path_segment(&self) -> bool {
        !matches!(
            self,
            IdentifierKind::LabelFilter | IdentifierKind::JoinedLabelFilter
        )
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Compiled identifier patterns.
///
/// Built once per client and shared read-only across calls.
#[derive(Debug, Clone)]
pub struct Validator {
    group_id: Regex,
    artifact_id: Regex,
    version: Regex,
    version_expression: Regex,
    branch_id: Regex,
    comment_id: Regex,
    content_hash: Regex,
    label_filter: Regex,
    joined_label_filter: Regex,
}

impl Validator {
    pub fn new() -> Self {
        Self {
            group_id: compile(GROUP_ID_PATTERN),
            artifact_id: compile(ARTIFACT_ID_PATTERN),
            version: compile(VERSION_PATTERN),
            version_expression: compile(VERSION_EXPRESSION_PATTERN),
            branch_id: compile(BRANCH_ID_PATTERN),
            comment_id: compile(COMMENT_ID_PATTERN),
            content_hash: compile(CONTENT_HASH_PATTERN),
            label_filter: compile(LABEL_FILTER_PATTERN),
            joined_label_filter: compile(JOINED_LABEL_FILTER_PATTERN),
        }
    }

    pub fn regex(&self, kind: IdentifierKind) -> &Regex {
        match kind {
            IdentifierKind::GroupId => &self.group_id,
            IdentifierKind::ArtifactId => &self.artifact_id,
            IdentifierKind::Version => &self.version,
            IdentifierKind::VersionExpression => &self.version_expression,
            IdentifierKind::BranchId => &self.branch_id,
            IdentifierKind::CommentId => &self.comment_id,
            IdentifierKind::ContentHash => &self.content_hash,
            IdentifierKind::LabelFilter => &self.label_filter,
            IdentifierKind::JoinedLabelFilter => &self.joined_label_filter,
        }
    }

    pub fn is_valid(&self, value: &str, kind: IdentifierKind) -> bool {
        !(kind.is_path_segment() && is_dot_segment(value)) && self.regex(kind).is_match(value)
    }

    /// Validate `value` as an identifier of the given kind.
    ///
    /// Path-segment kinds also reject `.` and `..`, which the pattern alone
    /// would accept.
    #[track_caller]
    pub fn validate(&self, value: &str, kind: IdentifierKind) -> Result<(), RegistryError> {
        if kind.is_path_segment() && is_dot_segment(value) {
            return Err(RegistryError::invalid_identifier(
                kind.field_name(),
                value,
                DOT_SEGMENT_RULE,
            ));
        }

        validate_pattern(value, self.regex(kind), kind.field_name())
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// Full-match `value` against an anchored `pattern` bound to `field`.
///
/// The error names the field, echoes the value and includes the pattern.
#[track_caller]
pub fn validate_pattern(
    value: &str,
    pattern: &Regex,
    field: &'static str,
) -> Result<(), RegistryError> {
    if pattern.is_match(value) {
        return Ok(());
    }

    Err(RegistryError::invalid_identifier(
        field,
        value,
        pattern.as_str(),
    ))
}

/// `.` or `..`. A literal `%` is escaped when the segment is pushed, so
/// `%2E` reaches the registry unchanged and is not a dot segment.
pub fn is_dot_segment(value: &str) -> bool {
    matches!(value, "." | "..")
}

fn compile(pattern: &'static str) -> Regex {
    Regex::new(pattern).expect("built-in identifier pattern must compile")
}
