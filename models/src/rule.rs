//! Registry-enforced content rules and their configuration levels.

use crate::error::model_error::ModelError;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleType {
    Validity,
    Compatibility,
    Integrity,
}

impl RuleType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            RuleType::Validity => "VALIDITY",
            RuleType::Compatibility => "COMPATIBILITY",
            RuleType::Integrity => "INTEGRITY",
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleType {
    type Err = ModelError;

    #[track_caller]
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "VALIDITY" => Ok(RuleType::Validity),
            "COMPATIBILITY" => Ok(RuleType::Compatibility),
            "INTEGRITY" => Ok(RuleType::Integrity),
            other => Err(ModelError::unknown_token("rule type", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidityLevel {
    None,
    SyntaxOnly,
    Full,
}

impl ValidityLevel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ValidityLevel::None => "NONE",
            ValidityLevel::SyntaxOnly => "SYNTAX_ONLY",
            ValidityLevel::Full => "FULL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompatibilityLevel {
    None,
    Backward,
    BackwardTransitive,
    Forward,
    ForwardTransitive,
    Full,
    FullTransitive,
}

impl CompatibilityLevel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            CompatibilityLevel::None => "NONE",
            CompatibilityLevel::Backward => "BACKWARD",
            CompatibilityLevel::BackwardTransitive => "BACKWARD_TRANSITIVE",
            CompatibilityLevel::Forward => "FORWARD",
            CompatibilityLevel::ForwardTransitive => "FORWARD_TRANSITIVE",
            CompatibilityLevel::Full => "FULL",
            CompatibilityLevel::FullTransitive => "FULL_TRANSITIVE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrityLevel {
    None,
    RefsExist,
    AllRefsMapped,
    NoDuplicates,
    Full,
}

impl IntegrityLevel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            IntegrityLevel::None => "NONE",
            IntegrityLevel::RefsExist => "REFS_EXIST",
            IntegrityLevel::AllRefsMapped => "ALL_REFS_MAPPED",
            IntegrityLevel::NoDuplicates => "NO_DUPLICATES",
            IntegrityLevel::Full => "FULL",
        }
    }
}

/// A rule and its configured level, as sent to and returned by the registry.
///
/// `config` stays a string on the wire; the typed constructors keep callers
/// from sending a level that belongs to another rule type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub rule_type: RuleType,
    pub config: String,
}

impl Rule {
    pub fn validity(level: ValidityLevel) -> Self {
        Self {
            rule_type: RuleType::Validity,
            config: level.as_str().to_string(),
        }
    }

    pub fn compatibility(level: CompatibilityLevel) -> Self {
        Self {
            rule_type: RuleType::Compatibility,
            config: level.as_str().to_string(),
        }
    }

    pub fn integrity(level: IntegrityLevel) -> Self {
        Self {
            rule_type: RuleType::Integrity,
            config: level.as_str().to_string(),
        }
    }
}
