//! Domain models for the schema registry.
//!
//! This crate contains pure data structures mirroring the registry's v3
//! REST payloads. Models have no I/O - they're just data that can be
//! serialized onto the wire and decoded off it.
//!
//! ## Architecture
//!
//! - **common**: Error location and status helpers
//! - **models** (this crate): Pure data structures
//! - **registry-client**: Request pipeline and resource operations
//!
//! Wire field names are camelCase; Rust field names are snake_case.

pub mod artifact;
pub mod artifact_type;
pub mod branch;
pub mod error;
pub mod group;
pub mod problem;
pub mod reference;
pub mod rule;
pub mod system;
pub mod version;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

pub use artifact::{
    ArtifactMetadata, ArtifactSearchResults, CreateArtifact, CreateArtifactBuilder,
    CreateArtifactResponse, EditableArtifactMetadata, SearchedArtifact,
};
pub use artifact_type::ArtifactType;
pub use branch::{
    AddVersionToBranch, BranchMetadata, BranchSearchResults, CreateBranch,
    EditableBranchMetadata, ReplaceBranchVersions, SearchedBranch,
};
pub use common::ErrorLocation;
pub use error::model_error::ModelError;
pub use group::{
    CreateGroup, EditableGroupMetadata, GroupMetadata, GroupSearchResults, SearchedGroup,
};
pub use problem::ApiProblem;
pub use reference::ArtifactReference;
pub use rule::{CompatibilityLevel, IntegrityLevel, Rule, RuleType, ValidityLevel};
pub use system::{ResourceLimits, SystemInfo};
pub use version::{
    Comment, CommentBody, CreateVersion, EditableVersionMetadata, SearchedVersion,
    VersionContent, VersionMetadata, VersionSearchResults, VersionState, VersionStateBody,
};

/// Free-form key/value labels; ordered so serialized bodies are stable.
pub type Labels = BTreeMap<String, String>;
