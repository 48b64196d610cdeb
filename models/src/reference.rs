use serde::{Deserialize, Serialize};

/// Pointer from one artifact version to another (e.g. an imported schema).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    pub artifact_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Name under which the referencing content imports this reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
