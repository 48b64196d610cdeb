use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub built_on: Option<String>,
}

/// Server-side resource limits; `None` means unlimited or not reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceLimits {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_total_schemas_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_schema_size_bytes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_artifacts_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_versions_per_artifact_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_artifact_properties_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_property_key_size_bytes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_property_value_size_bytes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_artifact_labels_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_label_size_bytes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_artifact_name_length_chars: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_artifact_description_length_chars: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_requests_per_second_count: Option<i64>,
}
