use crate::error::model_error::ModelError;
use crate::{ArtifactType, CreateArtifact, CreateVersion, Labels};

/// Builder for creating validated [`CreateArtifact`] requests.
///
/// Leaving the artifact id unset lets the registry generate one; leaving the
/// type unset lets the registry detect it from the first version's content.
#[derive(Debug, Default)]
pub struct CreateArtifactBuilder {
    artifact_id: Option<String>,
    artifact_type: Option<ArtifactType>,
    name: Option<String>,
    description: Option<String>,
    labels: Labels,
    first_version: Option<CreateVersion>,
}

impl CreateArtifactBuilder {
    pub fn with_artifact_id(mut self, artifact_id: impl Into<String>) -> Self {
        self.artifact_id = Some(artifact_id.into());
        self
    }

    pub fn with_artifact_type(mut self, artifact_type: ArtifactType) -> Self {
        self.artifact_type = Some(artifact_type);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    pub fn with_first_version(mut self, version: CreateVersion) -> Self {
        self.first_version = Some(version);
        self
    }

    /// Build the CreateArtifact with validation.
    #[track_caller]
    pub fn build(self) -> Result<CreateArtifact, ModelError> {
        if let Some(artifact_id) = &self.artifact_id
            && artifact_id.is_empty()
        {
            return Err(ModelError::validation("Artifact ID cannot be empty"));
        }

        if let Some(name) = &self.name
            && name.is_empty()
        {
            return Err(ModelError::validation("Artifact name cannot be empty"));
        }

        if let Some(version) = &self.first_version {
            version.validate()?;
        }

        if self.first_version.is_none() && self.artifact_id.is_none() {
            return Err(ModelError::validation(
                "Either an artifact ID or a first version is required",
            ));
        }

        Ok(CreateArtifact {
            artifact_id: self.artifact_id,
            artifact_type: self.artifact_type,
            name: self.name,
            description: self.description,
            labels: (!self.labels.is_empty()).then_some(self.labels),
            first_version: self.first_version,
        })
    }
}
