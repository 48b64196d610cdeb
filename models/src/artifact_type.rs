//! The shared schema-format enumeration.
//!
//! Every parameter object that filters on format, every model that carries a
//! format, and the content-type header parser go through this one type.

use crate::error::model_error::ModelError;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Serialization format of an artifact's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ArtifactType {
    Avro,
    Protobuf,
    Json,
    OpenApi,
    AsyncApi,
    GraphQl,
    KConnect,
    Wsdl,
    Xsd,
    Xml,
}

impl ArtifactType {
    pub const ALL: [ArtifactType; 10] = [
        ArtifactType::Avro,
        ArtifactType::Protobuf,
        ArtifactType::Json,
        ArtifactType::OpenApi,
        ArtifactType::AsyncApi,
        ArtifactType::GraphQl,
        ArtifactType::KConnect,
        ArtifactType::Wsdl,
        ArtifactType::Xsd,
        ArtifactType::Xml,
    ];

    /// Wire tokens, in the same order as [`ArtifactType::ALL`].
    pub const TOKENS: &'static [&'static str] = &Self::tokens();

    const fn tokens() -> [&'static str; 10] {
        let mut tokens = [""; 10];
        let mut index = 0;
        while index < Self::ALL.len() {
            tokens[index] = Self::ALL[index].as_str();
            index += 1;
        }
        tokens
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            ArtifactType::Avro => "AVRO",
            ArtifactType::Protobuf => "PROTOBUF",
            ArtifactType::Json => "JSON",
            ArtifactType::OpenApi => "OPENAPI",
            ArtifactType::AsyncApi => "ASYNCAPI",
            ArtifactType::GraphQl => "GRAPHQL",
            ArtifactType::KConnect => "KCONNECT",
            ArtifactType::Wsdl => "WSDL",
            ArtifactType::Xsd => "XSD",
            ArtifactType::Xml => "XML",
        }
    }

    /// Whether `token` names a known format. Matching is exact (case-sensitive).
    pub fn is_token(token: &str) -> bool {
        Self::TOKENS.contains(&token)
    }
}

impl fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactType {
    type Err = ModelError;

    #[track_caller]
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| ModelError::unknown_token("artifact type", value))
    }
}
