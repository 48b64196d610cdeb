pub mod config;
pub mod error;
pub mod params;
pub mod transport;
pub mod validation;

mod registry_client;
#[cfg(test)]
mod tests;

pub use config::RegistryConfig;
pub use error::{ConfigError, ErrorKind, RegistryError, TransportFailure};
pub use registry_client::{RegistryClient, RuleScope};
pub use transport::{ArtifactContent, RequestBody, RequestContext};
pub use validation::{IdentifierKind, Validator};

pub const REGISTRY_DEFAULT_HOST: &str = "localhost:8080";
pub const REGISTRY_API_PATH: &str = "/apis/registry/v3";
pub const REGISTRY_DEFAULT_BASE_URL: &str =
    const_format::concatcp!("http://", REGISTRY_DEFAULT_HOST, REGISTRY_API_PATH);
