pub mod config;
pub mod registry_client;

pub use config::ConfigError;
pub use registry_client::{ErrorKind, RegistryError, TransportFailure};
