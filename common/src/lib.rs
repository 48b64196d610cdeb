//! Cross-cutting primitives shared by every crate in the workspace.
//!
//! ## Architecture
//!
//! - **common** (this crate): error location capture, HTTP status helpers
//! - **models**: Pure registry data structures
//! - **registry-client**: Request pipeline and resource operations built on models
//!
//! Nothing in here knows about the registry itself.

pub mod error;
pub mod http_status;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use http_status::HttpStatusCode;
