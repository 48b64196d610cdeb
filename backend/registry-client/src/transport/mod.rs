//! The request/response pipeline shared by every resource operation.
//!
//! ```text
//! RequestBody + RequestContext -> Executor::execute -> reqwest::Response
//!     -> resolver::{resolve, resolve_empty, resolve_raw, resolve_content}
//!     -> (content_type::parse_artifact_type when negotiated)
//! ```
//!
//! The resolver runs inside `Executor::execute`, so the context's deadline
//! and cancellation also bound the body read.

pub mod body;
pub mod content_type;
pub mod context;
pub mod executor;
pub mod resolver;

pub use body::RequestBody;
pub use content_type::{ARTIFACT_TYPE_HEADER, ArtifactContent, parse_artifact_type};
pub use context::RequestContext;
pub use executor::Executor;
