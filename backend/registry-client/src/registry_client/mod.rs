mod artifacts;
mod branches;
mod groups;
mod ids;
mod rules;
mod system;
mod versions;

pub use rules::RuleScope;

use crate::config::RegistryConfig;
use crate::error::RegistryError;
use crate::params::{QueryPairs, QueryParams};
use crate::transport::{ArtifactContent, Executor, RequestBody, RequestContext, resolver};
use crate::validation::{IdentifierKind, Validator};

use std::sync::Arc;
use std::time::Duration;

use models::CreateVersion;

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);

/// Typed client for the registry's v3 REST API.
///
/// Holds only immutable state (base URL, injected HTTP client, compiled
/// validator) and is cheap to clone and safe to share across tasks.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    base_url: Url,
    executor: Executor,
    validator: Arc<Validator>,
}

impl RegistryClient {
    /// Client with a default reqwest client and a 30s timeout.
    ///
    /// `base_url_str` includes the API prefix, e.g.
    /// `http://localhost:8080/apis/registry/v3`.
    pub fn new(base_url_str: &str) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT_DURATION)
            .build()?;

        Self::with_http_client(base_url_str, client)
    }

    /// Client dispatching through a caller-owned reqwest client.
    pub fn with_http_client(base_url_str: &str, http: Client) -> Result<Self, RegistryError> {
        let base_url = Url::parse(base_url_str)?;

        if base_url.cannot_be_a_base() {
            return Err(RegistryError::url_parse(format!(
                "base URL cannot carry a path: {base_url}"
            )));
        }

        Ok(Self {
            base_url,
            executor: Executor::new(http),
            validator: Arc::new(Validator::new()),
        })
    }

    /// Client built from validated configuration.
    pub fn from_config(config: &RegistryConfig) -> Result<Self, RegistryError> {
        config.validate()?;

        let mut builder = Client::builder().timeout(config.timeout());
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        Self::with_http_client(&config.base_url, builder.build()?)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Absolute URL from escaped path segments plus query pairs.
    fn endpoint(&self, segments: &[&str], query: &QueryPairs) -> Result<Url, RegistryError> {
        let mut url = self.base_url.clone();

        match url.path_segments_mut() {
            Ok(mut path) => {
                path.pop_if_empty().extend(segments);
            }
            Err(()) => {
                return Err(RegistryError::url_parse(format!(
                    "base URL cannot carry a path: {}",
                    self.base_url
                )));
            }
        }

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter());
        }

        Ok(url)
    }

    #[track_caller]
    fn check_id(&self, value: &str, kind: IdentifierKind) -> Result<(), RegistryError> {
        self.validator.validate(value, kind)
    }

    /// Model checks plus the identifier checks on its version and branches.
    ///
    /// Shared by `create_version` and `create_artifact`'s first version.
    #[track_caller]
    fn check_new_version(&self, version: &CreateVersion) -> Result<(), RegistryError> {
        version.validate()?;
        if let Some(name) = &version.version {
            self.check_id(name, IdentifierKind::Version)?;
        }
        for branch_id in &version.branches {
            self.check_id(branch_id, IdentifierKind::BranchId)?;
        }
        Ok(())
    }

    #[track_caller]
    fn check_params<P: QueryParams>(&self, params: &P) -> Result<QueryPairs, RegistryError> {
        match params.validate(&self.validator) {
            Ok(()) => Ok(params.to_query()),
            Err(source) => Err(RegistryError::invalid_params(P::OPERATION, source)),
        }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        method: Method,
        url: Url,
        body: RequestBody,
        expected: StatusCode,
    ) -> Result<T, RegistryError> {
        self.executor
            .execute(ctx, method, url, body, move |response| {
                resolver::resolve(response, expected)
            })
            .await
    }

    async fn fetch_empty(
        &self,
        ctx: &RequestContext,
        method: Method,
        url: Url,
        body: RequestBody,
        expected: StatusCode,
    ) -> Result<(), RegistryError> {
        self.executor
            .execute(ctx, method, url, body, move |response| {
                resolver::resolve_empty(response, expected)
            })
            .await
    }

    async fn fetch_content(
        &self,
        ctx: &RequestContext,
        url: Url,
        negotiate: bool,
    ) -> Result<ArtifactContent, RegistryError> {
        self.executor
            .execute(ctx, Method::GET, url, RequestBody::Empty, move |response| {
                resolver::resolve_content(response, StatusCode::OK, negotiate)
            })
            .await
    }
}
