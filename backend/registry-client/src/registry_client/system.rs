use crate::error::RegistryError;
use crate::params::QueryPairs;
use crate::registry_client::RegistryClient;
use crate::transport::{RequestBody, RequestContext};

use models::{ResourceLimits, SystemInfo};

use reqwest::{Method, StatusCode};

impl RegistryClient {
    pub async fn system_info(&self, ctx: &RequestContext) -> Result<SystemInfo, RegistryError> {
        let url = self.endpoint(&["system", "info"], &QueryPairs::new())?;
        self.fetch(ctx, Method::GET, url, RequestBody::Empty, StatusCode::OK)
            .await
    }

    pub async fn resource_limits(
        &self,
        ctx: &RequestContext,
    ) -> Result<ResourceLimits, RegistryError> {
        let url = self.endpoint(&["system", "limits"], &QueryPairs::new())?;
        self.fetch(ctx, Method::GET, url, RequestBody::Empty, StatusCode::OK)
            .await
    }
}
