use crate::error::RegistryError;
use crate::transport::{RequestBody, RequestContext};

use std::future::Future;
use std::time::Duration;

use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Response};
use url::Url;

/// Dispatches exactly one HTTP request per call through an injected client.
///
/// No retries and no backoff: the first transport failure is returned.
#[derive(Debug, Clone)]
pub struct Executor {
    http: Client,
}

impl Executor {
    pub fn new(http: Client) -> Self {
        Self { http }
    }

    /// Build and send `method url` with `body`, then hand the response to
    /// `resolve`, honoring `ctx` throughout.
    ///
    /// One deadline covers sending, waiting for headers and reading the body
    /// inside `resolve`; cancelling the token aborts whichever stage is running.
    pub async fn execute<T, F, Fut>(
        &self,
        ctx: &RequestContext,
        method: Method,
        url: Url,
        body: RequestBody,
        resolve: F,
    ) -> Result<T, RegistryError>
    where
        F: FnOnce(Response) -> Fut,
        Fut: Future<Output = Result<T, RegistryError>>,
    {
        if ctx.is_cancelled() {
            return Err(RegistryError::cancelled());
        }

        debug!("Dispatching {method} {url}");

        let mut request = self.http.request(method, url);
        if let Some(content_type) = body.content_type() {
            request = request.header(CONTENT_TYPE, content_type);
        }
        if let Some(bytes) = body.into_bytes()? {
            request = request.body(bytes);
        }

        let send = request.send();
        let exchange = async move {
            let response = send.await.map_err(|e| RegistryError::from_reqwest(&e))?;
            debug!("Received {} from {}", response.status(), response.url());
            resolve(response).await
        };

        match ctx.cancellation() {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => Err(RegistryError::cancelled()),
                    result = within_deadline(ctx.timeout(), exchange) => result,
                }
            }
            None => within_deadline(ctx.timeout(), exchange).await,
        }
    }
}

async fn within_deadline<T, F>(timeout: Option<Duration>, work: F) -> Result<T, RegistryError>
where
    F: Future<Output = Result<T, RegistryError>>,
{
    match timeout {
        Some(limit) => match tokio::time::timeout(limit, work).await {
            Ok(result) => result,
            Err(_) => Err(RegistryError::deadline_exceeded(limit)),
        },
        None => work.await,
    }
}
