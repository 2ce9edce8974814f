//! Browser transport and backend client construction.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, raced against a
//! `gloo-timers` timeout.
//! Server-side (SSR): a stub that fails every call with a network error,
//! since panels only fetch after hydration.
//!
//! CONFIG
//! ======
//! The backend origin is fixed at build time from `DEVLEARN_BACKEND_URL`
//! and falls back to [`wire::DEFAULT_BACKEND_URL`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use async_trait::async_trait;
use wire::{ApiClient, ApiError, ApiRequest, RawResponse, Transport};

/// Upper bound on one browser request before it fails as a network error.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The client every panel talks to.
pub type Backend = ApiClient<BrowserTransport>;

/// Backend origin baked in at build time.
#[must_use]
pub fn backend_origin() -> &'static str {
    resolve_origin(option_env!("DEVLEARN_BACKEND_URL"))
}

#[must_use]
pub fn backend() -> Backend {
    ApiClient::new(backend_origin(), BrowserTransport)
}

fn resolve_origin(configured: Option<&'static str>) -> &'static str {
    match configured.map(str::trim) {
        Some(origin) if !origin.is_empty() => origin,
        _ => wire::DEFAULT_BACKEND_URL,
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn timed_out_message(after: Duration) -> String {
    format!("request timed out after {}s", after.as_secs())
}

/// `fetch`-backed transport for the hydrated bundle.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn execute(&self, url: &str, request: &ApiRequest) -> Result<RawResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            send_with_timeout(url, request, REQUEST_TIMEOUT).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, request);
            Err(ApiError::Network("not available on server".to_owned()))
        }
    }
}

#[cfg(feature = "hydrate")]
async fn send_with_timeout(url: &str, request: &ApiRequest, after: Duration) -> Result<RawResponse, ApiError> {
    use futures::future::{Either, select};

    let exchange = Box::pin(send(url, request));
    let deadline = Box::pin(gloo_timers::future::sleep(after));
    match select(exchange, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::Network(timed_out_message(after))),
    }
}

#[cfg(feature = "hydrate")]
async fn send(url: &str, request: &ApiRequest) -> Result<RawResponse, ApiError> {
    use gloo_net::http::Request;
    use wire::Method;

    let builder = match request.method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
    };
    let sent = match &request.body {
        Some(body) => {
            builder
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
        }
        None => builder.send().await,
    };
    let response = sent.map_err(|e| ApiError::Network(e.to_string()))?;
    let status = response.status();
    let body = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    Ok(RawResponse::new(status, body))
}
