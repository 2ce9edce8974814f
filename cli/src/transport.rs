//! `reqwest`-backed [`Transport`] for the command line.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::time::Duration;

use async_trait::async_trait;
use wire::{ApiError, ApiRequest, Method, RawResponse, Transport};

#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a client whose requests fail as network errors after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

fn http_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
    }
}

fn network(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        return ApiError::Network(format!("request timed out: {error}"));
    }
    ApiError::Network(error.to_string())
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn execute(&self, url: &str, request: &ApiRequest) -> Result<RawResponse, ApiError> {
        let builder = self.client.request(http_method(request.method), url);
        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };
        let response = builder.send().await.map_err(network)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(network)?;
        tracing::debug!(method = request.method.as_str(), %url, status, "backend responded");
        Ok(RawResponse::new(status, body))
    }
}
