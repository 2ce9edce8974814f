//! The seam between typed API calls and a concrete HTTP stack.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle implements this over `gloo-net`, the CLI over
//! `reqwest`, and tests over scripted in-memory queues. Futures are not
//! required to be `Send` because the browser runtime is single-threaded.

use async_trait::async_trait;

use crate::endpoint::ApiRequest;
use crate::error::ApiError;

/// Status code and body text of a completed exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait(?Send)]
pub trait Transport {
    /// Perform one exchange against the absolute `url`.
    ///
    /// Implementations report any status code as `Ok`; only failures to
    /// complete the exchange at all map to [`ApiError::Network`].
    async fn execute(&self, url: &str, request: &ApiRequest) -> Result<RawResponse, ApiError>;
}
