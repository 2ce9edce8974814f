//! Shared wire model for the learning backend's JSON API.
//!
//! This crate owns the request/response shapes used by both `client` and
//! `cli`, the endpoint table, the error taxonomy, and the [`Transport`] seam
//! that lets each consumer plug in its own HTTP stack (`gloo-net` in the
//! browser, `reqwest` natively). It performs no I/O itself.

pub mod api;
pub mod endpoint;
pub mod error;
pub mod transport;
pub mod types;

pub use api::ApiClient;
pub use endpoint::{ApiRequest, Method};
pub use error::{ApiError, ErrorKind};
pub use transport::{RawResponse, Transport};
pub use types::*;

/// Backend origin used when no override is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
