//! Endpoint table for the learning backend.
//!
//! Paths are relative to the backend origin; [`join_url`] glues the two.
//! Identifiers are backend-issued opaque tokens and are interpolated as-is.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

pub const VIDEOS_PATH: &str = "/api/videos";
pub const NOTES_PATH: &str = "/api/notes";
pub const MENTOR_PATH: &str = "/api/ai/mentor";
pub const CONVERT_PATH: &str = "/api/ai/convert";
pub const PROGRESS_PATH: &str = "/api/progress";
pub const SIGNUP_PATH: &str = "/api/auth/signup";
pub const LOGIN_PATH: &str = "/api/auth/login";

#[must_use]
pub fn notes_for_user_path(user_id: &str) -> String {
    format!("{NOTES_PATH}?user_id={user_id}")
}

#[must_use]
pub fn progress_for_user_path(user_id: &str) -> String {
    format!("{PROGRESS_PATH}/{user_id}")
}

/// Join an origin and a path, tolerating a trailing slash on the origin.
#[must_use]
pub fn join_url(origin: &str, path: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), path)
}

/// HTTP verbs the backend contract uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A transport-agnostic request: verb, origin-relative path and JSON body.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), body: None }
    }

    /// Build a JSON `POST`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if `body` cannot be encoded as JSON.
    pub fn post<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Network(format!("encode request: {e}")))?;
        Ok(Self { method: Method::Post, path: path.into(), body: Some(body) })
    }
}
