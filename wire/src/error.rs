//! Failure taxonomy for backend calls.
//!
//! DESIGN
//! ======
//! Errors are cloneable and comparable so they can sit inside panel state
//! and be asserted on in tests. Payloads are plain strings rather than the
//! underlying transport errors for the same reason.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by every [`crate::ApiClient`] call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be encoded, sent, or timed out.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status code.
    #[error("backend returned HTTP {status}")]
    Backend { status: u16, body: String },
    /// The body did not parse as the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Discriminant of [`ApiError`] without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Backend,
    MalformedResponse,
}

impl ApiError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network(_) => ErrorKind::Network,
            Self::Backend { .. } => ErrorKind::Backend,
            Self::MalformedResponse(_) => ErrorKind::MalformedResponse,
        }
    }

    /// Short message suitable for rendering inside a failed panel.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Could not reach the server. Check your connection and try again.".to_owned(),
            Self::Backend { status, .. } => format!("The server returned an error (HTTP {status})."),
            Self::MalformedResponse(_) => "The server sent a response we could not read.".to_owned(),
        }
    }
}
