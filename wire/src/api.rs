//! Typed calls against the learning backend.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`: transport failures arrive as
//! `Network`, non-2xx statuses as `Backend`, and bodies that do not match
//! the documented shape as `MalformedResponse`. Mutating calls whose
//! response the client ignores still check the status code.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use crate::endpoint::{self, ApiRequest};
use crate::error::ApiError;
use crate::transport::{RawResponse, Transport};
use crate::types::{
    ConvertRequest, ConvertResult, LoginRequest, MentorAnswer, MentorRequest, Note, NoteDraft, ProgressRecord,
    ProgressUpdate, SessionUser, SignupRequest, VideoCatalog,
};

/// Backend client bound to one origin and one transport.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    origin: String,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    #[must_use]
    pub fn new(origin: impl Into<String>, transport: T) -> Self {
        let origin = origin.into().trim_end_matches('/').to_owned();
        Self { origin, transport }
    }

    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET /api/videos`.
    ///
    /// # Errors
    ///
    /// See the module-level error taxonomy.
    pub async fn list_videos(&self) -> Result<VideoCatalog, ApiError> {
        let raw = self.send(ApiRequest::get(endpoint::VIDEOS_PATH)).await?;
        decode(&raw)
    }

    /// `GET /api/notes?user_id=<id>`.
    ///
    /// # Errors
    ///
    /// See the module-level error taxonomy.
    pub async fn list_notes(&self, user_id: &str) -> Result<Vec<Note>, ApiError> {
        let raw = self.send(ApiRequest::get(endpoint::notes_for_user_path(user_id))).await?;
        decode(&raw)
    }

    /// `POST /api/notes`. The created note in the response is not used.
    ///
    /// # Errors
    ///
    /// See the module-level error taxonomy.
    pub async fn create_note(&self, draft: &NoteDraft) -> Result<(), ApiError> {
        self.send(ApiRequest::post(endpoint::NOTES_PATH, draft)?).await?;
        Ok(())
    }

    /// `POST /api/ai/mentor`, returning the answer text.
    ///
    /// # Errors
    ///
    /// See the module-level error taxonomy.
    pub async fn ask_mentor(&self, request: &MentorRequest) -> Result<String, ApiError> {
        let raw = self.send(ApiRequest::post(endpoint::MENTOR_PATH, request)?).await?;
        let body: MentorAnswer = decode(&raw)?;
        Ok(body.answer)
    }

    /// `POST /api/ai/convert`.
    ///
    /// # Errors
    ///
    /// See the module-level error taxonomy.
    pub async fn convert_code(&self, request: &ConvertRequest) -> Result<ConvertResult, ApiError> {
        let raw = self.send(ApiRequest::post(endpoint::CONVERT_PATH, request)?).await?;
        decode(&raw)
    }

    /// `GET /api/progress/<user_id>`.
    ///
    /// # Errors
    ///
    /// See the module-level error taxonomy.
    pub async fn fetch_progress(&self, user_id: &str) -> Result<ProgressRecord, ApiError> {
        let raw = self.send(ApiRequest::get(endpoint::progress_for_user_path(user_id))).await?;
        decode(&raw)
    }

    /// `POST /api/progress`. The response body is ignored.
    ///
    /// # Errors
    ///
    /// See the module-level error taxonomy.
    pub async fn record_progress(&self, update: &ProgressUpdate) -> Result<(), ApiError> {
        self.send(ApiRequest::post(endpoint::PROGRESS_PATH, update)?).await?;
        Ok(())
    }

    /// `POST /api/auth/signup`, returning the user payload verbatim.
    ///
    /// # Errors
    ///
    /// See the module-level error taxonomy.
    pub async fn sign_up(&self, request: &SignupRequest) -> Result<SessionUser, ApiError> {
        let raw = self.send(ApiRequest::post(endpoint::SIGNUP_PATH, request)?).await?;
        decode(&raw)
    }

    /// `POST /api/auth/login`, returning the user payload verbatim.
    ///
    /// # Errors
    ///
    /// See the module-level error taxonomy.
    pub async fn log_in(&self, request: &LoginRequest) -> Result<SessionUser, ApiError> {
        let raw = self.send(ApiRequest::post(endpoint::LOGIN_PATH, request)?).await?;
        decode(&raw)
    }

    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let url = endpoint::join_url(&self.origin, &request.path);
        let raw = self.transport.execute(&url, &request).await?;
        if !raw.is_success() {
            return Err(ApiError::Backend { status: raw.status, body: raw.body });
        }
        Ok(raw)
    }
}

fn decode<D: DeserializeOwned>(raw: &RawResponse) -> Result<D, ApiError> {
    serde_json::from_str(&raw.body).map_err(|e| ApiError::MalformedResponse(e.to_string()))
}

#[cfg(any(test, feature = "testing"))]
pub mod testing {
    //! Scripted in-memory transport for exercising callers without a network.

    use std::cell::RefCell;
    use std::collections::VecDeque;

    use async_trait::async_trait;
    use serde_json::Value;

    use crate::endpoint::{ApiRequest, Method};
    use crate::error::ApiError;
    use crate::transport::{RawResponse, Transport};

    /// One exchange as the transport saw it.
    #[derive(Clone, Debug, PartialEq)]
    pub struct RecordedCall {
        pub method: Method,
        pub url: String,
        pub body: Option<Value>,
    }

    /// Replies from a FIFO script and records every call.
    ///
    /// Running past the end of the script yields a `Network` error so a
    /// test that issues an unexpected request fails loudly.
    #[derive(Debug, Default)]
    pub struct ScriptedTransport {
        replies: RefCell<VecDeque<Result<RawResponse, ApiError>>>,
        calls: RefCell<Vec<RecordedCall>>,
    }

    impl ScriptedTransport {
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue a reply with the given status and JSON body.
        #[must_use]
        pub fn reply(self, status: u16, body: &Value) -> Self {
            self.replies.borrow_mut().push_back(Ok(RawResponse::new(status, body.to_string())));
            self
        }

        /// Queue a reply with a raw, possibly non-JSON body.
        #[must_use]
        pub fn reply_text(self, status: u16, body: &str) -> Self {
            self.replies.borrow_mut().push_back(Ok(RawResponse::new(status, body)));
            self
        }

        /// Queue a transport failure.
        #[must_use]
        pub fn fail(self, error: ApiError) -> Self {
            self.replies.borrow_mut().push_back(Err(error));
            self
        }

        #[must_use]
        pub fn calls(&self) -> Vec<RecordedCall> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl Transport for ScriptedTransport {
        async fn execute(&self, url: &str, request: &ApiRequest) -> Result<RawResponse, ApiError> {
            self.calls.borrow_mut().push(RecordedCall {
                method: request.method,
                url: url.to_owned(),
                body: request.body.clone(),
            });
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Network(format!("unscripted request to {url}"))))
        }
    }
}
