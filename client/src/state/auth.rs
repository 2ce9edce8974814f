//! Session holder and the signup/login form.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthState` is provided once at the app root and read by identity-gated
//! panels (Notes, Progress). Only the auth flows write it. The stored user is
//! whatever the backend returned; nothing here validates or expires it, and
//! it lives until the page reloads.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use wire::{LoginRequest, SessionUser, SignupRequest};

use super::panel::Panel;

/// The signed-in user, if any.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
}

impl AuthState {
    /// Replace the session with a freshly returned user payload.
    pub fn sign_in(&mut self, user: SessionUser) {
        self.user = Some(user);
    }

    /// `user_id` of the session, when there is one with a usable id.
    #[must_use]
    pub fn identity(&self) -> Option<String> {
        self.user.as_ref().and_then(SessionUser::user_id)
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.identity().is_some()
    }

    /// Short greeting for the header, e.g. `"Signed in as Ada"`.
    #[must_use]
    pub fn greeting(&self) -> Option<String> {
        let user = self.user.as_ref()?;
        let who = user.name().or_else(|| user.email())?;
        Some(format!("Signed in as {who}"))
    }
}

/// Which auth action a form submission performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthAction {
    SignUp,
    LogIn,
}

/// The "Get Started" form on the home section.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthForm {
    pub name: String,
    pub email: String,
    pub request: Panel<()>,
}

impl Default for AuthForm {
    fn default() -> Self {
        Self {
            name: "Student".to_owned(),
            email: "student@example.com".to_owned(),
            request: Panel::default(),
        }
    }
}

impl AuthForm {
    #[must_use]
    pub fn signup_request(&self) -> SignupRequest {
        SignupRequest::email(&self.name, &self.email)
    }

    #[must_use]
    pub fn login_request(&self) -> LoginRequest {
        LoginRequest { email: self.email.clone() }
    }

    /// Status line under the form; empty while idle.
    #[must_use]
    pub fn status_text(&self) -> String {
        if self.request.is_pending() {
            return "Signing in...".to_owned();
        }
        self.request.error().map(wire::ApiError::user_message).unwrap_or_default()
    }
}
