//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds the browser-backed [`wire::ApiClient`], and `flows` drives
//! each panel's request lifecycle through it.

pub mod api;
pub mod flows;
