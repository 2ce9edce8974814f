//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `ui` and `auth` are provided once at the app root. Every other module is
//! the local state of one panel and is created when that panel mounts.

pub mod auth;
pub mod convert;
pub mod mentor;
pub mod notes;
pub mod panel;
pub mod progress;
pub mod ui;
pub mod videos;
