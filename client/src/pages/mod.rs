//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The app has one route. The home page owns section switching and
//! delegates each section to `components`.

pub mod home;
