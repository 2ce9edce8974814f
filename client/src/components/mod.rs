//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each `*_section` component is one navigable section of the page. It owns
//! its panel state as a local signal and reads the session from context.

pub mod auth_card;
pub mod convert_section;
pub mod header;
pub mod hero;
pub mod mentor_section;
pub mod notes_section;
pub mod progress_section;
pub mod videos_section;
