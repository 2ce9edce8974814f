//! Progress tracker panel.
//!
//! "Mark Intro Complete" is mutate-then-reload, the same as notes: the
//! record is fetched again after a successful update and never computed
//! locally.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use wire::ProgressRecord;

use super::panel::Panel;

pub const SIGN_IN_PROMPT: &str = "Sign in to track progress.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProgressPanel {
    pub record: Panel<ProgressRecord>,
    pub update: Panel<()>,
}

impl ProgressPanel {
    #[must_use]
    pub fn completed_label(&self) -> String {
        let completed = self.record.value().map_or(0, |r| r.completed);
        format!("Completed: {completed}")
    }

    #[must_use]
    pub fn rank_label(&self) -> String {
        let rank = self.record.value().and_then(|r| r.rank.as_deref()).unwrap_or("—");
        format!("Rank: {rank}")
    }

    /// Error from the last fetch or update, whichever failed.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.update
            .error()
            .or_else(|| self.record.error())
            .map(wire::ApiError::user_message)
    }
}
