//! Notes panel: a draft form plus the user's note list.
//!
//! DESIGN
//! ======
//! Saving is mutate-then-reload: the create call's response is ignored and
//! the list is fetched again, so the displayed list always mirrors the last
//! GET. The draft is cleared only after a successful create.

#[cfg(test)]
#[path = "notes_test.rs"]
mod notes_test;

use wire::{Note, NoteDraft};

use super::panel::Panel;

pub const SIGN_IN_PROMPT: &str = "Please sign in to save notes.";
pub const EMPTY_LIST: &str = "No notes yet.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotesPanel {
    pub title: String,
    pub content: String,
    pub list: Panel<Vec<Note>>,
    pub save: Panel<()>,
}

impl NotesPanel {
    #[must_use]
    pub fn draft(&self, user_id: &str) -> NoteDraft {
        NoteDraft { user_id: user_id.to_owned(), title: self.title.clone(), content: self.content.clone() }
    }

    pub fn clear_draft(&mut self) {
        self.title.clear();
        self.content.clear();
    }

    /// Notes from the last applied list fetch.
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        self.list.value().map(Vec::as_slice).unwrap_or_default()
    }

    /// Message for the list column when there are no notes to show.
    #[must_use]
    pub fn list_message(&self) -> Option<String> {
        if let Some(error) = self.list.error() {
            return Some(error.user_message());
        }
        if self.notes().is_empty() {
            return Some(EMPTY_LIST.to_owned());
        }
        None
    }

    /// Message under the Save button, if any.
    #[must_use]
    pub fn save_message(&self) -> Option<String> {
        if self.save.is_pending() {
            return Some("Saving...".to_owned());
        }
        self.save.error().map(|error| format!("Could not save note: {}", error.user_message()))
    }
}
