//! AI mentor question/answer panel.

#[cfg(test)]
#[path = "mentor_test.rs"]
mod mentor_test;

use wire::{MentorLevel, MentorRequest};

use super::panel::{Panel, PanelState, Ticket};

pub const THINKING: &str = "Thinking...";

#[derive(Clone, Debug, PartialEq)]
pub struct MentorPanel {
    pub question: String,
    pub language: String,
    pub level: MentorLevel,
    pub answer: Panel<String>,
}

impl Default for MentorPanel {
    fn default() -> Self {
        Self {
            question: "How do I learn recursion?".to_owned(),
            language: String::new(),
            level: MentorLevel::Beginner,
            answer: Panel::default(),
        }
    }
}

impl MentorPanel {
    /// Start an "Ask": take a ticket and snapshot the form into a request.
    pub fn submit(&mut self) -> (Ticket, MentorRequest) {
        let ticket = self.answer.begin();
        let request = MentorRequest {
            question: self.question.clone(),
            language: self.language.clone(),
            level: self.level,
        };
        (ticket, request)
    }

    /// Text for the answer area.
    #[must_use]
    pub fn display(&self) -> String {
        match self.answer.state() {
            PanelState::Idle => String::new(),
            PanelState::Pending => THINKING.to_owned(),
            PanelState::Loaded(answer) => answer.clone(),
            PanelState::Failed(error) => error.user_message(),
        }
    }
}
