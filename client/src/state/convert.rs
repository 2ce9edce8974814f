//! Code converter panel.

#[cfg(test)]
#[path = "convert_test.rs"]
mod convert_test;

use wire::{ConvertRequest, ConvertResult};

use super::panel::{Panel, PanelState, Ticket};

pub const CONVERTING: &str = "Converting...";

#[derive(Clone, Debug, PartialEq)]
pub struct ConvertPanel {
    pub source_language: String,
    pub target_language: String,
    pub code: String,
    pub result: Panel<ConvertResult>,
}

impl Default for ConvertPanel {
    fn default() -> Self {
        Self {
            source_language: "javascript".to_owned(),
            target_language: "python".to_owned(),
            code: "console.log(\"Hello\")".to_owned(),
            result: Panel::default(),
        }
    }
}

impl ConvertPanel {
    pub fn submit(&mut self) -> (Ticket, ConvertRequest) {
        let ticket = self.result.begin();
        let request = ConvertRequest {
            source_language: self.source_language.clone(),
            target_language: self.target_language.clone(),
            code: self.code.clone(),
        };
        (ticket, request)
    }

    /// Text for the output pane.
    #[must_use]
    pub fn display(&self) -> String {
        match self.result.state() {
            PanelState::Idle => String::new(),
            PanelState::Pending => CONVERTING.to_owned(),
            PanelState::Loaded(result) => result.display_text(),
            PanelState::Failed(error) => error.user_message(),
        }
    }
}
