//! Curated video catalog panel.

#[cfg(test)]
#[path = "videos_test.rs"]
mod videos_test;

use wire::{Channel, VideoCatalog};

use super::panel::{Panel, PanelState};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VideosPanel {
    pub catalog: Panel<VideoCatalog>,
}

impl VideosPanel {
    /// Channels to render; empty until the catalog loads.
    #[must_use]
    pub fn channels(&self) -> &[Channel] {
        self.catalog.value().map(|catalog| catalog.channels.as_slice()).unwrap_or_default()
    }

    /// Placeholder shown instead of the channel grid, if any.
    #[must_use]
    pub fn placeholder(&self) -> Option<String> {
        match self.catalog.state() {
            PanelState::Idle | PanelState::Pending => Some("Loading...".to_owned()),
            PanelState::Failed(error) => Some(error.user_message()),
            PanelState::Loaded(_) => None,
        }
    }
}
