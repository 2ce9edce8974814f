//! Which section of the page is visible.
//!
//! DESIGN
//! ======
//! Navigation is a plain enum switch driven by the header menu and the
//! hero call-to-action. There is no URL routing per section and no history;
//! switching sections drops the previous section's panel state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Top-level sections, in menu order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Home,
    Videos,
    Notes,
    Mentor,
    Convert,
    Progress,
}

impl Section {
    pub const ALL: [Self; 6] = [Self::Home, Self::Videos, Self::Notes, Self::Mentor, Self::Convert, Self::Progress];

    /// Menu label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Videos => "Videos",
            Self::Notes => "Notes",
            Self::Mentor => "Mentor",
            Self::Convert => "Convert",
            Self::Progress => "Progress",
        }
    }

    /// Class of the single root element rendered for this section.
    #[must_use]
    pub fn root_class(self) -> &'static str {
        match self {
            Self::Home => "section section--home",
            Self::Videos => "section section--videos",
            Self::Notes => "section section--notes",
            Self::Mentor => "section section--mentor",
            Self::Convert => "section section--convert",
            Self::Progress => "section section--progress",
        }
    }

    /// Whether the section's actions need a signed-in user.
    #[must_use]
    pub fn requires_identity(self) -> bool {
        matches!(self, Self::Notes | Self::Progress)
    }
}

/// Page chrome state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub section: Section,
}

impl UiState {
    /// Switch to `section`. Returns `true` if the visible section changed.
    pub fn navigate(&mut self, section: Section) -> bool {
        let changed = self.section != section;
        self.section = section;
        changed
    }

    /// The hero's "Start Learning" button.
    pub fn start_learning(&mut self) -> bool {
        self.navigate(Section::Videos)
    }
}
