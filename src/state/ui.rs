//! Local UI chrome state (theme, sidebar visibility).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of session state so rendering
//! controls can evolve independently of what is persisted.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::Theme;

/// UI state shared through a `RwSignal<UiState>` context.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Theme currently applied to the document.
    pub theme: Theme,
    /// Whether the sidebar is expanded in the mobile layout. Not persisted.
    pub sidebar_open: bool,
}

impl UiState {
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Class list for the sidebar container.
    pub fn sidebar_class(&self) -> &'static str {
        if self.sidebar_open { "sidebar open" } else { "sidebar" }
    }
}
