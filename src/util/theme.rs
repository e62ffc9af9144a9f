//! Light/dark theme initialization and toggle.
//!
//! Reads the preference from the session store and applies a `data-theme`
//! attribute to the `<html>` element. Toggle writes back to storage and
//! updates that attribute.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort: a failed write is logged and the
//! applied theme still changes for the current page.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::session::SessionStore;
use crate::state::storage::Storage;

/// Root-element attribute consumed by the stylesheet.
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Apply the stored preference to the document and return it.
pub fn init_theme<S: Storage>(session: &SessionStore<S>) -> Theme {
    let theme = session.theme();
    apply(theme);
    theme
}

/// Flip `current`, apply it, and persist the new preference.
pub fn toggle_theme<S: Storage>(session: &SessionStore<S>, current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    if let Err(e) = session.set_theme(next) {
        leptos::logging::warn!("theme preference not saved: {e}");
    }
    next
}

/// Set `data-theme` on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        if let Err(e) = root.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
            leptos::logging::warn!("failed to apply theme: {e:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Theme currently applied to the document, if the attribute is set.
pub fn applied() -> Option<Theme> {
    #[cfg(feature = "csr")]
    {
        let root = web_sys::window()?.document()?.document_element()?;
        Theme::parse(&root.get_attribute(THEME_ATTRIBUTE)?)
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
