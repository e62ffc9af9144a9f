use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_theme_dark() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Dark);
}

#[test]
fn ui_state_default_sidebar_closed() {
    let state = UiState::default();
    assert!(!state.sidebar_open);
    assert_eq!(state.sidebar_class(), "sidebar");
}

#[test]
fn with_theme_keeps_sidebar_closed() {
    let state = UiState::with_theme(Theme::Light);
    assert_eq!(state.theme, Theme::Light);
    assert!(!state.sidebar_open);
}

// =============================================================
// Sidebar toggle
// =============================================================

#[test]
fn toggle_sidebar_opens_and_closes() {
    let mut state = UiState::default();
    state.toggle_sidebar();
    assert!(state.sidebar_open);
    assert_eq!(state.sidebar_class(), "sidebar open");
    state.toggle_sidebar();
    assert!(!state.sidebar_open);
}
