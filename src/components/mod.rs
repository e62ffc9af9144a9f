//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and feedback surfaces while reading shared
//! state from Leptos context providers.

pub mod rich_text;
pub mod sidebar;
pub mod toast;
