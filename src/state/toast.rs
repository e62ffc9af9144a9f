//! Single-slot toast notification state.
//!
//! At most one toast is visible; showing a new one replaces the old. Each
//! toast carries an id so a removal timer scheduled for an earlier toast
//! cannot dismiss a later one.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::time::Duration;

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_millis(3500);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
    Info,
    Warning,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }

    /// CSS classes for the toast element, e.g. `toast toast-error`.
    pub fn class(self) -> String {
        format!("toast toast-{}", self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub current: Option<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Replace any visible toast and return the new toast's id.
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(Toast {
            id,
            message: message.into(),
            kind,
        });
        id
    }

    /// Remove the toast with `id` if it is still the visible one.
    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|toast| toast.id == id) {
            self.current = None;
            return true;
        }
        false
    }
}
