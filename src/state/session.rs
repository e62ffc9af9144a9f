//! Persisted browser session: auth token, cached profile, theme preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages gate on [`SessionStore::require_auth`] / [`SessionStore::require_admin`],
//! the API client attaches the token and clears the session on 401, and the
//! sidebar reads the cached profile for role-gated items.
//!
//! Logged-in state is defined by token presence alone. A profile left in
//! storage without a token is ignored.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;
use crate::state::storage::{Storage, StorageError};
use crate::util::nav::Route;
use crate::util::theme::Theme;

pub const THEME_KEY: &str = "theme";
pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Outcome of a page-entry access check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Granted,
    /// Access denied; the caller should send the user to this route.
    Redirect(Route),
}

impl Access {
    pub fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }

    pub fn redirect_target(self) -> Option<Route> {
        match self {
            Self::Granted => None,
            Self::Redirect(route) => Some(route),
        }
    }
}

/// Session context handed to components via Leptos context.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: Storage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value,
            Err(e) => {
                leptos::logging::debug_warn!("session read {key} failed: {e}");
                None
            }
        }
    }

    /// Persisted theme preference, [`Theme::Dark`] when unset or unknown.
    pub fn theme(&self) -> Theme {
        self.read(THEME_KEY)
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or_default()
    }

    /// # Errors
    ///
    /// Returns the storage error if the preference cannot be written.
    pub fn set_theme(&self, theme: Theme) -> Result<(), StorageError> {
        self.storage.set(THEME_KEY, theme.as_str())
    }

    /// Bearer token, if any. An empty stored string counts as absent.
    pub fn token(&self) -> Option<String> {
        self.read(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    /// # Errors
    ///
    /// Returns the storage error if the token cannot be written.
    pub fn set_token(&self, token: &str) -> Result<(), StorageError> {
        self.storage.set(TOKEN_KEY, token)
    }

    /// Drop the token and the cached profile together.
    ///
    /// # Errors
    ///
    /// See [`SessionStore::clear`].
    pub fn remove_token(&self) -> Result<(), StorageError> {
        self.clear()
    }

    /// Cached profile. Absent whenever the token is absent, and silently
    /// absent when the stored record does not parse.
    pub fn user(&self) -> Option<User> {
        self.token()?;
        let raw = self.read(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                leptos::logging::debug_warn!("ignoring unreadable cached profile: {e}");
                None
            }
        }
    }

    /// # Errors
    ///
    /// Returns an error if the profile cannot be encoded or written.
    pub fn set_user(&self, user: &User) -> Result<(), StorageError> {
        let raw = serde_json::to_string(user)?;
        self.storage.set(USER_KEY, &raw)
    }

    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    /// Store token and profile as one login step. If the profile write fails
    /// the token is removed again so no half session remains.
    ///
    /// # Errors
    ///
    /// Returns the first storage error encountered.
    pub fn establish(&self, token: &str, user: &User) -> Result<(), StorageError> {
        self.set_token(token)?;
        if let Err(e) = self.set_user(user) {
            if let Err(rollback) = self.storage.remove(TOKEN_KEY) {
                leptos::logging::error!("failed to roll back token after profile write error: {rollback}");
            }
            return Err(e);
        }
        Ok(())
    }

    /// Remove token and profile. Both removals are attempted even if the
    /// first fails.
    ///
    /// # Errors
    ///
    /// Returns the first storage error encountered.
    pub fn clear(&self) -> Result<(), StorageError> {
        let token = self.storage.remove(TOKEN_KEY);
        let user = self.storage.remove(USER_KEY);
        token.and(user)
    }

    /// Page guard for authenticated views.
    pub fn require_auth(&self) -> Access {
        if self.is_logged_in() {
            Access::Granted
        } else {
            Access::Redirect(Route::Login)
        }
    }

    /// Page guard for admin-only views.
    pub fn require_admin(&self) -> Access {
        match self.user() {
            Some(user) if user.is_admin() => Access::Granted,
            _ => Access::Redirect(Route::Dashboard),
        }
    }

    /// End the session and return the route to show next.
    pub fn logout(&self) -> Route {
        if let Err(e) = self.clear() {
            leptos::logging::error!("failed to clear session on logout: {e}");
        }
        Route::Index
    }
}
