//! Shared access-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior for unauthenticated or
//! under-privileged visitors. The check itself lives on `SessionStore`; this
//! module only turns a denial into navigation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::Access;

/// Navigate away once, on mount, if `check` denies access.
///
/// Returns the initial verdict so the page can skip rendering or fetching
/// when access is denied.
pub fn install_access_guard<C, F>(check: C, navigate: F) -> Access
where
    C: Fn() -> Access + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let verdict = check();
    Effect::new(move || {
        if let Access::Redirect(route) = check() {
            navigate(&route.href(), NavigateOptions::default());
        }
    });
    verdict
}
