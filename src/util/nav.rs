//! Route table and full-page navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views are addressed by their legacy page names (`login.html`, ...) so
//! bookmarks and links from the static site keep working.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Views the client redirects to on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Index,
    Login,
    Dashboard,
    Admin,
}

impl Route {
    /// Page name without a leading slash, as used in sidebar links.
    pub fn page(self) -> &'static str {
        match self {
            Self::Index => "index.html",
            Self::Login => "login.html",
            Self::Dashboard => "dashboard.html",
            Self::Admin => "admin.html",
        }
    }

    /// Absolute path for router navigation.
    pub fn href(self) -> String {
        format!("/{}", self.page())
    }

    /// Resolve a page name (with or without leading slash).
    pub fn from_page(page: &str) -> Option<Self> {
        match page.trim_start_matches('/') {
            "" | "index.html" => Some(Self::Index),
            "login.html" => Some(Self::Login),
            "dashboard.html" => Some(Self::Dashboard),
            "admin.html" => Some(Self::Admin),
            _ => None,
        }
    }
}

/// Hard navigation through `window.location`, for code outside the router
/// (e.g. the API client's session-expiry hook).
pub fn redirect(route: Route) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().set_href(&route.href()) {
            leptos::logging::error!("redirect to {} failed: {e:?}", route.page());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = route;
    }
}
