//! Navigation sidebar with role-gated admin entry and identity footer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every authenticated page renders `<Sidebar active=.../>`. The menu is a
//! fixed list; admins get one extra section. The footer shows the cached
//! profile and hosts the theme and logout controls.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::User;
use crate::state::AppSession;
use crate::state::ui::UiState;
use crate::util::theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub icon: &'static str,
    pub label: &'static str,
    /// Legacy page name, e.g. `brand-kit.html`.
    pub href: &'static str,
    pub id: &'static str,
}

impl NavLink {
    pub fn path(&self) -> String {
        format!("/{}", self.href)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavItem {
    Section(&'static str),
    Link(NavLink),
}

const fn link(icon: &'static str, label: &'static str, href: &'static str, id: &'static str) -> NavItem {
    NavItem::Link(NavLink { icon, label, href, id })
}

pub const MENU: &[NavItem] = &[
    NavItem::Section("Main"),
    link("📊", "Dashboard", "dashboard.html", "dashboard"),
    NavItem::Section("AI Tools"),
    link("✨", "Brand Names", "brand-name.html", "brand-name"),
    link("🎨", "Logo Generator", "logo-generator.html", "logo-generator"),
    link("🏗️", "Brand Identity", "brand-identity.html", "brand-identity"),
    link("📝", "Content Generator", "content-generator.html", "content-generator"),
    link("📈", "Sentiment Analysis", "sentiment-analysis.html", "sentiment-analysis"),
    link("🤖", "AI Assistant", "assistant.html", "assistant"),
    NavItem::Section("Manage"),
    link("📁", "Brand Kit", "brand-kit.html", "brand-kit"),
];

pub const ADMIN_MENU: &[NavItem] = &[
    NavItem::Section("Admin"),
    link("⚙️", "Admin Panel", "admin.html", "admin"),
];

/// Menu for `user`: the fixed list, plus the admin section for admins.
pub fn nav_items(user: Option<&User>) -> Vec<NavItem> {
    let mut items = MENU.to_vec();
    if user.is_some_and(User::is_admin) {
        items.extend_from_slice(ADMIN_MENU);
    }
    items
}

/// Look up any menu link by its page name.
pub fn find_link(href: &str) -> Option<NavLink> {
    let href = href.trim_start_matches('/');
    MENU.iter().chain(ADMIN_MENU).find_map(|item| match item {
        NavItem::Link(link) if link.href == href => Some(*link),
        _ => None,
    })
}

pub fn is_active(link: &NavLink, active: &str) -> bool {
    link.id == active
}

/// Footer identity block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub initial: String,
    pub username: String,
    pub role: &'static str,
}

pub fn identity(user: Option<&User>) -> Identity {
    match user {
        Some(user) => Identity {
            initial: user
                .username
                .chars()
                .next()
                .map(|c| c.to_uppercase().collect())
                .unwrap_or_default(),
            username: user.username.clone(),
            role: user.role.as_str(),
        },
        None => Identity {
            initial: "U".to_owned(),
            username: "User".to_owned(),
            role: "user",
        },
    }
}

/// Sidebar for the current page; `active` is the id of the current link.
#[component]
pub fn Sidebar(#[prop(into)] active: String) -> impl IntoView {
    let session = expect_context::<AppSession>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let user = session.user();
    let who = identity(user.as_ref());
    let rows = nav_items(user.as_ref())
        .into_iter()
        .map(|item| match item {
            NavItem::Section(label) => view! { <li class="sidebar-section">{label}</li> }.into_any(),
            NavItem::Link(link) => {
                let class = if is_active(&link, &active) { "active" } else { "" };
                view! {
                    <li>
                        <a href=link.path() class=class>
                            <span class="nav-icon">{link.icon}</span>
                            {link.label}
                        </a>
                    </li>
                }
                .into_any()
            }
        })
        .collect_view();

    let theme_session = session.clone();
    let on_theme = move |_| {
        ui.update(|state| {
            let current = theme::applied().unwrap_or(state.theme);
            state.theme = theme::toggle_theme(&theme_session, current);
        });
    };

    let on_logout = move |_| {
        let next = session.logout();
        navigate(&next.href(), NavigateOptions::default());
    };

    view! {
        <aside id="sidebar" class=move || ui.get().sidebar_class()>
            <div class="sidebar-brand">
                <div class="logo-icon">"B"</div>
                <span>"BrandCraft"</span>
            </div>
            <ul class="sidebar-nav">{rows}</ul>
            <div class="sidebar-footer">
                <div class="sidebar-user">
                    <div class="sidebar-user__avatar">{who.initial}</div>
                    <div>
                        <div class="sidebar-user__name">{who.username}</div>
                        <div class="sidebar-user__role">{who.role}</div>
                    </div>
                </div>
                <div class="sidebar-actions">
                    <button class="btn btn-sm btn-secondary" on:click=on_theme>
                        "🌓 Theme"
                    </button>
                    <button class="btn btn-sm btn-danger" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </div>
        </aside>
    }
}

/// Hamburger button that expands the sidebar on narrow screens.
#[component]
pub fn SidebarToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button class="sidebar-toggle" title="Toggle menu" on:click=move |_| ui.update(UiState::toggle_sidebar)>
            "☰"
        </button>
    }
}
