//! Shell for the AI tool pages reached from the sidebar.
//!
//! The tool forms themselves are served as page markup; this route resolves
//! the sidebar entry from the URL and renders the shared chrome around it.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::sidebar::{Sidebar, SidebarToggle, find_link};
use crate::state::AppSession;
use crate::util::auth::install_access_guard;

#[component]
pub fn ToolPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let params = use_params_map();

    install_access_guard(move || session.require_auth(), use_navigate());

    move || {
        let page = params.read().get("page").unwrap_or_default();
        match find_link(&page) {
            Some(link) => view! {
                <div class="app-layout">
                    <Sidebar active=link.id/>
                    <main class="main-content">
                        <header class="page-header">
                            <SidebarToggle/>
                            <h1>
                                <span class="nav-icon">{link.icon}</span>
                                {link.label}
                            </h1>
                        </header>
                        <div id="tool-root" class="tool-root"></div>
                    </main>
                </div>
            }
            .into_any(),
            None => view! { <p class="not-found">"Page not found."</p> }.into_any(),
        }
    }
}
