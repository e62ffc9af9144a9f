//! Dashboard listing the signed-in user's brand projects.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route. Fetches `/projects` once on mount and reports
//! failures through the toast overlay.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::rich_text::RichText;
use crate::components::sidebar::{Sidebar, SidebarToggle};
use crate::components::toast::show_toast;
use crate::net::api::{AppApi, RequestOptions};
use crate::net::types::{Project, User};
use crate::state::AppSession;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::auth::install_access_guard;
use crate::util::dom::{hide_spinner, show_spinner};
use crate::util::format::format_date;

const SPINNER_ID: &str = "dashboard-spinner";

fn greeting(user: Option<&User>) -> String {
    match user {
        Some(user) => format!("Welcome back, {}", user.username),
        None => "Welcome back".to_owned(),
    }
}

/// Brand strength score rendered as a whole percentage, clamped to 0..=100.
fn strength_label(score: f64) -> String {
    format!("{:.0}%", score.clamp(0.0, 100.0))
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let api = expect_context::<AppApi>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let guard_session = session.clone();
    let access = install_access_guard(move || guard_session.require_auth(), use_navigate());

    let projects = RwSignal::new(Vec::<Project>::new());
    let loaded = RwSignal::new(false);

    if access.is_granted() {
        leptos::task::spawn_local(async move {
            show_spinner(SPINNER_ID);
            match api.call_json::<Vec<Project>>("/projects", RequestOptions::get()).await {
                Ok(list) => projects.set(list.unwrap_or_default()),
                Err(e) => show_toast(toasts, e.to_string(), ToastKind::Error),
            }
            hide_spinner(SPINNER_ID);
            loaded.set(true);
        });
    }

    let cards = move || {
        projects
            .get()
            .into_iter()
            .map(|project| {
                let updated = project.updated_at.as_deref().map(format_date).unwrap_or_default();
                view! {
                    <div class="card project-card">
                        <div class="project-card__header">
                            <h3>{project.name}</h3>
                            <span class="badge">{strength_label(project.brand_strength_score)}</span>
                        </div>
                        <RichText text=project.description/>
                        <div class="project-card__meta">{updated}</div>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="app-layout">
            <Sidebar active="dashboard"/>
            <main class="main-content">
                <header class="page-header">
                    <SidebarToggle/>
                    <h1>{greeting(session.user().as_ref())}</h1>
                </header>
                <div id=SPINNER_ID class="spinner"></div>
                <Show
                    when=move || !loaded.get() || !projects.get().is_empty()
                    fallback=|| view! { <p class="empty-state">"No projects yet. Start with a brand name."</p> }
                >
                    <div class="project-grid">{cards}</div>
                </Show>
            </main>
        </div>
    }
}
