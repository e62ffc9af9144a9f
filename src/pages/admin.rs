//! Admin panel: account list for administrators.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::sidebar::{Sidebar, SidebarToggle};
use crate::components::toast::show_toast;
use crate::net::api::{AppApi, RequestOptions};
use crate::net::types::AdminUserRow;
use crate::state::AppSession;
use crate::state::session::{Access, SessionStore};
use crate::state::storage::Storage;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::auth::install_access_guard;
use crate::util::dom::{hide_spinner, show_spinner};
use crate::util::format::format_date;

const SPINNER_ID: &str = "admin-spinner";

/// Signed-out visitors go to login; signed-in non-admins to the dashboard.
fn admin_access<S: Storage>(session: &SessionStore<S>) -> Access {
    match session.require_auth() {
        Access::Granted => session.require_admin(),
        denied @ Access::Redirect(_) => denied,
    }
}

fn status_label(row: &AdminUserRow) -> &'static str {
    if row.is_active { "Active" } else { "Suspended" }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let api = expect_context::<AppApi>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let access = install_access_guard(move || admin_access(&session), use_navigate());

    let users = RwSignal::new(Vec::<AdminUserRow>::new());

    if access.is_granted() {
        leptos::task::spawn_local(async move {
            show_spinner(SPINNER_ID);
            match api.call_json::<Vec<AdminUserRow>>("/admin/users", RequestOptions::get()).await {
                Ok(rows) => users.set(rows.unwrap_or_default()),
                Err(e) => show_toast(toasts, e.to_string(), ToastKind::Error),
            }
            hide_spinner(SPINNER_ID);
        });
    }

    let rows = move || {
        users
            .get()
            .into_iter()
            .map(|row| {
                let joined = row.created_at.as_deref().map(format_date).unwrap_or_default();
                let status = status_label(&row);
                view! {
                    <tr>
                        <td>{row.username}</td>
                        <td>{row.email}</td>
                        <td>{row.role.as_str()}</td>
                        <td>{status}</td>
                        <td>{joined}</td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="app-layout">
            <Sidebar active="admin"/>
            <main class="main-content">
                <header class="page-header">
                    <SidebarToggle/>
                    <h1>"Admin Panel"</h1>
                </header>
                <div id=SPINNER_ID class="spinner"></div>
                <table class="admin-table">
                    <thead>
                        <tr>
                            <th>"User"</th>
                            <th>"Email"</th>
                            <th>"Role"</th>
                            <th>"Status"</th>
                            <th>"Joined"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </main>
        </div>
    }
}
