//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast::ToastHost;
use crate::net::api::browser_client;
use crate::pages::{admin::AdminPage, dashboard::DashboardPage, index::IndexPage, login::LoginPage, tool::ToolPage};
use crate::state::AppSession;
use crate::state::storage::BrowserStorage;
use crate::state::toast::ToastState;
use crate::state::ui::UiState;
use crate::util::theme::init_theme;

/// Root application component.
///
/// Applies the stored theme, provides the session, API client, UI and toast
/// contexts, and sets up client-side routing over the legacy page names.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = AppSession::new(BrowserStorage);
    let theme = init_theme(&session);
    let api = browser_client(session.clone());

    provide_context(session);
    provide_context(api);
    provide_context(RwSignal::new(UiState::with_theme(theme)));
    provide_context(RwSignal::new(ToastState::default()));

    view! {
        <Title text="BrandCraft"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=IndexPage/>
                <Route path=StaticSegment("index.html") view=IndexPage/>
                <Route path=StaticSegment("login.html") view=LoginPage/>
                <Route path=StaticSegment("dashboard.html") view=DashboardPage/>
                <Route path=StaticSegment("admin.html") view=AdminPage/>
                <Route path=ParamSegment("page") view=ToolPage/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
