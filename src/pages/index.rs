//! Public entry view.

use leptos::prelude::*;

use crate::state::AppSession;
use crate::util::nav::Route;

#[component]
pub fn IndexPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let (cta_label, cta_route) = if session.is_logged_in() {
        ("Open Dashboard", Route::Dashboard)
    } else {
        ("Get Started", Route::Login)
    };

    view! {
        <div class="landing">
            <div class="logo-icon">"B"</div>
            <h1>"BrandCraft"</h1>
            <p class="landing__tagline">"AI-powered brand names, logos, identity and content."</p>
            <a class="btn btn-primary" href=cta_route.href()>{cta_label}</a>
        </div>
    }
}
