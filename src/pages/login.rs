//! Email + password sign-in page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toast::show_toast;
use crate::net::api::AppApi;
use crate::net::auth::sign_in;
use crate::state::AppSession;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::nav::Route;

/// Trim both fields and require each to be non-empty.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let api = expect_context::<AppApi>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in: skip the form.
    if session.is_logged_in() {
        let navigate = navigate.clone();
        Effect::new(move || navigate(&Route::Dashboard.href(), NavigateOptions::default()));
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(fields) => fields,
            Err(message) => {
                show_toast(toasts, message, ToastKind::Error);
                return;
            }
        };
        busy.set(true);

        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match sign_in(&api, &email_value, &password_value).await {
                Ok(user) => {
                    show_toast(toasts, format!("Welcome back, {}!", user.username), ToastKind::Success);
                    navigate(&Route::Dashboard.href(), NavigateOptions::default());
                }
                Err(e) => show_toast(toasts, e.to_string(), ToastKind::Error),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"BrandCraft"</h1>
                <p class="login-card__subtitle">"Sign in to your brand studio"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <a href=Route::Index.href() class="login-card__back">"← Back"</a>
            </div>
        </div>
    }
}
