//! Toast overlay and the helper that schedules its removal.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};
#[cfg(feature = "csr")]
use crate::state::toast::TOAST_DURATION;

/// Show `message`, replacing any visible toast, and remove it after
/// [`TOAST_DURATION`](crate::state::toast::TOAST_DURATION).
pub fn show_toast(toasts: RwSignal<ToastState>, message: impl Into<String>, kind: ToastKind) {
    let Some(id) = toasts.try_update(|state| state.show(message, kind)) else {
        return;
    };
    #[cfg(feature = "csr")]
    {
        let millis = u32::try_from(TOAST_DURATION.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, move || {
            toasts.update(|state| {
                state.dismiss(id);
            });
        })
        .forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}

/// Renders the current toast, if any.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    move || {
        toasts.get().current.map(|toast| {
            view! {
                <div class=toast.kind.class() role="status">
                    {toast.message}
                </div>
            }
        })
    }
}
