//! Renders generated copy through the markup renderer.

use leptos::prelude::*;

use crate::util::markdown::render_markdown;

/// Formatted block of backend-provided text.
#[component]
pub fn RichText(#[prop(into)] text: String) -> impl IntoView {
    let html = render_markdown(&text);
    view! { <div class="rich-text" inner_html=html></div> }
}
