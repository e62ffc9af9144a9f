//! # brandcraft-client
//!
//! Leptos + WASM frontend for the BrandCraft brand studio.
//!
//! This crate contains the session store, the REST API client, theme and
//! toast handling, the navigation sidebar, a small markup renderer, and the
//! route-level pages that tie them together. Browser-only glue is gated
//! behind the `csr` feature; everything else builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: wires up console logging and mounts [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}
