//! # client
//!
//! Leptos + WASM frontend for the chat log.
//!
//! This crate contains the conversation page, the message components, the
//! per-message edit/history state machine, and the REST helpers that talk to
//! the host's `/api/messages` endpoints.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
