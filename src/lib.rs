//! # backstory-client
//!
//! Leptos + WASM frontend for the Backstory portfolio pages: a GPT-2 story
//! generation page and a comment board. Replaces the hand-written
//! `script.js`/`gpt2.js` glue with a Rust-native UI layer.
//!
//! This crate contains pages, components, application state, and the REST
//! helpers that talk to the `/gpt2`, `/data`, and `/delete-data` endpoints.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
