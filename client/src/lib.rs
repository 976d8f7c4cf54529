//! # board-client
//!
//! Leptos + WASM frontend for the in-memory message board.
//!
//! Holds the board view-model, the components that render it, and the
//! browser glue they need. Built with `hydrate` for the browser bundle and
//! with `ssr` for server rendering.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
