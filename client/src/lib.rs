//! # client
//!
//! Leptos + WASM frontend for the fitness-center portal.
//!
//! Pages for managers, personal trainers, and clients talk to the remote
//! fitness REST API directly from the browser. Session handling (token
//! decoding and the role/expiry guard) lives in the `session` crate; this
//! crate binds it to the cookie jar and the router.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
