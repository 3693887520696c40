//! # qa-client
//!
//! Leptos + WASM browser client for the Q&A forum: token-based session
//! bootstrap, route guarding, and profile-picture management over the
//! forum's REST backend.
//!
//! Browser-only behavior sits behind the `csr` feature. Without it the
//! crate builds natively and the session, routing, and validation logic
//! can be exercised by plain unit tests.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

pub use app::App;

/// WASM entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
    }
    leptos::mount::mount_to_body(App);
}
