//! # client
//!
//! Leptos single-page frontend for the Bloom flower subscription service.
//!
//! This crate contains the router, pages, and components, the browser
//! `localStorage` backend for the session store, and the REST calls to the
//! authentication backend. Session semantics (what is stored, how tokens are
//! read, who may enter which route) live in the `session` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and the panic hook, then mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already installed: {e}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
