//! # client
//!
//! Leptos + WASM admin panel for the contacts and users REST backend.
//!
//! This crate contains pages, components, application state and the REST
//! client. Record schemas, row rendering and request planning live in the
//! shared `records` crate so the CLI renders identical rows.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
