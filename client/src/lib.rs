//! # client
//!
//! Leptos + WASM frontend for the issue desk: a sidebar-navigable single page
//! that switches between a metrics dashboard and a filterable issue list.
//!
//! This crate contains pages, components, and application state. Issue data
//! and filtering come from the `issues` crate; nothing is fetched or stored.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
