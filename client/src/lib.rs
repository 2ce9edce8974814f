//! # client
//!
//! Leptos + WASM frontend for DevLearn Pro: a single page that switches
//! between learning sections, each backed by its own panel of fetched data.
//!
//! This crate contains the app shell, section pages, panel components,
//! panel state, and the browser transport that feeds `wire::ApiClient`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
