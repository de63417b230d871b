#![recursion_limit = "256"]
pub mod api;
pub mod common;
pub mod config;
pub mod frontend;
pub mod models;
pub mod services;
pub mod state;
pub mod types;
pub mod utils;

/// WASM hydration entry point
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::hydrate_body(frontend::App);
}
