//! CalcBoard web client: header navigation, localized chrome, and the
//! authentication HTTP client.
//!
//! ARCHITECTURE
//! ============
//! `pages` own route-level orchestration, `components` render shared chrome,
//! `state` holds plain data models wired to Leptos signals, `net` speaks to
//! the authentication service, and `util` isolates browser/environment
//! concerns (storage, translations).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for the browser build.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
