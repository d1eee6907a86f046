//! # client
//!
//! Leptos + WASM front end for the Access Manager.
//!
//! The root view restores a bearer token from `localStorage`, shows the login
//! form until a token is held, and then lists user accounts fetched from the
//! backend with that token. Browser-only behavior (HTTP, storage, console
//! logging) sits behind the `hydrate` feature; `ssr` renders the shell.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
