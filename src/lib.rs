//! # taskboard
//!
//! Leptos + WASM front end for the task-board page: lists boards from the REST
//! backend, shows the columns of the selected board and creates new boards
//! through a modal dialog.
//!
//! Browser-only code sits behind the `csr` feature. Without it the crate builds
//! natively so the page controller and state machines can be unit tested.

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount [`app::App`] on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);
    leptos::mount::mount_to_body(app::App);
}
