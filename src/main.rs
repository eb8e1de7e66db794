//! Portfolio Frontend Entry Point

mod app;
mod components;
mod content;
mod context;
mod error;
mod markdown;
mod models;
mod portfolio;
mod quantity;
mod recipe;
mod store;
mod theme;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_logger::init(console_logger::default_level()) {
        web_sys::console::warn_1(&format!("console logger not installed: {}", err).into());
    }
    mount_to_body(App);
}
