//! Trello Board Frontend Entry Point

mod app;
mod components;
mod context;
mod storage;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("Logger not installed: {}", e).into());
    }

    mount_to_body(App);
}
