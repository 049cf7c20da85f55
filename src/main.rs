//! Taskboard Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init_logger(config::LOG_DIRECTIVES) {
        leptos::logging::warn!("logger not installed: {}", e);
    }
    mount_to_body(App);
}
