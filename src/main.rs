//! Virtual Store Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod edit;
mod error;
mod logger;
mod models;
mod pages;
mod session;
mod toast;
mod validation;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(AppConfig::from_build_env().log_level);
    mount_to_body(App);
}
