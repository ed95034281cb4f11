#![allow(warnings)]
//! TaskQuest Frontend Entry Point

mod storage;
mod context;
mod store;
mod components;
mod pages;
mod app;

use app::App;
use leptos::prelude::*;
use taskquest_core::settings::Settings;

fn main() {
    console_error_panic_hook::set_once();
    let settings: Settings = storage::load();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level()));
    log::info!("TaskQuest starting");
    mount_to_body(App);
}
