//! Wanderlist Entry Point

mod app;
mod catalog;
mod filters;
mod markup;
mod models;
mod render;
mod state;
mod storage;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    mount_to_body(App);
}
