#![allow(warnings)]
//! Trip Points Frontend Entry Point

mod app;
mod board;
mod components;
mod context;
mod dom;
mod logger;
mod route;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Debug);
    mount_to_body(App);
}
