#![allow(warnings)]
//! Bill Split Frontend Entry Point

mod money;
mod models;
mod console;
mod error;
mod config;
mod split;
mod receipt;
mod commands;
mod store;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
