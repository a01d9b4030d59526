//! Cloud IDE Frontend Entry Point

mod models;
mod commands;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    commands::init_logging();
    mount_to_body(App);
}
