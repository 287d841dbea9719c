//! Sequences Frontend Entry Point

mod api;
mod app;
mod boot;
mod components;
mod dom;
mod editor;
mod models;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
