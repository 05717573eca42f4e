//! Deals UI Frontend Entry Point

mod acceptance;
mod app;
mod commands;
mod config;
mod context;
mod countdown;
mod dom;
mod download;
mod error;
mod models;
mod page;
mod status_toggle;
mod timer_column;

use app::App;
use leptos::mount::{mount_to, mount_to_body};
use leptos::prelude::*;

/// Optional container for the runtime marker
const MOUNT_ID: &str = "deals-ui-root";

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();

    let config = dom::load_page_config();
    tracing::info!("starting deals UI");

    match dom::element_by_id::<web_sys::HtmlElement>(MOUNT_ID) {
        Some(root) => mount_to(root, move || view! { <App config=config /> }).forget(),
        None => mount_to_body(move || view! { <App config=config /> }),
    }
}
