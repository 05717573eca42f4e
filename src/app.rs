//! Deals UI Root
//!
//! Owns the page context, wires the handlers to the server-rendered rows and
//! turns refresh requests into a reload of the document.

use std::rc::Rc;

use leptos::prelude::*;

use crate::config::PageConfig;
use crate::context::PageContext;
use crate::dom::{self, BrowserPage};

#[component]
pub fn App(config: PageConfig) -> impl IntoView {
    // State
    let (refresh_trigger, set_refresh_trigger) = signal(0u32);

    // Provide context to all children
    let ctx = PageContext::new((refresh_trigger, set_refresh_trigger));
    provide_context(ctx);

    // The rows are rendered by the server, so re-reading them means reloading the document
    Effect::new(move |_| {
        let trigger = ctx.refresh_trigger.get();
        if trigger == 0 {
            return;
        }
        tracing::info!(trigger, "refreshing deals page");
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                tracing::error!(error = ?e, "page reload failed");
            }
        }
    });

    dom::bind_all(BrowserPage::new(ctx), Rc::new(config));

    view! {
        <div
            id="deals-ui-marker"
            data-runtime="deals-ui"
            style="display:none;"
        ></div>
    }
}
