//! Browser Bindings
//!
//! `web-sys` implementations of the page seams and the event wiring that
//! attaches handlers to the server-rendered document.

mod bind;
mod elements;

use wasm_bindgen::JsCast;
use web_sys::Document;

use crate::config::{PageConfig, CONFIG_ELEMENT_ID};

pub use bind::bind_all;
pub use elements::BrowserPage;

pub(crate) fn web_document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

pub(crate) fn element_by_id<T: JsCast>(id: &str) -> Option<T> {
    web_document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|node| node.dyn_into::<T>().ok())
}

/// Every element matching `selector` that is a `T`
pub(crate) fn query_all<T: JsCast>(selector: &str) -> Vec<T> {
    let Some(doc) = web_document() else {
        return Vec::new();
    };
    let Ok(nodes) = doc.query_selector_all(selector) else {
        tracing::warn!(%selector, "invalid selector");
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Read overrides from the bootstrap JSON element, if the server rendered one.
pub fn load_page_config() -> PageConfig {
    let Some(node) = web_document().and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID)) else {
        return PageConfig::default();
    };
    let raw = node.text_content().unwrap_or_default();
    PageConfig::from_json(&raw).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring malformed page config");
        PageConfig::default()
    })
}
