//! Page Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// Page-wide signals provided via context
#[derive(Clone, Copy)]
pub struct PageContext {
    /// Bumped whenever a confirmed change must be re-read from the server - read
    pub refresh_trigger: ReadSignal<u32>,
    /// Bumped whenever a confirmed change must be re-read from the server - write
    set_refresh_trigger: WriteSignal<u32>,
}

impl PageContext {
    pub fn new(refresh_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            refresh_trigger: refresh_trigger.0,
            set_refresh_trigger: refresh_trigger.1,
        }
    }

    /// Request a refresh of the server-rendered rows
    pub fn refresh(&self) {
        self.set_refresh_trigger.update(|v| *v += 1);
    }
}
