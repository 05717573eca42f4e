//! Timer Column Visibility
//!
//! The countdown column can be collapsed from its header; the choice survives reloads.

use tracing::debug;

use crate::page::{PreferenceStore, Toggleable};

pub struct TimerColumn<'a, S: PreferenceStore> {
    store: &'a S,
    key: &'a str,
}

impl<'a, S: PreferenceStore> TimerColumn<'a, S> {
    pub fn new(store: &'a S, key: &'a str) -> Self {
        Self { store, key }
    }

    /// Stored preference; unset or unrecognised means visible.
    pub fn stored_hidden(&self) -> bool {
        self.store.load(self.key).as_deref() == Some("true")
    }

    /// Flip the header, align every cell with it and persist the result.
    pub fn toggle<H, C>(&self, header: &H, cells: &[C]) -> bool
    where
        H: Toggleable,
        C: Toggleable,
    {
        let hidden = header.toggle_hidden();
        for cell in cells {
            cell.set_hidden(hidden);
        }
        self.store.save(self.key, if hidden { "true" } else { "false" });
        debug!(hidden, cells = cells.len(), "timer column toggled");
        hidden
    }

    /// Replay a stored "hidden" preference at page load.
    pub fn restore<H, C>(&self, header: &H, cells: &[C])
    where
        H: Toggleable,
        C: Toggleable,
    {
        if self.stored_hidden() {
            self.toggle(header, cells);
        }
    }
}
