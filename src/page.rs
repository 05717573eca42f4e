//! Page Seams
//!
//! What the handlers need from the document, the window and local storage.
//! Browser implementations live in `dom`; tests use the fakes below.

/// Window-level effects
pub trait Page {
    fn alert(&self, message: &str);

    /// Re-synchronise every row with the server. The only way success paths
    /// publish their result.
    fn refresh(&self);

    /// Schedule one [`Page::refresh`] after `delay_ms`
    fn refresh_after(&self, delay_ms: u32);

    fn navigate(&self, url: &str);
}

/// Browser-local persistent key/value storage
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// Read access to the `data-*` attributes of an element
pub trait DataAttributes {
    fn data(&self, name: &str) -> Option<String>;
}

/// A status checkbox in a deals row
pub trait Checkbox: DataAttributes {
    fn set_disabled(&self, disabled: bool);
    fn set_checked(&self, checked: bool);
}

/// A button whose label changes while it is busy
pub trait Button: DataAttributes {
    fn set_disabled(&self, disabled: bool);
    fn label(&self) -> String;
    fn set_label(&self, label: &str);
}

/// An element that can be hidden with a CSS class
pub trait Toggleable {
    /// Flip the hidden state, returning whether it is now hidden
    fn toggle_hidden(&self) -> bool;
    fn set_hidden(&self, hidden: bool);
}
