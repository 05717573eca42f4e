//! DOM-backed implementations of the page seams.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement};

use super::{element_by_id, web_document};
use crate::acceptance::AcceptanceForm;
use crate::config::AcceptanceConfig;
use crate::context::PageContext;
use crate::countdown::{CountdownCell, DEADLINE_ATTR};
use crate::models::{parse_answer, AcceptanceDraft, DealId};
use crate::page::{Button, Checkbox, DataAttributes, Page, PreferenceStore, Toggleable};

fn data_attribute(element: &Element, name: &str) -> Option<String> {
    element.get_attribute(&format!("data-{}", name))
}

/// Window effects; refreshes go through the page context
#[derive(Clone, Copy)]
pub struct BrowserPage {
    ctx: PageContext,
}

impl BrowserPage {
    pub fn new(ctx: PageContext) -> Self {
        Self { ctx }
    }
}

impl Page for BrowserPage {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn refresh(&self) {
        self.ctx.refresh();
    }

    fn refresh_after(&self, delay_ms: u32) {
        let page = *self;
        Timeout::new(delay_ms, move || page.refresh()).forget();
    }

    fn navigate(&self, url: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                tracing::error!(%url, error = ?e, "navigation failed");
            }
        }
    }
}

/// `window.localStorage`; unavailable storage reads as empty and drops writes
#[derive(Clone, Copy, Default)]
pub struct LocalPreferences;

impl LocalPreferences {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

impl PreferenceStore for LocalPreferences {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn save(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                let _ = storage.set_item(key, value);
            }
            None => tracing::warn!(%key, "local storage unavailable, preference not saved"),
        }
    }
}

#[derive(Clone)]
pub struct DomCheckbox(pub HtmlInputElement);

impl DataAttributes for DomCheckbox {
    fn data(&self, name: &str) -> Option<String> {
        data_attribute(&self.0, name)
    }
}

impl Checkbox for DomCheckbox {
    fn set_disabled(&self, disabled: bool) {
        self.0.set_disabled(disabled);
    }

    fn set_checked(&self, checked: bool) {
        self.0.set_checked(checked);
    }
}

/// A `<button>` or a link styled as one
#[derive(Clone)]
pub struct DomButton(pub HtmlElement);

impl DataAttributes for DomButton {
    fn data(&self, name: &str) -> Option<String> {
        data_attribute(&self.0, name)
    }
}

impl Button for DomButton {
    fn set_disabled(&self, disabled: bool) {
        if let Some(button) = self.0.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
            return;
        }
        if disabled {
            let _ = self.0.set_attribute("disabled", "disabled");
            let _ = self.0.set_attribute("aria-disabled", "true");
        } else {
            let _ = self.0.remove_attribute("disabled");
            let _ = self.0.set_attribute("aria-disabled", "false");
        }
    }

    fn label(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_label(&self, label: &str) {
        self.0.set_text_content(Some(label));
    }
}

/// Element hidden by toggling a CSS class
pub struct DomToggle {
    element: Element,
    class: Rc<str>,
}

impl DomToggle {
    pub fn new(element: Element, class: Rc<str>) -> Self {
        Self { element, class }
    }
}

impl Toggleable for DomToggle {
    fn toggle_hidden(&self) -> bool {
        self.element.class_list().toggle(&self.class).unwrap_or(false)
    }

    fn set_hidden(&self, hidden: bool) {
        let _ = self.element.class_list().toggle_with_force(&self.class, hidden);
    }
}

pub struct DomCountdown {
    element: Element,
    expired_class: Rc<str>,
}

impl DomCountdown {
    pub fn new(element: Element, expired_class: Rc<str>) -> Self {
        Self { element, expired_class }
    }
}

impl CountdownCell for DomCountdown {
    fn deadline(&self) -> Option<String> {
        data_attribute(&self.element, DEADLINE_ATTR)
    }

    fn set_text(&self, text: &str) {
        if self.element.text_content().as_deref() != Some(text) {
            self.element.set_text_content(Some(text));
        }
    }

    fn mark_expired(&self) {
        let _ = self.element.class_list().add_1(&self.expired_class);
    }
}

/// The acceptance form inside the modal, looked up by id on every access
pub struct DomAcceptanceForm {
    config: Rc<AcceptanceConfig>,
}

impl DomAcceptanceForm {
    pub fn new(config: Rc<AcceptanceConfig>) -> Self {
        Self { config }
    }

    fn checked_answer(&self, group: &str) -> Option<bool> {
        let selector = format!("#{} input[name=\"{}\"]:checked", self.config.form_id, group);
        web_document()
            .and_then(|doc| doc.query_selector(&selector).ok().flatten())
            .and_then(|node| node.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| parse_answer(&input.value()))
    }

    fn selected_file(&self, input_id: &str) -> Option<web_sys::File> {
        element_by_id::<HtmlInputElement>(input_id)
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
    }
}

impl AcceptanceForm for DomAcceptanceForm {
    type File = web_sys::File;

    fn set_deal_id(&self, id: &DealId) {
        match element_by_id::<HtmlInputElement>(&self.config.deal_id_field) {
            Some(field) => field.set_value(id.as_str()),
            None => tracing::error!(field = %self.config.deal_id_field, "deal id field not found"),
        }
    }

    fn reset(&self) {
        if let Some(form) = element_by_id::<HtmlFormElement>(&self.config.form_id) {
            form.reset();
        }
    }

    fn read(&self) -> AcceptanceDraft<web_sys::File> {
        AcceptanceDraft {
            deal_id: element_by_id::<HtmlInputElement>(&self.config.deal_id_field)
                .and_then(|field| DealId::parse(&field.value())),
            is_signed: self.checked_answer(&self.config.signed_group),
            has_defects: self.checked_answer(&self.config.defects_group),
            signed_act: self.selected_file(&self.config.signed_act_input),
            defect_list: self.selected_file(&self.config.defect_list_input),
        }
    }
}
