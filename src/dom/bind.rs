//! Event Registration
//!
//! Attaches each handler to the elements it tracks. Handlers are registered
//! independently; a page missing one group of elements still gets the others.

use std::rc::Rc;

use chrono::{Local, Utc};
use gloo_timers::callback::Interval;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, HtmlElement, HtmlInputElement};

use super::elements::{
    BrowserPage, DomAcceptanceForm, DomButton, DomCheckbox, DomCountdown, DomToggle, LocalPreferences,
};
use super::{element_by_id, query_all};
use crate::acceptance::AcceptanceController;
use crate::commands::HttpBackend;
use crate::config::{PageConfig, ToggleFamily};
use crate::timer_column::TimerColumn;
use crate::{countdown, download, status_toggle};

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    if target
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .is_err()
    {
        tracing::warn!(%event, "failed to register listener");
    }
    callback.forget();
}

/// Register every handler on the current document.
pub fn bind_all(page: BrowserPage, config: Rc<PageConfig>) {
    for family in &config.status_toggles {
        bind_status_toggles(page, family.clone(), config.clone());
    }
    bind_timer_column(config.clone());
    start_countdowns(config.clone());
    bind_acceptance(page, config.clone());
    bind_downloads(page, config);
}

fn bind_status_toggles(page: BrowserPage, family: ToggleFamily, config: Rc<PageConfig>) {
    let family = Rc::new(family);
    let checkboxes = query_all::<HtmlInputElement>(&family.selector);
    tracing::debug!(selector = %family.selector, count = checkboxes.len(), "binding status toggles");

    for input in checkboxes {
        let checkbox = DomCheckbox(input.clone());
        let family = family.clone();
        let config = config.clone();
        listen(&input, "change", move |_| {
            let checkbox = checkbox.clone();
            let family = family.clone();
            let config = config.clone();
            spawn_local(async move {
                status_toggle::on_change(&HttpBackend, &page, &checkbox, &family, &config.labels).await;
            });
        });
    }
}

fn timer_cells(config: &PageConfig, class: &Rc<str>) -> Vec<DomToggle> {
    query_all::<Element>(&config.countdown.cell_selector)
        .into_iter()
        .map(|cell| DomToggle::new(cell, class.clone()))
        .collect()
}

fn bind_timer_column(config: Rc<PageConfig>) {
    let Some(header) = element_by_id::<Element>(&config.countdown.header_id) else {
        return;
    };
    let class: Rc<str> = Rc::from(config.countdown.hidden_class.as_str());
    let header_toggle = Rc::new(DomToggle::new(header.clone(), class.clone()));

    {
        let config = config.clone();
        let class = class.clone();
        let header_toggle = header_toggle.clone();
        listen(&header, "click", move |_| {
            let store = LocalPreferences;
            TimerColumn::new(&store, &config.countdown.storage_key)
                .toggle(&*header_toggle, &timer_cells(&config, &class));
        });
    }

    let store = LocalPreferences;
    TimerColumn::new(&store, &config.countdown.storage_key)
        .restore(&*header_toggle, &timer_cells(&config, &class));
}

fn render_countdowns(config: &PageConfig, expired_class: &Rc<str>) {
    let cells: Vec<DomCountdown> = query_all::<Element>(&config.countdown.timer_selector)
        .into_iter()
        .map(|span| DomCountdown::new(span, expired_class.clone()))
        .collect();
    countdown::render_all(&cells, Utc::now(), &Local, &config.labels);
}

fn start_countdowns(config: Rc<PageConfig>) {
    if query_all::<Element>(&config.countdown.timer_selector).is_empty() {
        return;
    }
    let expired_class: Rc<str> = Rc::from(config.countdown.expired_class.as_str());
    render_countdowns(&config, &expired_class);

    let tick_ms = config.countdown.tick_ms;
    let interval = Interval::new(tick_ms, move || render_countdowns(&config, &expired_class));
    interval.forget();
}

fn bind_acceptance(page: BrowserPage, config: Rc<PageConfig>) {
    let acceptance = Rc::new(config.acceptance.clone());
    if element_by_id::<Element>(&acceptance.modal_id).is_none() {
        tracing::debug!(modal = %acceptance.modal_id, "no acceptance modal on this page");
        return;
    }
    let controller = Rc::new(AcceptanceController::new());

    for trigger in query_all::<HtmlElement>(&acceptance.open_selector) {
        let button = DomButton(trigger.clone());
        let controller = controller.clone();
        let acceptance = acceptance.clone();
        listen(&trigger, "click", move |_| {
            let form = DomAcceptanceForm::new(acceptance.clone());
            if let Err(e) = controller.open(&button, &form) {
                tracing::error!(error = %e, "cannot open acceptance modal");
            }
        });
    }

    let Some(save) = element_by_id::<HtmlElement>(&acceptance.save_button_id) else {
        return;
    };
    let button = DomButton(save.clone());
    listen(&save, "click", move |event| {
        event.prevent_default();
        let controller = controller.clone();
        let button = button.clone();
        let config = config.clone();
        let form = DomAcceptanceForm::new(acceptance.clone());
        spawn_local(async move {
            controller
                .save(&HttpBackend, &page, &form, &button, &config.acceptance, &config.labels)
                .await;
        });
    });
}

fn bind_downloads(page: BrowserPage, config: Rc<PageConfig>) {
    for selector in &config.downloads.button_selectors {
        for element in query_all::<HtmlElement>(selector) {
            let button = DomButton(element.clone());
            let config = config.clone();
            listen(&element, "click", move |event| {
                event.prevent_default();
                download::start(&button, &page, &config.downloads, &config.labels);
            });
        }
    }
}
