//! Status Toggles
//!
//! Checkboxes that confirm a one-way deal status ("documents delivered",
//! "client arrived"). One implementation serves every [`ToggleFamily`].

use tracing::{debug, error, warn};

use crate::commands::{self, Backend};
use crate::config::{Labels, ToggleFamily};
use crate::error::UiError;
use crate::models::DealId;
use crate::page::{Checkbox, Page};

pub const DEAL_ID_ATTR: &str = "deal-id";

#[derive(Debug, Clone, PartialEq)]
pub enum ToggleOutcome {
    /// No id on the checkbox; nothing was sent
    Skipped,
    Confirmed,
    /// The checkbox was reverted and the user alerted
    Reverted(UiError),
}

/// Handle one change event on a status checkbox.
///
/// The checkbox stays disabled for as long as the request is in flight. On
/// success the page is refreshed and the checkbox is left disabled.
pub async fn on_change<B, C, P>(
    backend: &B,
    page: &P,
    checkbox: &C,
    family: &ToggleFamily,
    labels: &Labels,
) -> ToggleOutcome
where
    B: Backend,
    C: Checkbox,
    P: Page,
{
    let Some(id) = checkbox.data(DEAL_ID_ATTR).as_deref().and_then(DealId::parse) else {
        error!(selector = %family.selector, "deal id is missing from checkbox data attribute");
        return ToggleOutcome::Skipped;
    };

    checkbox.set_disabled(true);

    match commands::confirm_status(backend, family, &id).await {
        Ok(()) => {
            debug!(deal = %id, selector = %family.selector, "status confirmed");
            page.refresh();
            ToggleOutcome::Confirmed
        }
        Err(err) => {
            match &err {
                UiError::Rejected { status } => warn!(deal = %id, %status, "status change rejected"),
                other => error!(deal = %id, error = %other, "status request failed"),
            }
            page.alert(err.toggle_alert(labels));
            checkbox.set_checked(false);
            checkbox.set_disabled(false);
            ToggleOutcome::Reverted(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::commands::fake::{Call, FakeBackend};
    use crate::commands::Reply;
    use crate::error::UiResult;
    use crate::page::fake::{FakeElement, FakePage};

    fn delivered() -> ToggleFamily {
        ToggleFamily::new(".delivery-checkbox", "/mark-delivered/{id}")
    }

    fn checked_box(id: &str) -> FakeElement {
        let checkbox = FakeElement::with_data(DEAL_ID_ATTR, id);
        checkbox.checked.set(true);
        checkbox
    }

    #[tokio::test]
    async fn test_missing_id_sends_nothing() {
        let backend = FakeBackend::new();
        let page = FakePage::default();
        let checkbox = FakeElement::default();
        checkbox.checked.set(true);

        let outcome = on_change(&backend, &page, &checkbox, &delivered(), &Labels::default()).await;

        assert_eq!(outcome, ToggleOutcome::Skipped);
        assert!(backend.calls().is_empty());
        assert!(!checkbox.disabled.get());
        assert!(checkbox.checked.get());
        assert!(page.alerts.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_success_refreshes_once() {
        let backend = FakeBackend::new();
        let page = FakePage::default();
        let checkbox = checked_box("12");

        let outcome = on_change(&backend, &page, &checkbox, &delivered(), &Labels::default()).await;

        assert_eq!(outcome, ToggleOutcome::Confirmed);
        assert_eq!(backend.calls(), vec![Call::Empty("/mark-delivered/12".into())]);
        assert_eq!(page.refreshes.get(), 1);
        assert!(checkbox.disabled.get());
        assert!(page.alerts.borrow().is_empty());
    }

    async fn disabled_during_request(reply: UiResult<Reply>) -> (bool, bool) {
        let checkbox = Rc::new(checked_box("12"));
        let seen = Rc::new(Cell::new(false));
        let backend = {
            let checkbox = checkbox.clone();
            let seen = seen.clone();
            FakeBackend::new().reply(reply).on_call(move || seen.set(checkbox.disabled.get()))
        };

        on_change(&backend, &FakePage::default(), &*checkbox, &delivered(), &Labels::default()).await;
        (seen.get(), checkbox.disabled.get())
    }

    #[tokio::test]
    async fn test_disabled_while_request_in_flight() {
        let ok = Ok(Reply::new(200, r#"{"status":"success"}"#));
        assert_eq!(disabled_during_request(ok).await, (true, true));

        let failed = Err(UiError::Network("offline".into()));
        assert_eq!(disabled_during_request(failed).await, (true, false));
    }

    #[tokio::test]
    async fn test_rejected_status_reverts_with_one_alert() {
        let backend = FakeBackend::new().reply(Ok(Reply::new(200, r#"{"status":"error"}"#)));
        let page = FakePage::default();
        let checkbox = checked_box("12");
        let labels = Labels::default();

        let outcome = on_change(&backend, &page, &checkbox, &delivered(), &labels).await;

        assert!(matches!(outcome, ToggleOutcome::Reverted(UiError::Rejected { .. })));
        assert_eq!(*page.alerts.borrow(), vec![labels.save_failed_alert.clone()]);
        assert_eq!(page.refreshes.get(), 0);
        assert!(!checkbox.checked.get());
        assert!(!checkbox.disabled.get());
    }

    #[tokio::test]
    async fn test_network_failure_reverts_with_network_alert() {
        let backend = FakeBackend::new().reply(Err(UiError::Network("offline".into())));
        let page = FakePage::default();
        let checkbox = checked_box("3");
        let labels = Labels::default();

        on_change(&backend, &page, &checkbox, &delivered(), &labels).await;

        assert_eq!(*page.alerts.borrow(), vec![labels.network_failed_alert.clone()]);
        assert!(!checkbox.checked.get());
        assert!(!checkbox.disabled.get());
    }

    #[tokio::test]
    async fn test_malformed_body_reverts() {
        let backend = FakeBackend::new().reply(Ok(Reply::new(200, "not json")));
        let page = FakePage::default();
        let checkbox = checked_box("3");

        let outcome = on_change(&backend, &page, &checkbox, &delivered(), &Labels::default()).await;

        assert!(matches!(outcome, ToggleOutcome::Reverted(UiError::Decode(_))));
        assert_eq!(page.alerts.borrow().len(), 1);
        assert_eq!(page.refreshes.get(), 0);
    }

    #[tokio::test]
    async fn test_arrival_family_uses_its_endpoint() {
        let backend = FakeBackend::new();
        let page = FakePage::default();
        let checkbox = checked_box("99");
        let family = ToggleFamily::new(".client-arrived-checkbox", "/mark-arrived/{id}");

        on_change(&backend, &page, &checkbox, &family, &Labels::default()).await;

        assert_eq!(backend.calls()[0].url(), "/mark-arrived/99");
    }
}
