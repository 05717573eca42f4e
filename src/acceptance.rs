//! Acceptance Modal
//!
//! Records whether a deal's acceptance act was signed and whether defects were
//! noted, optionally with the signed act and defect list attached.
//!
//! Stages: `Idle` (closed or freshly opened) → `Validating` on save →
//! `Submitting` while requests run. A failed submission returns to `Idle` with
//! the modal still open so the user can retry.

use std::cell::Cell;

use tracing::{debug, error, info};

use crate::commands::{self, Backend};
use crate::config::{AcceptanceConfig, Labels};
use crate::error::{UiError, UiResult};
use crate::models::{AcceptanceDraft, DealId};
use crate::page::{Button, DataAttributes, Page};
use crate::status_toggle::DEAL_ID_ATTR;

/// The modal's form
pub trait AcceptanceForm {
    type File;

    /// Write the selected row into the hidden id field
    fn set_deal_id(&self, id: &DealId);
    /// Clear answers and file inputs
    fn reset(&self);
    fn read(&self) -> AcceptanceDraft<Self::File>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Validating,
    Submitting,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// A submission is already running
    Busy,
    /// An answer is missing; user alerted, nothing sent
    Incomplete,
    /// The form carries no deal id; logged, nothing sent
    Aborted,
    Saved { uploaded: bool },
    Failed(UiError),
}

pub struct AcceptanceController {
    stage: Cell<Stage>,
}

impl Default for AcceptanceController {
    fn default() -> Self {
        Self::new()
    }
}

impl AcceptanceController {
    pub fn new() -> Self {
        Self { stage: Cell::new(Stage::Idle) }
    }

    pub fn stage(&self) -> Stage {
        self.stage.get()
    }

    /// Bind the form to the row of `trigger` and clear previous input.
    pub fn open<T, F>(&self, trigger: &T, form: &F) -> UiResult<DealId>
    where
        T: DataAttributes,
        F: AcceptanceForm,
    {
        let id = trigger
            .data(DEAL_ID_ATTR)
            .as_deref()
            .and_then(DealId::parse)
            .ok_or(UiError::MissingAttribute("data-deal-id"))?;
        form.reset();
        form.set_deal_id(&id);
        self.stage.set(Stage::Idle);
        debug!(deal = %id, "acceptance modal opened");
        Ok(id)
    }

    /// Validate and submit the form.
    ///
    /// The status update and the upload are separate requests. If the upload
    /// fails the status update stays applied on the server.
    pub async fn save<B, F, Btn, P>(
        &self,
        backend: &B,
        page: &P,
        form: &F,
        button: &Btn,
        config: &AcceptanceConfig,
        labels: &Labels,
    ) -> SaveOutcome
    where
        B: Backend,
        F: AcceptanceForm<File = B::File>,
        Btn: Button,
        P: Page,
    {
        if self.stage() == Stage::Submitting {
            debug!("acceptance save ignored, submission in flight");
            return SaveOutcome::Busy;
        }

        self.stage.set(Stage::Validating);
        let draft = form.read();
        let Some(report) = draft.report() else {
            page.alert(&labels.incomplete_selection_alert);
            self.stage.set(Stage::Idle);
            return SaveOutcome::Incomplete;
        };
        let Some(id) = draft.deal_id.clone() else {
            error!("deal id is missing from the acceptance form");
            self.stage.set(Stage::Idle);
            return SaveOutcome::Aborted;
        };

        self.stage.set(Stage::Submitting);
        let original_label = button.label();
        button.set_disabled(true);
        button.set_label(&labels.saving);

        let attachments = draft.into_attachments();
        let result = async {
            commands::process_acceptance(backend, config, &id, report).await?;
            commands::upload_final_docs(backend, config, &id, attachments).await
        }
        .await;

        match result {
            Ok(upload) => {
                info!(deal = %id, uploaded = upload.is_some(), "acceptance result saved");
                page.refresh();
                SaveOutcome::Saved { uploaded: upload.is_some() }
            }
            Err(err) => {
                error!(deal = %id, error = %err, "acceptance submission failed");
                page.alert(&err.acceptance_alert(labels));
                button.set_disabled(false);
                button.set_label(&original_label);
                self.stage.set(Stage::Idle);
                SaveOutcome::Failed(err)
            }
        }
    }
}
