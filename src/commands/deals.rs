//! Deal Commands
//!
//! Typed calls to the deal status and acceptance endpoints.

use tracing::debug;

use super::{Backend, Reply};
use crate::config::{AcceptanceConfig, ToggleFamily};
use crate::error::{UiError, UiResult};
use crate::models::{AcceptanceReport, AttachmentField, DealId, StatusReply};

/// POST a one-way status confirmation and decode the `{status}` reply.
///
/// Non-2xx and undecodable bodies are errors; a decoded non-success status
/// is [`UiError::Rejected`].
pub async fn confirm_status<B: Backend>(backend: &B, family: &ToggleFamily, id: &DealId) -> UiResult<()> {
    let url = family.url_for(id);
    debug!(%url, "confirming status");
    let reply: StatusReply = backend.post_empty(&url).await?.require_ok()?.json()?;
    if reply.is_success() {
        Ok(())
    } else {
        Err(UiError::Rejected { status: reply.status })
    }
}

/// POST the acceptance answers as JSON.
///
/// A 2xx body that is not JSON is accepted; a JSON body carrying a non-success
/// `status` is not.
pub async fn process_acceptance<B: Backend>(
    backend: &B,
    config: &AcceptanceConfig,
    id: &DealId,
    report: AcceptanceReport,
) -> UiResult<()> {
    let url = config.status_url(id);
    let body = serde_json::to_value(report)?;
    debug!(%url, ?report, "sending acceptance result");
    let reply = backend.post_json(&url, &body).await?.require_ok()?;
    match reply.json::<StatusReply>() {
        Ok(status) if !status.is_success() => Err(UiError::Rejected { status: status.status }),
        _ => Ok(()),
    }
}

/// Upload whichever final documents are attached. Returns `None` when there
/// was nothing to send.
pub async fn upload_final_docs<B: Backend>(
    backend: &B,
    config: &AcceptanceConfig,
    id: &DealId,
    attachments: Vec<(AttachmentField, B::File)>,
) -> UiResult<Option<Reply>> {
    if attachments.is_empty() {
        debug!(deal = %id, "no final documents attached, skipping upload");
        return Ok(None);
    }
    let url = config.upload_url(id);
    let parts: Vec<(&'static str, B::File)> = attachments
        .into_iter()
        .map(|(field, file)| (field.form_name(), file))
        .collect();
    debug!(%url, files = parts.len(), "uploading final documents");
    let reply = backend.post_multipart(&url, &parts).await?.require_ok()?;
    Ok(Some(reply))
}
