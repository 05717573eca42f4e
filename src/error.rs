//! UI Errors
//!
//! Every failure a handler can hit, and the alert text the user sees for it.

use thiserror::Error;

use crate::config::Labels;

pub type UiResult<T> = Result<T, UiError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UiError {
    /// A data attribute the server must render was not there
    #[error("missing required attribute `{0}`")]
    MissingAttribute(&'static str),

    #[error("server responded with HTTP {status}")]
    Http { status: u16 },

    #[error("malformed response body: {0}")]
    Decode(String),

    #[error("network failure: {0}")]
    Network(String),

    /// Well-formed reply whose `status` field was not `success`
    #[error("server rejected the change (status `{status}`)")]
    Rejected { status: String },

    #[error("DOM error: {0}")]
    Dom(String),
}

impl UiError {
    /// Alert text for a failed status toggle.
    pub fn toggle_alert<'a>(&self, labels: &'a Labels) -> &'a str {
        match self {
            UiError::Rejected { .. } => &labels.save_failed_alert,
            _ => &labels.network_failed_alert,
        }
    }

    /// Alert text for a failed acceptance save: the fixed prefix and a
    /// reason in the page's language.
    pub fn acceptance_alert(&self, labels: &Labels) -> String {
        let reason = match self {
            UiError::Rejected { .. } => labels.rejected_reason.clone(),
            UiError::Http { status } => format!("{} {}", labels.server_error_reason, status),
            UiError::Decode(_) => labels.bad_reply_reason.clone(),
            UiError::Network(_) => labels.network_reason.clone(),
            UiError::MissingAttribute(_) | UiError::Dom(_) => labels.page_error_reason.clone(),
        };
        format!("{}: {}", labels.acceptance_failed_alert, reason)
    }
}

impl From<serde_json::Error> for UiError {
    fn from(e: serde_json::Error) -> Self {
        UiError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_alert_distinguishes_rejection() {
        let labels = Labels::default();
        let rejected = UiError::Rejected { status: "error".into() };
        assert_eq!(rejected.toggle_alert(&labels), labels.save_failed_alert);

        for err in [
            UiError::Http { status: 500 },
            UiError::Decode("eof".into()),
            UiError::Network("offline".into()),
        ] {
            assert_eq!(err.toggle_alert(&labels), labels.network_failed_alert);
        }
    }

    #[test]
    fn test_acceptance_alert_has_no_english_detail() {
        let labels = Labels::default();
        assert_eq!(
            UiError::Http { status: 500 }.acceptance_alert(&labels),
            "Не удалось сохранить результаты приёмки: ошибка сервера, код 500"
        );
        assert_eq!(
            UiError::Rejected { status: "error".into() }.acceptance_alert(&labels),
            "Не удалось сохранить результаты приёмки: сервер отклонил изменения"
        );
        for err in [
            UiError::Decode("expected value at line 1".into()),
            UiError::Network("TypeError: Failed to fetch".into()),
            UiError::Dom("FormData".into()),
        ] {
            let alert = err.acceptance_alert(&labels);
            assert!(!alert.chars().any(|c| c.is_ascii_alphabetic()), "{alert}");
        }
    }

    #[test]
    fn test_decode_from_serde() {
        let err: UiError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, UiError::Decode(_)));
    }
}
