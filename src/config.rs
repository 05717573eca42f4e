//! Page Configuration
//!
//! Selectors, endpoints, labels and timings the handlers bind to.
//! Defaults match the deals list template; the server may override any field
//! through a JSON bootstrap element.

use serde::Deserialize;

use crate::models::DealId;

/// Id of the optional `<script type="application/json">` holding overrides
pub const CONFIG_ELEMENT_ID: &str = "deals-ui-config";

/// Placeholder substituted with the deal id in endpoint templates
const ID_PLACEHOLDER: &str = "{id}";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub status_toggles: Vec<ToggleFamily>,
    pub countdown: CountdownConfig,
    pub acceptance: AcceptanceConfig,
    pub downloads: DownloadConfig,
    pub labels: Labels,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            status_toggles: vec![
                ToggleFamily::new(".delivery-checkbox", "/mark-delivered/{id}"),
                ToggleFamily::new(".client-arrived-checkbox", "/mark-arrived/{id}"),
            ],
            countdown: CountdownConfig::default(),
            acceptance: AcceptanceConfig::default(),
            downloads: DownloadConfig::default(),
            labels: Labels::default(),
        }
    }
}

impl PageConfig {
    /// Parse bootstrap JSON; missing fields fall back to defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw)
    }
}

/// A group of checkboxes confirming one kind of status change
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ToggleFamily {
    pub selector: String,
    pub endpoint: String,
}

impl ToggleFamily {
    pub fn new(selector: &str, endpoint: &str) -> Self {
        Self {
            selector: selector.to_string(),
            endpoint: endpoint.to_string(),
        }
    }

    pub fn url_for(&self, id: &DealId) -> String {
        expand_endpoint(&self.endpoint, id)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CountdownConfig {
    pub timer_selector: String,
    pub header_id: String,
    pub cell_selector: String,
    pub hidden_class: String,
    pub expired_class: String,
    pub storage_key: String,
    pub tick_ms: u32,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            timer_selector: ".countdown-timer".into(),
            header_id: "timer-header".into(),
            cell_selector: ".timer-cell".into(),
            hidden_class: "hidden".into(),
            expired_class: "text-danger".into(),
            storage_key: "timerColumnHidden".into(),
            tick_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AcceptanceConfig {
    pub open_selector: String,
    pub modal_id: String,
    pub deal_id_field: String,
    pub form_id: String,
    pub signed_act_input: String,
    pub defect_list_input: String,
    pub save_button_id: String,
    pub signed_group: String,
    pub defects_group: String,
    pub status_endpoint: String,
    pub upload_endpoint: String,
}

impl Default for AcceptanceConfig {
    fn default() -> Self {
        Self {
            open_selector: ".open-acceptance-btn".into(),
            modal_id: "acceptanceModal".into(),
            deal_id_field: "modal-deal-id".into(),
            form_id: "acceptance-form".into(),
            signed_act_input: "signed_act".into(),
            defect_list_input: "defect_list".into(),
            save_button_id: "save-acceptance-results".into(),
            signed_group: "is_signed".into(),
            defects_group: "has_defects".into(),
            status_endpoint: "/process-acceptance/{id}".into(),
            upload_endpoint: "/upload-final-docs/{id}".into(),
        }
    }
}

impl AcceptanceConfig {
    pub fn status_url(&self, id: &DealId) -> String {
        expand_endpoint(&self.status_endpoint, id)
    }

    pub fn upload_url(&self, id: &DealId) -> String {
        expand_endpoint(&self.upload_endpoint, id)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DownloadConfig {
    pub button_selectors: Vec<String>,
    pub refresh_delay_ms: u32,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            button_selectors: vec![
                ".download-acceptance-act-btn".into(),
                ".download-unilateral-act-btn".into(),
            ],
            refresh_delay_ms: 2000,
        }
    }
}

/// User-facing text (the page is Russian-language)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub expired: String,
    pub day_suffix: String,
    pub save_failed_alert: String,
    pub network_failed_alert: String,
    pub incomplete_selection_alert: String,
    pub acceptance_failed_alert: String,
    pub rejected_reason: String,
    /// Followed by the HTTP status code
    pub server_error_reason: String,
    pub bad_reply_reason: String,
    pub network_reason: String,
    pub page_error_reason: String,
    pub saving: String,
    pub downloading: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            expired: "Время вышло".into(),
            day_suffix: "д".into(),
            save_failed_alert: "Произошла ошибка при сохранении. Попробуйте снова.".into(),
            network_failed_alert: "Произошла сетевая ошибка.".into(),
            incomplete_selection_alert:
                "Пожалуйста, укажите, подписан ли акт и есть ли замечания.".into(),
            acceptance_failed_alert: "Не удалось сохранить результаты приёмки".into(),
            rejected_reason: "сервер отклонил изменения".into(),
            server_error_reason: "ошибка сервера, код".into(),
            bad_reply_reason: "некорректный ответ сервера".into(),
            network_reason: "сетевая ошибка".into(),
            page_error_reason: "ошибка на странице".into(),
            saving: "Сохранение...".into(),
            downloading: "Загрузка...".into(),
        }
    }
}

fn expand_endpoint(template: &str, id: &DealId) -> String {
    template.replace(ID_PLACEHOLDER, &id.path_segment())
}
