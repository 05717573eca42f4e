//! Frontend Models
//!
//! Data structures exchanged with the deals endpoints.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Value of `status` in a reply that confirms the change
pub const STATUS_SUCCESS: &str = "success";

/// Everything but the unreserved characters of RFC 3986
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Identifier of one deal row, as rendered in `data-deal-id`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DealId(String);

impl DealId {
    /// Returns `None` for a missing or blank attribute value.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The id encoded for use as one URL path segment
    pub fn path_segment(&self) -> String {
        utf8_percent_encode(&self.0, PATH_SEGMENT).to_string()
    }
}

impl fmt::Display for DealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `{status: ...}` reply of the status endpoints
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatusReply {
    pub status: String,
}

impl StatusReply {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

/// JSON body of the acceptance status update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AcceptanceReport {
    pub is_signed: bool,
    pub has_defects: bool,
}

/// File inputs of the acceptance form, named as the upload endpoint expects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentField {
    SignedAct,
    DefectList,
}

impl AttachmentField {
    pub fn form_name(self) -> &'static str {
        match self {
            AttachmentField::SignedAct => "signed_act",
            AttachmentField::DefectList => "defect_list",
        }
    }
}

/// What the acceptance form holds at the moment save is pressed
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptanceDraft<F> {
    pub deal_id: Option<DealId>,
    pub is_signed: Option<bool>,
    pub has_defects: Option<bool>,
    pub signed_act: Option<F>,
    pub defect_list: Option<F>,
}

impl<F> Default for AcceptanceDraft<F> {
    fn default() -> Self {
        Self {
            deal_id: None,
            is_signed: None,
            has_defects: None,
            signed_act: None,
            defect_list: None,
        }
    }
}

impl<F> AcceptanceDraft<F> {
    /// Both answers, or `None` while either is unselected
    pub fn report(&self) -> Option<AcceptanceReport> {
        Some(AcceptanceReport {
            is_signed: self.is_signed?,
            has_defects: self.has_defects?,
        })
    }

    /// Attached files in upload order
    pub fn into_attachments(self) -> Vec<(AttachmentField, F)> {
        let mut parts = Vec::new();
        if let Some(file) = self.signed_act {
            parts.push((AttachmentField::SignedAct, file));
        }
        if let Some(file) = self.defect_list {
            parts.push((AttachmentField::DefectList, file));
        }
        parts
    }
}

/// Parse a radio value rendered as `true`/`false`
pub fn parse_answer(raw: &str) -> Option<bool> {
    match raw.trim() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
