//! Shipping documents attached to a job (bill of lading, invoice, ...).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Date, RecordId};
use crate::wire::{lenient_date, null_as_default};

/// Intake state of a single document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum DocumentStatus {
    Uploaded,
    Missing,
    Rejected,
}

impl DocumentStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Uploaded => "Uploaded",
            Self::Missing => "Missing",
            Self::Rejected => "Rejected",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Uploaded => "status-cleared",
            Self::Missing => "status-missing",
            Self::Rejected => "status-rejected",
        }
    }
}

/// Who supplied the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum DocumentSource {
    Customer,
    Ops,
}

impl DocumentSource {
    pub fn label(self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::Ops => "Ops",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: RecordId,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub status: DocumentStatus,
    pub source: DocumentSource,
    /// Upload day. The data source sends a full timestamp; only the date is kept.
    #[serde(
        default,
        deserialize_with = "lenient_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub uploaded_at: Option<Date>,
}

/// Whether any document is still outstanding.
pub fn has_missing_documents(documents: &[Document]) -> bool {
    documents
        .iter()
        .any(|d| d.status == DocumentStatus::Missing)
}
