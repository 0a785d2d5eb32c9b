//! Job lifecycle status and its display lookups.
//!
//! A job moves through eight statuses from the pre-alert to delivery. Each
//! status has a fixed label, a position on the progress timeline (see
//! [`crate::timeline`]), a badge class for the job table and a tone for the
//! dashboard status cards.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::types::StepIndex;

// ---------------------------------------------------------------------------
// Job status
// ---------------------------------------------------------------------------

/// Lifecycle stage of an import job.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum JobStatus {
    PreAlert,
    Created,
    DocsPending,
    VerificationPending,
    ApprovalPending,
    CustomsSubmitted,
    Cleared,
    Delivered,
}

impl JobStatus {
    /// Every status in lifecycle order.
    pub const ALL: [JobStatus; 8] = [
        Self::PreAlert,
        Self::Created,
        Self::DocsPending,
        Self::VerificationPending,
        Self::ApprovalPending,
        Self::CustomsSubmitted,
        Self::Cleared,
        Self::Delivered,
    ];

    /// Wire representation, as sent by the job data source.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PreAlert => "pre-alert",
            Self::Created => "created",
            Self::DocsPending => "docs-pending",
            Self::VerificationPending => "verification-pending",
            Self::ApprovalPending => "approval-pending",
            Self::CustomsSubmitted => "customs-submitted",
            Self::Cleared => "cleared",
            Self::Delivered => "delivered",
        }
    }

    /// Human-readable label shown on badges and dashboard cards.
    pub fn label(self) -> &'static str {
        match self {
            Self::PreAlert => "Pre-Alert Received",
            Self::Created => "Job Created",
            Self::DocsPending => "Documents Pending",
            Self::VerificationPending => "Verification Pending",
            Self::ApprovalPending => "Approval Pending",
            Self::CustomsSubmitted => "Customs Submitted",
            Self::Cleared => "Cleared",
            Self::Delivered => "Delivered",
        }
    }

    /// Position of this status on the 11-step progress timeline.
    ///
    /// `Created` and `DocsPending` share step 1, and no status lands on
    /// Entry (3), Checklist (4), Billing (9) or Closed (10).
    pub fn step_index(self) -> StepIndex {
        match self {
            Self::PreAlert => 0,
            Self::Created => 1,
            Self::DocsPending => 1,
            Self::VerificationPending => 2,
            Self::ApprovalPending => 5,
            Self::CustomsSubmitted => 6,
            Self::Cleared => 7,
            Self::Delivered => 8,
        }
    }

    /// CSS class for the status badge in the job table.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::PreAlert => "status-prealert",
            Self::Created => "status-created",
            Self::DocsPending | Self::VerificationPending | Self::ApprovalPending => {
                "status-pending"
            }
            Self::CustomsSubmitted => "status-submitted",
            Self::Cleared => "status-cleared",
            Self::Delivered => "status-delivered",
        }
    }

    /// Tone of the dashboard status card for this status.
    pub fn card_variant(self) -> CardVariant {
        match self {
            Self::PreAlert => CardVariant::Default,
            Self::Created => CardVariant::Info,
            Self::DocsPending | Self::VerificationPending | Self::ApprovalPending => {
                CardVariant::Warning
            }
            Self::CustomsSubmitted => CardVariant::Purple,
            Self::Cleared | Self::Delivered => CardVariant::Success,
        }
    }
}

impl FromStr for JobStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(|s| s.as_str()).collect();
                CoreError::Validation(format!(
                    "Invalid job status '{s}'. Must be one of: {}",
                    valid.join(", ")
                ))
            })
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Dashboard card variant
// ---------------------------------------------------------------------------

/// Colour tone of a dashboard status card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardVariant {
    Default,
    Info,
    Warning,
    Purple,
    Success,
}
