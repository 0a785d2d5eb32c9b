//! The `status` field of a job record as it arrives from the job data source.
//!
//! Upstream records are not guaranteed to carry one of the eight known
//! statuses. [`StatusField`] keeps the unrecognized value instead of failing
//! the whole record, and degrades to step 0 with no label.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::job_status::JobStatus;
use crate::types::StepIndex;

/// Badge class used when the status is not recognized.
pub const UNKNOWN_BADGE_CLASS: &str = "status-unknown";

/// A deserialized status value: either a known [`JobStatus`] or the raw
/// string that failed to match one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StatusField {
    Known(JobStatus),
    Unknown(String),
}

impl StatusField {
    /// Classify a raw status string.
    pub fn from_raw(raw: &str) -> Self {
        match raw.parse::<JobStatus>() {
            Ok(status) => Self::Known(status),
            Err(_) => Self::Unknown(raw.to_string()),
        }
    }

    pub fn known(&self) -> Option<JobStatus> {
        match self {
            Self::Known(status) => Some(*status),
            Self::Unknown(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Raw wire value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(status) => status.as_str(),
            Self::Unknown(raw) => raw,
        }
    }

    /// Display label, or `None` when the caller should render a placeholder.
    pub fn label(&self) -> Option<&'static str> {
        self.known().map(JobStatus::label)
    }

    /// Timeline position; unrecognized statuses sit at step 0.
    pub fn step_index(&self) -> StepIndex {
        self.known().map(JobStatus::step_index).unwrap_or(0)
    }

    pub fn badge_class(&self) -> &'static str {
        self.known()
            .map(JobStatus::badge_class)
            .unwrap_or(UNKNOWN_BADGE_CLASS)
    }
}

impl From<JobStatus> for StatusField {
    fn from(status: JobStatus) -> Self {
        Self::Known(status)
    }
}

impl fmt::Display for StatusField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StatusField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StatusField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_raw(&raw))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_known_status_deserializes() {
        let field: StatusField = serde_json::from_str("\"cleared\"").unwrap();
        assert_eq!(field, StatusField::Known(JobStatus::Cleared));
        assert_eq!(field.label(), Some("Cleared"));
        assert_eq!(field.step_index(), 7);
        assert_eq!(field.badge_class(), "status-cleared");
    }

    #[test]
    fn test_unknown_status_is_captured() {
        let field: StatusField = serde_json::from_str("\"on-hold\"").unwrap();
        assert_matches!(&field, StatusField::Unknown(raw) if raw == "on-hold");
        assert!(!field.is_known());
        assert_eq!(field.label(), None);
        assert_eq!(field.step_index(), 0);
        assert_eq!(field.badge_class(), UNKNOWN_BADGE_CLASS);
    }

    #[test]
    fn test_near_miss_strings_fall_back_to_step_zero() {
        for raw in ["", "Delivered", "docs_pending", " cleared"] {
            let field = StatusField::from_raw(raw);
            assert!(!field.is_known(), "{raw:?} should not match");
            assert_eq!(field.step_index(), 0);
        }
        assert_eq!(StatusField::from_raw("approval-pending").step_index(), 5);
    }

    #[test]
    fn test_non_string_status_is_rejected() {
        assert!(serde_json::from_str::<StatusField>("42").is_err());
        assert!(serde_json::from_str::<StatusField>("null").is_err());
    }

    #[test]
    fn test_serializes_back_to_raw_value() {
        let unknown = StatusField::from_raw("on-hold");
        assert_eq!(serde_json::to_string(&unknown).unwrap(), "\"on-hold\"");

        let known = StatusField::from(JobStatus::DocsPending);
        assert_eq!(serde_json::to_string(&known).unwrap(), "\"docs-pending\"");
    }
}
