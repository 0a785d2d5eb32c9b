use std::fmt;

use serde::{Deserialize, Serialize};

/// Calendar dates on job records (ETA, upload date) carry no time component.
pub type Date = chrono::NaiveDate;

/// Zero-based position in the 11-step progress timeline.
pub type StepIndex = usize;

/// Identifier of an upstream record. The data source sends either a
/// database id or a string reference such as `JOB-2024-001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}
