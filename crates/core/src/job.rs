//! Import job records and the list/dashboard computations over them.
//!
//! [`Job`] mirrors the record served by the job data source (camelCase JSON).
//! Its `status` is a [`StatusField`] so a record with an unrecognized status
//! still deserializes.

use serde::{Deserialize, Serialize};

use crate::document::{has_missing_documents, Document};
use crate::job_status::{CardVariant, JobStatus};
use crate::status_field::StatusField;
use crate::types::{Date, RecordId};
use crate::wire::{lenient_date, null_as_default};

// ---------------------------------------------------------------------------
// Job record
// ---------------------------------------------------------------------------

/// Job identifier: a database id or a reference such as `JOB-2024-001`.
pub type JobId = RecordId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub id: String,
    pub label: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    #[serde(default)]
    pub job_number: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub importer: String,
    #[serde(deserialize_with = "null_as_default")]
    pub port: String,
    pub status: StatusField,
    /// Free-form upstream column; text that is not a date reads as `None`.
    #[serde(default, deserialize_with = "lenient_date")]
    pub eta: Option<Date>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pending_action: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub needs_action: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub container_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bl_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub origin: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub destination: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duty_amount: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub invoice_amount: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub documents: Vec<Document>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub checklist_items: Vec<ChecklistItem>,
}

impl Job {
    /// Identifier shown in tables: the job number when present, otherwise the id.
    pub fn display_id(&self) -> String {
        match self.job_number.as_deref() {
            Some(number) if !number.is_empty() => number.to_string(),
            _ => self.id.to_string(),
        }
    }

    pub fn has_missing_documents(&self) -> bool {
        has_missing_documents(&self.documents)
    }

    pub fn checklist_progress(&self) -> ChecklistProgress {
        ChecklistProgress::of(&self.checklist_items)
    }
}

// ---------------------------------------------------------------------------
// Checklist progress
// ---------------------------------------------------------------------------

/// "N / M Complete" for a job's pre-submission checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecklistProgress {
    pub completed: usize,
    pub total: usize,
    pub is_complete: bool,
}

impl ChecklistProgress {
    pub fn of(items: &[ChecklistItem]) -> Self {
        let completed = items.iter().filter(|i| i.checked).count();
        let total = items.len();
        Self {
            completed,
            total,
            is_complete: completed == total,
        }
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Job list filter: free-text search plus an optional status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    /// Case-insensitive substring matched against id, job number, importer
    /// and port.
    pub query: Option<String>,
    pub status: Option<JobStatus>,
}

impl JobFilter {
    pub fn matches(&self, job: &Job) -> bool {
        self.matches_query(job) && self.matches_status(job)
    }

    fn matches_query(&self, job: &Job) -> bool {
        let Some(query) = self.query.as_deref().map(str::trim) else {
            return true;
        };
        if query.is_empty() {
            return true;
        }

        let needle = query.to_lowercase();
        let id = job.id.to_string();
        let matched = [
            Some(id.as_str()),
            job.job_number.as_deref(),
            Some(job.importer.as_str()),
            Some(job.port.as_str()),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle));
        matched
    }

    fn matches_status(&self, job: &Job) -> bool {
        match self.status {
            None => true,
            Some(wanted) => job.status.known() == Some(wanted),
        }
    }

    pub fn apply<'a>(&self, jobs: &'a [Job]) -> Vec<&'a Job> {
        jobs.iter().filter(|job| self.matches(job)).collect()
    }
}

// ---------------------------------------------------------------------------
// Dashboard counts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: JobStatus,
    pub label: &'static str,
    pub card_variant: CardVariant,
    pub count: usize,
}

/// Number of jobs per status, one entry for every status in lifecycle order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub by_status: Vec<StatusCount>,
    /// Jobs whose status did not match any known value.
    pub unknown: usize,
    pub total: usize,
}

impl StatusCounts {
    pub fn tally(jobs: &[Job]) -> Self {
        let mut by_status: Vec<StatusCount> = JobStatus::ALL
            .iter()
            .map(|&status| StatusCount {
                status,
                label: status.label(),
                card_variant: status.card_variant(),
                count: 0,
            })
            .collect();
        let mut unknown = 0;

        for job in jobs {
            match job.status.known() {
                Some(status) => {
                    if let Some(entry) = by_status.iter_mut().find(|e| e.status == status) {
                        entry.count += 1;
                    }
                }
                None => unknown += 1,
            }
        }

        Self {
            by_status,
            unknown,
            total: jobs.len(),
        }
    }

    pub fn count(&self, status: JobStatus) -> usize {
        self.by_status
            .iter()
            .find(|e| e.status == status)
            .map_or(0, |e| e.count)
    }
}
