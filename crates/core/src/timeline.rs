//! The 11-step job progress timeline.
//!
//! The timeline is finer grained than [`JobStatus`](crate::job_status::JobStatus):
//! a status only tells us which step is current, and every other step is
//! classified relative to it.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::StepIndex;

// ---------------------------------------------------------------------------
// Timeline steps
// ---------------------------------------------------------------------------

/// One phase of the job progress timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TimelineStep {
    PreAlert,
    Docs,
    Verification,
    Entry,
    Checklist,
    Approval,
    Customs,
    Clearance,
    Delivery,
    Billing,
    Closed,
}

/// Total number of steps in the timeline.
pub const TOTAL_STEPS: usize = 11;

impl TimelineStep {
    /// Every step in timeline order.
    pub const ALL: [TimelineStep; TOTAL_STEPS] = [
        Self::PreAlert,
        Self::Docs,
        Self::Verification,
        Self::Entry,
        Self::Checklist,
        Self::Approval,
        Self::Customs,
        Self::Clearance,
        Self::Delivery,
        Self::Billing,
        Self::Closed,
    ];

    /// Zero-based position of this step.
    pub fn index(self) -> StepIndex {
        self as StepIndex
    }

    /// Display name of the step.
    pub fn name(self) -> &'static str {
        match self {
            Self::PreAlert => "Pre-Alert",
            Self::Docs => "Docs",
            Self::Verification => "Verification",
            Self::Entry => "Entry",
            Self::Checklist => "Checklist",
            Self::Approval => "Approval",
            Self::Customs => "Customs",
            Self::Clearance => "Clearance",
            Self::Delivery => "Delivery",
            Self::Billing => "Billing",
            Self::Closed => "Closed",
        }
    }
}

// ---------------------------------------------------------------------------
// Step classification
// ---------------------------------------------------------------------------

/// Visual state of a single timeline step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StepState {
    Completed,
    Current,
    Pending,
}

/// Classify the step at `timeline_index` relative to the job's current step.
pub fn classify_step(timeline_index: StepIndex, current_step_index: StepIndex) -> StepState {
    use std::cmp::Ordering;

    match timeline_index.cmp(&current_step_index) {
        Ordering::Less => StepState::Completed,
        Ordering::Equal => StepState::Current,
        Ordering::Greater => StepState::Pending,
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// A classified timeline step, ready for the progress bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub index: StepIndex,
    pub step: TimelineStep,
    pub name: &'static str,
    pub state: StepState,
}

/// Classify every timeline step against `current_step_index`.
pub fn render_timeline(current_step_index: StepIndex) -> Vec<TimelineEntry> {
    TimelineStep::ALL
        .iter()
        .map(|&step| TimelineEntry {
            index: step.index(),
            step,
            name: step.name(),
            state: classify_step(step.index(), current_step_index),
        })
        .collect()
}

/// "N of 11 steps complete" summary for a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressSummary {
    pub current_step: StepIndex,
    pub completed_steps: usize,
    pub total_steps: usize,
}

impl ProgressSummary {
    pub fn for_step(current_step_index: StepIndex) -> Self {
        Self {
            current_step: current_step_index,
            completed_steps: current_step_index.min(TOTAL_STEPS),
            total_steps: TOTAL_STEPS,
        }
    }
}
