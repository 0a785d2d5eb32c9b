//! Handlers for the workflow status model.
//!
//! These expose the status lookups and the classified progress timeline so
//! the portal renders badges and progress bars from a single source.

use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use brokerage_core::job_status::{CardVariant, JobStatus};
use brokerage_core::status_field::StatusField;
use brokerage_core::timeline::{
    render_timeline, ProgressSummary, TimelineEntry, TimelineStep,
};
use brokerage_core::types::StepIndex;

use crate::response::DataResponse;

/// Label rendered when a status is not recognized.
pub const UNKNOWN_STATUS_LABEL: &str = "Unknown";

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// One row of the status lookup table.
#[derive(Debug, Serialize)]
pub struct StatusInfo {
    pub status: JobStatus,
    pub label: &'static str,
    pub step_index: StepIndex,
    pub badge_class: &'static str,
    pub card_variant: CardVariant,
}

#[derive(Debug, Serialize)]
pub struct TimelineStepInfo {
    pub index: StepIndex,
    pub step: TimelineStep,
    pub name: &'static str,
}

/// Classified timeline for a single status value.
#[derive(Debug, Serialize)]
pub struct StatusProgress {
    pub status: String,
    /// `None` when the status is not recognized.
    pub label: Option<&'static str>,
    pub recognized: bool,
    pub step_index: StepIndex,
    pub summary: ProgressSummary,
    pub timeline: Vec<TimelineEntry>,
}

impl StatusProgress {
    pub fn for_field(field: &StatusField) -> Self {
        let step_index = field.step_index();
        Self {
            status: field.as_str().to_string(),
            label: field.label(),
            recognized: field.is_known(),
            step_index,
            summary: ProgressSummary::for_step(step_index),
            timeline: render_timeline(step_index),
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/workflow/statuses
pub async fn list_statuses() -> Json<DataResponse<Vec<StatusInfo>>> {
    let data = JobStatus::ALL
        .iter()
        .map(|&status| StatusInfo {
            status,
            label: status.label(),
            step_index: status.step_index(),
            badge_class: status.badge_class(),
            card_variant: status.card_variant(),
        })
        .collect();

    Json(DataResponse { data })
}

/// GET /api/v1/workflow/timeline
pub async fn list_timeline_steps() -> Json<DataResponse<Vec<TimelineStepInfo>>> {
    let data = TimelineStep::ALL
        .iter()
        .map(|&step| TimelineStepInfo {
            index: step.index(),
            step,
            name: step.name(),
        })
        .collect();

    Json(DataResponse { data })
}

/// GET /api/v1/workflow/statuses/{status}/progress
///
/// Unrecognized statuses are not an error: they render at step 0 with no
/// label.
pub async fn get_status_progress(
    Path(status): Path<String>,
) -> Json<DataResponse<StatusProgress>> {
    let field = StatusField::from_raw(&status);

    if !field.is_known() {
        tracing::warn!(status = %status, "Unrecognized job status, defaulting to step 0");
    }

    Json(DataResponse {
        data: StatusProgress::for_field(&field),
    })
}
