//! Handlers for the `/jobs` resource.
//!
//! The service does not store jobs. The portal posts the records it fetched
//! from the job data source and gets back the dashboard counts and the
//! table rows with every status lookup already applied.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use brokerage_core::job::{ChecklistProgress, Job, JobFilter, StatusCounts};
use brokerage_core::job_status::JobStatus;
use brokerage_core::status_field::StatusField;
use brokerage_core::timeline::ProgressSummary;
use brokerage_core::types::{Date, StepIndex};

use crate::error::{AppError, AppResult};
use crate::handlers::workflow::UNKNOWN_STATUS_LABEL;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `POST /jobs/overview`.
#[derive(Debug, Default, Deserialize)]
pub struct OverviewQuery {
    /// Free-text search over job id, job number, importer and port.
    pub q: Option<String>,
    /// Restrict rows to one status (wire form, e.g. `docs-pending`).
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OverviewRequest {
    pub jobs: Vec<Job>,
}

/// A job table row.
#[derive(Debug, Serialize)]
pub struct JobRow {
    pub id: String,
    pub importer: String,
    pub port: String,
    pub status: StatusField,
    pub label: &'static str,
    pub badge_class: &'static str,
    pub step_index: StepIndex,
    pub progress: ProgressSummary,
    pub eta: Option<Date>,
    pub pending_action: String,
    pub needs_action: bool,
    pub has_missing_documents: bool,
    pub checklist: ChecklistProgress,
}

impl From<&Job> for JobRow {
    fn from(job: &Job) -> Self {
        let step_index = job.status.step_index();
        Self {
            id: job.display_id(),
            importer: job.importer.clone(),
            port: job.port.clone(),
            status: job.status.clone(),
            label: job.status.label().unwrap_or(UNKNOWN_STATUS_LABEL),
            badge_class: job.status.badge_class(),
            step_index,
            progress: ProgressSummary::for_step(step_index),
            eta: job.eta,
            pending_action: job.pending_action.clone(),
            needs_action: job.needs_action,
            has_missing_documents: job.has_missing_documents(),
            checklist: job.checklist_progress(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct JobOverview {
    /// Counts over every submitted job, ignoring the filter.
    pub counts: StatusCounts,
    /// Rows matching the filter, in submission order.
    pub jobs: Vec<JobRow>,
}

// ---------------------------------------------------------------------------
// Overview
// ---------------------------------------------------------------------------

/// POST /api/v1/jobs/overview
///
/// Build the dashboard status counts and the filtered job table for the
/// submitted records. Supports optional `q` and `status` query parameters.
pub async fn job_overview(
    State(state): State<AppState>,
    Query(params): Query<OverviewQuery>,
    Json(body): Json<OverviewRequest>,
) -> AppResult<Json<DataResponse<JobOverview>>> {
    let max_jobs = state.config.max_overview_jobs;
    if body.jobs.len() > max_jobs {
        return Err(AppError::BadRequest(format!(
            "Cannot build an overview for more than {max_jobs} jobs at once"
        )));
    }

    let status = params
        .status
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::parse::<JobStatus>)
        .transpose()?;
    let filter = JobFilter {
        query: params.q,
        status,
    };

    for job in body.jobs.iter().filter(|j| !j.status.is_known()) {
        tracing::warn!(
            job_id = %job.id,
            status = %job.status,
            "Unrecognized job status, defaulting to step 0"
        );
    }

    let counts = StatusCounts::tally(&body.jobs);
    let jobs: Vec<JobRow> = filter
        .apply(&body.jobs)
        .into_iter()
        .map(JobRow::from)
        .collect();

    tracing::debug!(
        submitted = body.jobs.len(),
        matched = jobs.len(),
        unknown = counts.unknown,
        "Job overview built"
    );

    Ok(Json(DataResponse {
        data: JobOverview { counts, jobs },
    }))
}
