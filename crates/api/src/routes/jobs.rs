//! Route definitions for the `/jobs` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::jobs;
use crate::state::AppState;

/// Routes mounted at `/jobs`.
///
/// ```text
/// POST   /overview        -> job_overview
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/overview", post(jobs::job_overview))
}
