pub mod health;
pub mod jobs;
pub mod workflow;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /workflow/statuses                         list statuses with lookups (GET)
/// /workflow/timeline                         list timeline steps (GET)
/// /workflow/statuses/{status}/progress       classified timeline (GET)
///
/// /jobs/overview                             dashboard counts + job rows (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/workflow", workflow::router())
        .nest("/jobs", jobs::router())
}
