//! Route definitions for the workflow status model.

use axum::routing::get;
use axum::Router;

use crate::handlers::workflow;
use crate::state::AppState;

/// Routes mounted at `/workflow`.
///
/// ```text
/// GET    /statuses                     -> list_statuses
/// GET    /statuses/{status}/progress   -> get_status_progress
/// GET    /timeline                     -> list_timeline_steps
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/statuses", get(workflow::list_statuses))
        .route(
            "/statuses/{status}/progress",
            get(workflow::get_status_progress),
        )
        .route("/timeline", get(workflow::list_timeline_steps))
}
