use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// The service keeps no job data of its own; records arrive in request bodies.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}
