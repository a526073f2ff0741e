use planboard_core::controller::ProjectController;

use crate::telemetry::Telemetry;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the controller holds its repository behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Project controller over the configured repository.
    pub controller: ProjectController,
    /// Observability handle for the REST adapter.
    pub telemetry: Telemetry,
}
