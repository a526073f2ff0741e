//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Project routes.
///
/// ```text
/// GET    /projects        -> list (not implemented)
/// POST   /projects        -> create
/// GET    /projects/{id}   -> get_by_id
/// PATCH  /projects/{id}   -> update
/// DELETE /projects/{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(project::list).post(project::create))
        .route(
            "/projects/{id}",
            get(project::get_by_id)
                .patch(project::update)
                .delete(project::delete),
        )
}
