pub mod health;
pub mod project;

use axum::http::Method;
use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects          list (501), create
/// /projects/{id}     get, update (PATCH), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(project::router())
}

/// Fallback for unknown paths.
pub async fn not_found() -> AppError {
    AppError::NotFound
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed(method: Method) -> AppError {
    AppError::MethodNotAllowed(method)
}
