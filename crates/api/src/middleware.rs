//! Request-level middleware for the REST adapter.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::error::InternalErrorDetail;
use crate::state::AppState;

/// Log the detail of any internal failure through the adapter's telemetry
/// handle, then strip it from the outgoing response.
pub async fn report_internal_errors(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let operation = format!("{} {}", request.method(), request.uri());
    let mut response = next.run(request).await;
    if let Some(InternalErrorDetail(detail)) =
        response.extensions_mut().remove::<InternalErrorDetail>()
    {
        state.telemetry.internal_error(&operation, &detail);
    }
    response
}
