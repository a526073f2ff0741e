//! Single-key response envelopes for the REST adapter.
//!
//! Every body is namespaced under exactly one key: `project`, `message`
//! or `error`.

use serde::Serialize;

/// `{ "project": T }` envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(ProjectResponse { project }))
/// ```
#[derive(Debug, Serialize)]
pub struct ProjectResponse<T: Serialize> {
    pub project: T,
}

/// `{ "message": "..." }` envelope for operations with no payload.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// `{ "error": ... }` envelope. The payload is a string for most failures
/// and a field-to-reason object for validation failures.
#[derive(Debug, Serialize)]
pub struct ErrorResponse<E: Serialize> {
    pub error: E,
}
