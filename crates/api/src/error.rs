use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use planboard_core::error::CoreError;
use serde::Serialize;

use crate::response::ErrorResponse;

/// Message for absent records and invalid identifiers.
pub const NOT_FOUND_MESSAGE: &str = "the requested resource could not be found";

/// Retry hint returned on a lost optimistic-concurrency race.
pub const EDIT_CONFLICT_MESSAGE: &str =
    "unable to update the record due to an edit conflict, please try again";

/// Generic message for every internal failure.
pub const INTERNAL_MESSAGE: &str =
    "the server encountered a problem and could not process your request";

/// Full detail of an internal failure, attached to the response extensions
/// so the reporting middleware can log it. Never serialized.
#[derive(Debug, Clone)]
pub struct InternalErrorDetail(pub String);

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce `{"error": ...}` envelopes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `planboard_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A malformed request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Unparsable or non-positive identifier, or unknown route.
    #[error("Not found")]
    NotFound,

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(Method),

    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

fn envelope<E: Serialize>(status: StatusCode, error: E) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}

fn internal(detail: String) -> Response {
    let mut response = envelope(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE);
    response.extensions_mut().insert(InternalErrorDetail(detail));
    response
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => envelope(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE),
                CoreError::FailedValidation(fields) => {
                    envelope(StatusCode::UNPROCESSABLE_ENTITY, fields)
                }
                CoreError::EditConflict { .. } => {
                    envelope(StatusCode::CONFLICT, EDIT_CONFLICT_MESSAGE)
                }
                // The caller is gone; emit nothing beyond a bare status.
                CoreError::Canceled => StatusCode::REQUEST_TIMEOUT.into_response(),
                CoreError::Internal(msg) => internal(msg),
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => envelope(StatusCode::BAD_REQUEST, msg),
            AppError::NotFound => envelope(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE),
            AppError::MethodNotAllowed(method) => envelope(
                StatusCode::METHOD_NOT_ALLOWED,
                format!("the {method} method is not supported for this resource"),
            ),
            AppError::NotImplemented(what) => envelope(StatusCode::NOT_IMPLEMENTED, what),
        }
    }
}
