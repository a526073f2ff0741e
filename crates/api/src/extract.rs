//! Strict JSON body extractor.
//!
//! Unlike `axum::Json`, [`StrictJson`] caps the body at [`MAX_BODY_BYTES`],
//! does not require a `Content-Type` header, and turns every decoding
//! failure into an [`AppError::BadRequest`] with a caller-readable message.
//! Unknown fields are rejected by `#[serde(deny_unknown_fields)]` on the
//! target type.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde_json::error::Category;

use crate::error::AppError;

/// Maximum accepted request body size, in bytes.
pub const MAX_BODY_BYTES: usize = 1_048_576;

/// JSON body decoded with the adapter's strict rules.
#[derive(Debug, Clone)]
pub struct StrictJson<T>(pub T);

impl<T, S> FromRequest<S> for StrictJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let bytes = axum::body::to_bytes(req.into_body(), MAX_BODY_BYTES)
            .await
            .map_err(|err| {
                if err.into_inner().is::<http_body_util::LengthLimitError>() {
                    AppError::BadRequest(format!(
                        "body must not be larger than {MAX_BODY_BYTES} bytes"
                    ))
                } else {
                    AppError::BadRequest("body could not be read".into())
                }
            })?;
        decode(&bytes).map(StrictJson)
    }
}

/// Decode one JSON value from `bytes`.
pub fn decode<T: DeserializeOwned>(bytes: &Bytes) -> Result<T, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::BadRequest("body must not be empty".into()));
    }
    serde_json::from_slice(bytes).map_err(|err| AppError::BadRequest(describe(&err)))
}

fn describe(err: &serde_json::Error) -> String {
    let message = err.to_string();
    let position = format!("at line {}, column {}", err.line(), err.column());
    match err.classify() {
        Category::Eof => "body contains badly-formed JSON".to_string(),
        Category::Syntax if message.starts_with("trailing characters") => {
            "body must only contain a single JSON value".to_string()
        }
        Category::Syntax => format!("body contains badly-formed JSON ({position})"),
        Category::Data => describe_data_error(&message, &position),
        Category::Io => "body could not be read".to_string(),
    }
}

fn describe_data_error(message: &str, position: &str) -> String {
    if let Some(rest) = message.strip_prefix("unknown field ") {
        let field = rest.split(',').next().unwrap_or(rest).replace('`', "\"");
        return format!("body contains unknown key {field}");
    }
    if let Some(rest) = message.strip_prefix("missing field ") {
        let field = rest.split(' ').next().unwrap_or(rest).replace('`', "\"");
        return format!("body is missing required key {field}");
    }
    if message.starts_with("invalid type") {
        return format!("body contains incorrect JSON type ({position})");
    }
    format!("body contains an invalid value ({position})")
}
