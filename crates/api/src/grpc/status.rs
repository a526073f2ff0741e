//! `CoreError` → gRPC status mapping.

use planboard_core::error::CoreError;
use tonic::Status;

use crate::error::{EDIT_CONFLICT_MESSAGE, INTERNAL_MESSAGE, NOT_FOUND_MESSAGE};
use crate::telemetry::Telemetry;

pub fn not_found() -> Status {
    Status::not_found(NOT_FOUND_MESSAGE)
}

/// Translate a controller failure for the RPC `operation`.
///
/// Internal failures are logged in full through `telemetry` and reduced to a
/// generic message; cancellations carry no message of their own.
pub fn status_from_core(err: CoreError, telemetry: &Telemetry, operation: &str) -> Status {
    match err {
        CoreError::NotFound { .. } => not_found(),
        CoreError::FailedValidation(fields) => {
            let message = serde_json::to_string(&fields).unwrap_or_else(|_| fields.to_string());
            Status::invalid_argument(message)
        }
        CoreError::EditConflict { .. } => Status::already_exists(EDIT_CONFLICT_MESSAGE),
        CoreError::Canceled => {
            telemetry.canceled(operation);
            Status::cancelled("")
        }
        CoreError::Internal(detail) => {
            telemetry.internal_error(operation, &detail);
            Status::internal(INTERNAL_MESSAGE)
        }
    }
}

#[cfg(test)]
mod tests {
    use planboard_core::project::validate_fields;
    use tonic::Code;

    use super::*;

    fn map(err: CoreError) -> Status {
        status_from_core(err, &Telemetry::disabled(), "Test")
    }

    #[test]
    fn not_found_maps_to_not_found() {
        let status = map(CoreError::NotFound {
            entity: "Project",
            id: 9,
        });
        assert_eq!(status.code(), Code::NotFound);
        assert_eq!(status.message(), NOT_FOUND_MESSAGE);
    }

    #[test]
    fn validation_carries_field_map() {
        let fields = validate_fields("", &"d".repeat(1001)).unwrap_err();
        let status = map(CoreError::FailedValidation(fields));
        assert_eq!(status.code(), Code::InvalidArgument);

        let body: serde_json::Value = serde_json::from_str(status.message()).unwrap();
        assert_eq!(body["name"], "must be provided");
        assert_eq!(body["description"], "must not be more than 1000 bytes long");
    }

    #[test]
    fn edit_conflict_maps_to_already_exists() {
        let status = map(CoreError::EditConflict {
            entity: "Project",
            id: 1,
        });
        assert_eq!(status.code(), Code::AlreadyExists);
        assert_eq!(status.message(), EDIT_CONFLICT_MESSAGE);
    }

    #[test]
    fn canceled_has_no_message() {
        let status = map(CoreError::Canceled);
        assert_eq!(status.code(), Code::Cancelled);
        assert!(status.message().is_empty());
    }

    #[test]
    fn internal_detail_is_not_echoed() {
        let status = map(CoreError::Internal("password authentication failed".into()));
        assert_eq!(status.code(), Code::Internal);
        assert_eq!(status.message(), INTERNAL_MESSAGE);
    }
}
