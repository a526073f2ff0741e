//! Conversions between domain values and wire messages.

use planboard_core::project::Project;
use planboard_core::types::Timestamp;
use tonic::Status;

use super::messages;

pub fn to_wire_timestamp(ts: Timestamp) -> prost_types::Timestamp {
    prost_types::Timestamp {
        seconds: ts.timestamp(),
        // Always below 2e9, so it fits.
        nanos: ts.timestamp_subsec_nanos() as i32,
    }
}

/// Decode a wire timestamp; out-of-range values are a malformed request.
pub fn from_wire_timestamp(field: &str, ts: prost_types::Timestamp) -> Result<Timestamp, Status> {
    u32::try_from(ts.nanos)
        .ok()
        .and_then(|nanos| chrono::DateTime::<chrono::Utc>::from_timestamp(ts.seconds, nanos))
        .ok_or_else(|| Status::invalid_argument(format!("{field} is not a valid timestamp")))
}

/// Decode a timestamp the request must carry.
pub fn required_timestamp(
    field: &str,
    ts: Option<prost_types::Timestamp>,
) -> Result<Timestamp, Status> {
    match ts {
        Some(ts) => from_wire_timestamp(field, ts),
        None => Err(Status::invalid_argument(format!("{field} must be provided"))),
    }
}

/// Decode a timestamp that may be absent.
pub fn optional_timestamp(
    field: &str,
    ts: Option<prost_types::Timestamp>,
) -> Result<Option<Timestamp>, Status> {
    ts.map(|ts| from_wire_timestamp(field, ts)).transpose()
}

impl From<Project> for messages::Project {
    fn from(p: Project) -> Self {
        messages::Project {
            id: p.id,
            name: p.name,
            description: p.description,
            start_date: Some(to_wire_timestamp(p.start_date)),
            target_end_date: Some(to_wire_timestamp(p.target_end_date)),
            actual_end_date: p.actual_end_date.map(to_wire_timestamp),
            created_on: Some(to_wire_timestamp(p.created_on)),
            created_by: p.created_by,
            modified_on: Some(to_wire_timestamp(p.modified_on)),
            modified_by: p.modified_by,
            version: p.version,
        }
    }
}
