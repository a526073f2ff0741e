use crate::types::DbId;
use crate::validation::FieldErrors;

/// Controller-level error vocabulary shared by every transport adapter.
///
/// Each adapter owns one mapping table from these variants to its own
/// status codes; the controller and repository never see transport types.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    FailedValidation(FieldErrors),

    /// The stored version moved (or the row vanished) between read and write.
    #[error("Edit conflict: {entity} with id {id}")]
    EditConflict { entity: &'static str, id: DbId },

    #[error("Request canceled")]
    Canceled,

    #[error("Internal error: {0}")]
    Internal(String),
}
