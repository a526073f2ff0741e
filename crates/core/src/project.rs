//! Project record model, creation input, merge-patch and validation rules.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};
use crate::validation::{FieldErrors, Validator};

/// Maximum length of a project name, in bytes.
pub const NAME_MAX_BYTES: usize = 500;

/// Maximum length of a project description, in bytes.
pub const DESCRIPTION_MAX_BYTES: usize = 1000;

/// Entity label used in not-found and conflict errors.
pub const ENTITY: &str = "Project";

/// A persisted project record.
///
/// `id`, `created_on`, `modified_on` and `version` are assigned by the
/// repository; callers never set them directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub start_date: Timestamp,
    pub target_end_date: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_end_date: Option<Timestamp>,
    pub created_on: Timestamp,
    pub created_by: DbId,
    pub modified_on: Timestamp,
    pub modified_by: DbId,
    pub version: i64,
}

impl Project {
    /// Check the persisted-state rules against this record.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        validate_fields(&self.name, &self.description)
    }
}

/// Input for creating a project.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub start_date: Timestamp,
    pub target_end_date: Timestamp,
    pub created_by: DbId,
    pub modified_by: DbId,
}

impl NewProject {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        validate_fields(&self.name, &self.description)
    }
}

/// Partial update of a project.
///
/// `None` means "not supplied, keep the stored value"; `Some` overwrites it,
/// including `Some(String::new())` for an explicitly emptied field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<Timestamp>,
    pub target_end_date: Option<Timestamp>,
    pub actual_end_date: Option<Timestamp>,
}

impl ProjectPatch {
    /// True when no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.start_date.is_none()
            && self.target_end_date.is_none()
            && self.actual_end_date.is_none()
    }

    /// Overwrite every supplied field on `project`, leaving the rest intact.
    pub fn apply(self, project: &mut Project) {
        if let Some(name) = self.name {
            project.name = name;
        }
        if let Some(description) = self.description {
            project.description = description;
        }
        if let Some(start_date) = self.start_date {
            project.start_date = start_date;
        }
        if let Some(target_end_date) = self.target_end_date {
            project.target_end_date = target_end_date;
        }
        if let Some(actual_end_date) = self.actual_end_date {
            project.actual_end_date = Some(actual_end_date);
        }
    }
}

/// Name must be present and at most [`NAME_MAX_BYTES`]; description at most
/// [`DESCRIPTION_MAX_BYTES`].
pub fn validate_fields(name: &str, description: &str) -> Result<(), FieldErrors> {
    let mut v = Validator::new();
    v.check(!name.is_empty(), "name", "must be provided");
    v.check(
        name.len() <= NAME_MAX_BYTES,
        "name",
        "must not be more than 500 bytes long",
    );
    v.check(
        description.len() <= DESCRIPTION_MAX_BYTES,
        "description",
        "must not be more than 1000 bytes long",
    );
    v.finish()
}
