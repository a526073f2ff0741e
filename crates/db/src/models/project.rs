//! Row model for the `projects` table.

use planboard_core::project::Project;
use planboard_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRow {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub start_date: Timestamp,
    pub target_end_date: Timestamp,
    pub actual_end_date: Option<Timestamp>,
    pub created_on: Timestamp,
    pub created_by: DbId,
    pub modified_on: Timestamp,
    pub modified_by: DbId,
    pub version: i64,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: row.id,
            name: row.name,
            description: row.description,
            start_date: row.start_date,
            target_end_date: row.target_end_date,
            actual_end_date: row.actual_end_date,
            created_on: row.created_on,
            created_by: row.created_by,
            modified_on: row.modified_on,
            modified_by: row.modified_by,
            version: row.version,
        }
    }
}

/// Columns read back by `INSERT ... RETURNING`.
#[derive(Debug, Clone, FromRow)]
pub struct InsertedProject {
    pub id: DbId,
    pub created_on: Timestamp,
    pub modified_on: Timestamp,
    pub version: i64,
}
