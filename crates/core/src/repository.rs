//! Repository capability consumed by the controller.
//!
//! Implementations: `planboard_db::repositories::PgProjectRepo` (PostgreSQL)
//! and [`crate::memory::InMemoryProjectRepo`].

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::project::{NewProject, Project};
use crate::types::{DbId, Timestamp};

/// Server-assigned columns refreshed by a successful version-guarded write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteStamp {
    pub version: i64,
    pub modified_on: Timestamp,
}

/// Store-level outcomes surfaced by a repository.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("the requested resource could not be found")]
    NotFound,

    /// Zero rows matched the version-guarded write. A vanished row and a
    /// version advanced by another writer look identical here.
    #[error("unable to update the record due to an edit conflict, please try again")]
    EditConflict,

    #[error("query canceled by the caller")]
    Canceled,

    #[error("store error: {0}")]
    Store(String),
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Insert a new record. The returned project carries the assigned id,
    /// creation timestamp and `version = 1`.
    async fn create(
        &self,
        input: &NewProject,
        cancel: &CancellationToken,
    ) -> Result<Project, RepoError>;

    /// Fetch a record. Ids below 1 are reported as [`RepoError::NotFound`]
    /// without touching the store.
    async fn get(&self, id: DbId, cancel: &CancellationToken) -> Result<Project, RepoError>;

    /// Conditional write guarded by `project.version`. Increments the stored
    /// version, refreshes `modified_on` and returns both.
    async fn update(
        &self,
        project: &Project,
        cancel: &CancellationToken,
    ) -> Result<WriteStamp, RepoError>;

    /// Hard-delete a record.
    async fn delete(&self, id: DbId, cancel: &CancellationToken) -> Result<(), RepoError>;

    /// Cheap reachability probe for health reporting.
    async fn health_check(&self) -> Result<(), RepoError>;
}
