//! Transport-agnostic project controller.
//!
//! Owns validation and the read-merge-write update cycle. Each method
//! translates repository outcomes into [`CoreError`] exactly once; nothing
//! here retries. The read and the conditional write in [`ProjectController::update`]
//! are not wrapped in a transaction: the version check at write time is the
//! only guard against a concurrent writer.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::error::CoreError;
use crate::project::{NewProject, Project, ProjectPatch, ENTITY};
use crate::repository::{ProjectRepository, RepoError};
use crate::types::DbId;

/// Translate a repository failure for the record `id`.
fn map_repo_error(err: RepoError, id: DbId) -> CoreError {
    match err {
        RepoError::NotFound => CoreError::NotFound { entity: ENTITY, id },
        RepoError::EditConflict => CoreError::EditConflict { entity: ENTITY, id },
        RepoError::Canceled => CoreError::Canceled,
        RepoError::Store(msg) => CoreError::Internal(msg),
    }
}

#[derive(Clone)]
pub struct ProjectController {
    repo: Arc<dyn ProjectRepository>,
}

impl ProjectController {
    pub fn new(repo: Arc<dyn ProjectRepository>) -> Self {
        Self { repo }
    }

    /// Store reachability, for health endpoints.
    pub async fn store_healthy(&self) -> bool {
        self.repo.health_check().await.is_ok()
    }

    /// Validate and persist a new project.
    pub async fn create(
        &self,
        input: NewProject,
        cancel: &CancellationToken,
    ) -> Result<Project, CoreError> {
        input.validate().map_err(CoreError::FailedValidation)?;
        self.repo
            .create(&input, cancel)
            .await
            .map_err(|e| map_repo_error(e, 0))
    }

    pub async fn get(&self, id: DbId, cancel: &CancellationToken) -> Result<Project, CoreError> {
        self.repo
            .get(id, cancel)
            .await
            .map_err(|e| map_repo_error(e, id))
    }

    /// Merge `patch` onto the stored record and write it back, guarded by
    /// the version observed at read time.
    ///
    /// Returns the merged record carrying the incremented version and the
    /// refreshed `modified_on`.
    pub async fn update(
        &self,
        id: DbId,
        patch: ProjectPatch,
        modified_by: DbId,
        cancel: &CancellationToken,
    ) -> Result<Project, CoreError> {
        let mut project = self
            .repo
            .get(id, cancel)
            .await
            .map_err(|e| map_repo_error(e, id))?;

        patch.apply(&mut project);
        project.modified_by = modified_by;
        project.validate().map_err(CoreError::FailedValidation)?;

        let stamp = self
            .repo
            .update(&project, cancel)
            .await
            .map_err(|e| map_repo_error(e, id))?;
        project.version = stamp.version;
        project.modified_on = stamp.modified_on;
        Ok(project)
    }

    pub async fn delete(&self, id: DbId, cancel: &CancellationToken) -> Result<(), CoreError> {
        self.repo
            .delete(id, cancel)
            .await
            .map_err(|e| map_repo_error(e, id))
    }
}
