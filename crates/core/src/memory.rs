//! In-memory [`ProjectRepository`] for tests and database-less development.
//!
//! The version compare-and-increment runs inside a single write-lock
//! section, which gives the same atomicity as the store-side conditional
//! `UPDATE` of the PostgreSQL variant.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::SubsecRound;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use crate::project::{NewProject, Project};
use crate::repository::{ProjectRepository, RepoError, WriteStamp};
use crate::types::{DbId, Timestamp};

#[derive(Debug, Default)]
struct Rows {
    last_id: DbId,
    by_id: BTreeMap<DbId, Project>,
}

#[derive(Debug, Default)]
pub struct InMemoryProjectRepo {
    rows: RwLock<Rows>,
}

impl InMemoryProjectRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.rows.read().await.by_id.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Second precision, matching `CURRENT_TIMESTAMP(0)` on the SQL side.
fn now() -> Timestamp {
    chrono::Utc::now().trunc_subsecs(0)
}

fn ensure_live(cancel: &CancellationToken) -> Result<(), RepoError> {
    if cancel.is_cancelled() {
        return Err(RepoError::Canceled);
    }
    Ok(())
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepo {
    async fn create(
        &self,
        input: &NewProject,
        cancel: &CancellationToken,
    ) -> Result<Project, RepoError> {
        ensure_live(cancel)?;
        let mut rows = self.rows.write().await;
        rows.last_id += 1;
        let created_on = now();
        let project = Project {
            id: rows.last_id,
            name: input.name.clone(),
            description: input.description.clone(),
            start_date: input.start_date,
            target_end_date: input.target_end_date,
            actual_end_date: None,
            created_on,
            created_by: input.created_by,
            modified_on: created_on,
            modified_by: input.modified_by,
            version: 1,
        };
        rows.by_id.insert(project.id, project.clone());
        Ok(project)
    }

    async fn get(&self, id: DbId, cancel: &CancellationToken) -> Result<Project, RepoError> {
        if id < 1 {
            return Err(RepoError::NotFound);
        }
        ensure_live(cancel)?;
        self.rows
            .read()
            .await
            .by_id
            .get(&id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    async fn update(
        &self,
        project: &Project,
        cancel: &CancellationToken,
    ) -> Result<WriteStamp, RepoError> {
        ensure_live(cancel)?;
        let mut rows = self.rows.write().await;
        let stored = match rows.by_id.get_mut(&project.id) {
            Some(stored) if stored.version == project.version => stored,
            _ => return Err(RepoError::EditConflict),
        };

        stored.name = project.name.clone();
        stored.description = project.description.clone();
        stored.start_date = project.start_date;
        stored.target_end_date = project.target_end_date;
        stored.actual_end_date = project.actual_end_date;
        stored.modified_by = project.modified_by;
        stored.modified_on = now();
        stored.version += 1;
        Ok(WriteStamp {
            version: stored.version,
            modified_on: stored.modified_on,
        })
    }

    async fn delete(&self, id: DbId, cancel: &CancellationToken) -> Result<(), RepoError> {
        if id < 1 {
            return Err(RepoError::NotFound);
        }
        ensure_live(cancel)?;
        match self.rows.write().await.by_id.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }

    async fn health_check(&self) -> Result<(), RepoError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::TimeZone;

    use super::*;

    fn new_project(name: &str) -> NewProject {
        NewProject {
            name: name.to_string(),
            description: String::new(),
            start_date: chrono::Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            target_end_date: chrono::Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
            created_by: 1,
            modified_by: 1,
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids_and_version_one() {
        let repo = InMemoryProjectRepo::new();
        let cancel = CancellationToken::new();

        let a = repo.create(&new_project("A"), &cancel).await.unwrap();
        let b = repo.create(&new_project("B"), &cancel).await.unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(a.version, 1);
        assert_eq!(a.created_on, a.modified_on);
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn non_positive_ids_are_not_found() {
        let repo = InMemoryProjectRepo::new();
        let cancel = CancellationToken::new();

        for id in [0, -5] {
            assert_matches!(repo.get(id, &cancel).await, Err(RepoError::NotFound));
            assert_matches!(repo.delete(id, &cancel).await, Err(RepoError::NotFound));
        }
    }

    #[tokio::test]
    async fn update_with_matching_version_increments() {
        let repo = InMemoryProjectRepo::new();
        let cancel = CancellationToken::new();
        let mut project = repo.create(&new_project("A"), &cancel).await.unwrap();

        project.name = "A2".into();
        let stamp = repo.update(&project, &cancel).await.unwrap();
        assert_eq!(stamp.version, 2);

        let stored = repo.get(project.id, &cancel).await.unwrap();
        assert_eq!(stored.name, "A2");
        assert_eq!(stored.version, 2);
        assert_eq!(stored.modified_on, stamp.modified_on);
        assert_eq!(stored.created_on, project.created_on);
    }

    #[tokio::test]
    async fn stale_version_conflicts() {
        let repo = InMemoryProjectRepo::new();
        let cancel = CancellationToken::new();
        let project = repo.create(&new_project("A"), &cancel).await.unwrap();

        repo.update(&project, &cancel).await.unwrap();
        assert_matches!(
            repo.update(&project, &cancel).await,
            Err(RepoError::EditConflict)
        );
    }

    #[tokio::test]
    async fn update_of_deleted_row_conflicts() {
        let repo = InMemoryProjectRepo::new();
        let cancel = CancellationToken::new();
        let project = repo.create(&new_project("A"), &cancel).await.unwrap();

        repo.delete(project.id, &cancel).await.unwrap();
        assert_matches!(
            repo.update(&project, &cancel).await,
            Err(RepoError::EditConflict)
        );
        assert_matches!(
            repo.delete(project.id, &cancel).await,
            Err(RepoError::NotFound)
        );
    }

    #[tokio::test]
    async fn cancelled_token_short_circuits() {
        let repo = InMemoryProjectRepo::new();
        let cancel = CancellationToken::new();
        let project = repo.create(&new_project("A"), &cancel).await.unwrap();

        cancel.cancel();
        assert_matches!(repo.get(project.id, &cancel).await, Err(RepoError::Canceled));
        assert_matches!(repo.update(&project, &cancel).await, Err(RepoError::Canceled));
        assert!(!repo.is_empty().await);
    }
}
