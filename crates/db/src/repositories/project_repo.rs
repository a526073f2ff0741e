//! Repository for the `projects` table.

use std::future::Future;

use async_trait::async_trait;
use planboard_core::project::{NewProject, Project};
use planboard_core::repository::{ProjectRepository, RepoError, WriteStamp};
use planboard_core::types::{DbId, Timestamp};
use sqlx::PgPool;
use tokio_util::sync::CancellationToken;

use crate::models::project::{InsertedProject, ProjectRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, start_date, target_end_date, actual_end_date, \
     created_on, created_by, modified_on, modified_by, version";

/// PostgreSQL `query_canceled` SQLSTATE.
const QUERY_CANCELED: &str = "57014";

/// Classify a sqlx failure that is not a "no rows" outcome.
fn store_error(err: sqlx::Error) -> RepoError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(QUERY_CANCELED) {
            return RepoError::Canceled;
        }
    }
    RepoError::Store(err.to_string())
}

/// Drive `query` to completion unless `cancel` fires first.
///
/// Dropping the in-flight sqlx future abandons the statement on its
/// connection, which sqlx then discards from the pool.
async fn run<T, F>(cancel: &CancellationToken, query: F) -> Result<T, RepoError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    tokio::select! {
        biased;
        () = cancel.cancelled() => Err(RepoError::Canceled),
        result = query => result.map_err(store_error),
    }
}

/// Project persistence with version-guarded updates.
#[derive(Debug, Clone)]
pub struct PgProjectRepo {
    pool: PgPool,
}

impl PgProjectRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for PgProjectRepo {
    /// Insert a new project, reading back the server-assigned columns.
    async fn create(
        &self,
        input: &NewProject,
        cancel: &CancellationToken,
    ) -> Result<Project, RepoError> {
        let inserted = run(
            cancel,
            sqlx::query_as::<_, InsertedProject>(
                "INSERT INTO projects (name, description, start_date, target_end_date, created_by, modified_by)
                 VALUES ($1, $2, $3, $4, $5, $6)
                 RETURNING id, created_on, modified_on, version",
            )
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.target_end_date)
            .bind(input.created_by)
            .bind(input.modified_by)
            .fetch_one(&self.pool),
        )
        .await?;

        tracing::debug!(project_id = inserted.id, "Project created");

        Ok(Project {
            id: inserted.id,
            name: input.name.clone(),
            description: input.description.clone(),
            start_date: input.start_date,
            target_end_date: input.target_end_date,
            actual_end_date: None,
            created_on: inserted.created_on,
            created_by: input.created_by,
            modified_on: inserted.modified_on,
            modified_by: input.modified_by,
            version: inserted.version,
        })
    }

    async fn get(&self, id: DbId, cancel: &CancellationToken) -> Result<Project, RepoError> {
        if id < 1 {
            return Err(RepoError::NotFound);
        }
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        run(
            cancel,
            sqlx::query_as::<_, ProjectRow>(&query)
                .bind(id)
                .fetch_optional(&self.pool),
        )
        .await?
        .map(Project::from)
        .ok_or(RepoError::NotFound)
    }

    /// Compare-and-increment on `version`. Zero matched rows means either the
    /// row is gone or another writer got there first; both are reported as
    /// [`RepoError::EditConflict`].
    async fn update(
        &self,
        project: &Project,
        cancel: &CancellationToken,
    ) -> Result<WriteStamp, RepoError> {
        let written: Option<(i64, Timestamp)> = run(
            cancel,
            sqlx::query_as(
                "UPDATE projects SET
                    name = $1,
                    description = $2,
                    start_date = $3,
                    target_end_date = $4,
                    actual_end_date = $5,
                    modified_on = CURRENT_TIMESTAMP(0),
                    modified_by = $6,
                    version = version + 1
                 WHERE id = $7 AND version = $8
                 RETURNING version, modified_on",
            )
            .bind(&project.name)
            .bind(&project.description)
            .bind(project.start_date)
            .bind(project.target_end_date)
            .bind(project.actual_end_date)
            .bind(project.modified_by)
            .bind(project.id)
            .bind(project.version)
            .fetch_optional(&self.pool),
        )
        .await?;

        match written {
            Some((version, modified_on)) => Ok(WriteStamp {
                version,
                modified_on,
            }),
            None => {
                tracing::debug!(
                    project_id = project.id,
                    expected_version = project.version,
                    "Version-guarded update matched no rows"
                );
                Err(RepoError::EditConflict)
            }
        }
    }

    async fn delete(&self, id: DbId, cancel: &CancellationToken) -> Result<(), RepoError> {
        if id < 1 {
            return Err(RepoError::NotFound);
        }
        let result = run(
            cancel,
            sqlx::query("DELETE FROM projects WHERE id = $1")
                .bind(id)
                .execute(&self.pool),
        )
        .await?;
        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn health_check(&self) -> Result<(), RepoError> {
        crate::health_check(&self.pool).await.map_err(store_error)
    }
}
