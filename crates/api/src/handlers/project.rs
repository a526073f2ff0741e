//! Handlers for the `/projects` resource.
//!
//! Each handler runs its controller call under a per-request
//! [`CancellationToken`] that is cancelled when the handler future is
//! dropped (client disconnect or the router's request timeout), which in
//! turn aborts any in-flight store query.

use axum::extract::{FromRequest, Path, Query, Request, State};
use axum::http::{header, StatusCode};
use axum::Json;
use planboard_core::error::CoreError;
use planboard_core::project::{NewProject, Project, ProjectPatch};
use planboard_core::types::{DbId, Timestamp, PLACEHOLDER_USER_ID};
use serde::Deserialize;
use tokio_util::sync::{CancellationToken, DropGuard};

use crate::error::{AppError, AppResult};
use crate::extract::StrictJson;
use crate::query::ListProjectsParams;
use crate::response::{MessageResponse, ProjectResponse};
use crate::state::AppState;

/// Request body for `POST /projects`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateProjectBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start_date: Timestamp,
    pub target_end_date: Timestamp,
}

/// Request body for `PATCH /projects/{id}`. Omitted (or `null`) keys are
/// left unchanged.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateProjectBody {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<Timestamp>,
    pub target_end_date: Option<Timestamp>,
    pub actual_end_date: Option<Timestamp>,
}

impl From<UpdateProjectBody> for ProjectPatch {
    fn from(body: UpdateProjectBody) -> Self {
        ProjectPatch {
            name: body.name,
            description: body.description,
            start_date: body.start_date,
            target_end_date: body.target_end_date,
            actual_end_date: body.actual_end_date,
        }
    }
}

/// Parse a path identifier. Anything unparsable or below 1 names a record
/// that cannot exist, so it is reported as not found.
pub fn parse_id(raw: &str) -> AppResult<DbId> {
    match raw.parse::<DbId>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(AppError::NotFound),
    }
}

/// Token for one request plus the guard that cancels it on drop.
fn request_token() -> (CancellationToken, DropGuard) {
    let token = CancellationToken::new();
    let guard = token.clone().drop_guard();
    (token, guard)
}

/// POST /projects
pub async fn create(
    State(state): State<AppState>,
    StrictJson(body): StrictJson<CreateProjectBody>,
) -> AppResult<(StatusCode, [(header::HeaderName, String); 1], Json<ProjectResponse<Project>>)> {
    let (cancel, _guard) = request_token();
    let input = NewProject {
        name: body.name,
        description: body.description,
        start_date: body.start_date,
        target_end_date: body.target_end_date,
        created_by: PLACEHOLDER_USER_ID,
        modified_by: PLACEHOLDER_USER_ID,
    };
    let project = state.controller.create(input, &cancel).await?;
    let location = format!("/projects/{}", project.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ProjectResponse { project }),
    ))
}

/// GET /projects
///
/// Filters are validated, but listing itself is not offered yet.
pub async fn list(Query(params): Query<ListProjectsParams>) -> AppResult<StatusCode> {
    let filters = params
        .validate()
        .map_err(|fields| AppError::Core(CoreError::FailedValidation(fields)))?;
    tracing::debug!(?filters, "Project listing requested");
    Err(AppError::NotImplemented("listing projects is not implemented"))
}

/// GET /projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<ProjectResponse<Project>>> {
    let id = parse_id(&raw_id)?;
    let (cancel, _guard) = request_token();
    let project = state.controller.get(id, &cancel).await?;
    Ok(Json(ProjectResponse { project }))
}

/// PATCH /projects/{id}
///
/// The id is checked before the body is read, so a bad id is a 404 even
/// when the body is also malformed.
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    request: Request,
) -> AppResult<Json<ProjectResponse<Project>>> {
    let id = parse_id(&raw_id)?;
    let StrictJson(body) = StrictJson::<UpdateProjectBody>::from_request(request, &state).await?;
    let (cancel, _guard) = request_token();
    let project = state
        .controller
        .update(id, body.into(), PLACEHOLDER_USER_ID, &cancel)
        .await?;
    Ok(Json(ProjectResponse { project }))
}

/// DELETE /projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&raw_id)?;
    let (cancel, _guard) = request_token();
    state.controller.delete(id, &cancel).await?;
    Ok(Json(MessageResponse {
        message: "project successfully deleted",
    }))
}
