//! gRPC handler implementing the generated `ProjectService` trait.

use planboard_core::controller::ProjectController;
use planboard_core::project::{NewProject, ProjectPatch};
use planboard_core::types::{DbId, PLACEHOLDER_USER_ID};
use tokio_util::sync::{CancellationToken, DropGuard};
use tonic::{Request, Response, Status};

use super::convert::{optional_timestamp, required_timestamp};
use super::messages::{
    CreateProjectRequest, CreateProjectResponse, DeleteProjectRequest, DeleteProjectResponse,
    GetAllProjectsRequest, GetAllProjectsResponse, GetProjectRequest, GetProjectResponse,
    UpdateProjectRequest, UpdateProjectResponse,
};
use super::status::{not_found, status_from_core};
use super::ProjectService;
use crate::telemetry::Telemetry;

/// gRPC adapter over the shared [`ProjectController`]. Mirrors the REST
/// adapter's error discipline with its own status mapping.
#[derive(Clone)]
pub struct ProjectGrpcHandler {
    controller: ProjectController,
    telemetry: Telemetry,
}

impl ProjectGrpcHandler {
    pub fn new(controller: ProjectController, telemetry: Telemetry) -> Self {
        Self {
            controller,
            telemetry,
        }
    }
}

/// Ids below 1 name records that cannot exist.
fn checked_id(id: DbId) -> Result<DbId, Status> {
    if id < 1 {
        return Err(not_found());
    }
    Ok(id)
}

/// Token for one call. tonic drops the handler future when the client goes
/// away, and the guard then cancels any in-flight store query.
fn call_token() -> (CancellationToken, DropGuard) {
    let token = CancellationToken::new();
    let guard = token.clone().drop_guard();
    (token, guard)
}

#[tonic::async_trait]
impl ProjectService for ProjectGrpcHandler {
    async fn create_project(
        &self,
        request: Request<CreateProjectRequest>,
    ) -> Result<Response<CreateProjectResponse>, Status> {
        let req = request.into_inner();
        let input = NewProject {
            name: req.name,
            description: req.description,
            start_date: required_timestamp("start_date", req.start_date)?,
            target_end_date: required_timestamp("target_end_date", req.target_end_date)?,
            created_by: PLACEHOLDER_USER_ID,
            modified_by: PLACEHOLDER_USER_ID,
        };

        let (cancel, _guard) = call_token();
        let project = self
            .controller
            .create(input, &cancel)
            .await
            .map_err(|e| status_from_core(e, &self.telemetry, "CreateProject"))?;

        Ok(Response::new(CreateProjectResponse {
            project: Some(project.into()),
        }))
    }

    async fn get_project(
        &self,
        request: Request<GetProjectRequest>,
    ) -> Result<Response<GetProjectResponse>, Status> {
        let id = checked_id(request.into_inner().project_id)?;

        let (cancel, _guard) = call_token();
        let project = self
            .controller
            .get(id, &cancel)
            .await
            .map_err(|e| status_from_core(e, &self.telemetry, "GetProject"))?;

        Ok(Response::new(GetProjectResponse {
            project: Some(project.into()),
        }))
    }

    async fn get_all_projects(
        &self,
        _request: Request<GetAllProjectsRequest>,
    ) -> Result<Response<GetAllProjectsResponse>, Status> {
        Err(Status::unimplemented("listing projects is not implemented"))
    }

    async fn update_project(
        &self,
        request: Request<UpdateProjectRequest>,
    ) -> Result<Response<UpdateProjectResponse>, Status> {
        let req = request.into_inner();
        let id = checked_id(req.project_id)?;
        let patch = ProjectPatch {
            name: req.name,
            description: req.description,
            start_date: optional_timestamp("start_date", req.start_date)?,
            target_end_date: optional_timestamp("target_end_date", req.target_end_date)?,
            actual_end_date: optional_timestamp("actual_end_date", req.actual_end_date)?,
        };

        let (cancel, _guard) = call_token();
        let project = self
            .controller
            .update(id, patch, PLACEHOLDER_USER_ID, &cancel)
            .await
            .map_err(|e| status_from_core(e, &self.telemetry, "UpdateProject"))?;

        Ok(Response::new(UpdateProjectResponse {
            project: Some(project.into()),
        }))
    }

    async fn delete_project(
        &self,
        request: Request<DeleteProjectRequest>,
    ) -> Result<Response<DeleteProjectResponse>, Status> {
        let id = checked_id(request.into_inner().project_id)?;

        let (cancel, _guard) = call_token();
        self.controller
            .delete(id, &cancel)
            .await
            .map_err(|e| status_from_core(e, &self.telemetry, "DeleteProject"))?;

        Ok(Response::new(DeleteProjectResponse {
            message: "project successfully deleted".into(),
        }))
    }
}
