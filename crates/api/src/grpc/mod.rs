//! gRPC transport for the project service.
//!
//! Uses tonic for the server and prost for message serialization. The
//! service and client stubs are generated by `build.rs` from the message
//! types in [`messages`].
//!
//! ## RPCs (`planboard.v1.ProjectService`)
//!
//! - `CreateProject`
//! - `GetProject`
//! - `GetAllProjects` (always `Unimplemented`)
//! - `UpdateProject` (merge-patch by field presence)
//! - `DeleteProject`

pub mod convert;
pub mod handler;
pub mod messages;
pub mod status;

include!(concat!(env!("OUT_DIR"), "/planboard.v1.ProjectService.rs"));

pub use handler::ProjectGrpcHandler;
pub use project_service_client::ProjectServiceClient;
pub use project_service_server::{ProjectService, ProjectServiceServer};

use planboard_core::controller::ProjectController;

use crate::telemetry::Telemetry;

/// Create a `ProjectServiceServer` over the shared controller.
pub fn grpc_server(
    controller: ProjectController,
    telemetry: Telemetry,
) -> ProjectServiceServer<ProjectGrpcHandler> {
    ProjectServiceServer::new(ProjectGrpcHandler::new(controller, telemetry))
}
