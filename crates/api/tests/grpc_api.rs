//! gRPC transport integration tests.
//!
//! Starts a tonic server over an in-memory store and exercises it with the
//! generated client.

mod common;

use std::sync::Arc;

use planboard_api::grpc::messages::{
    CreateProjectRequest, DeleteProjectRequest, GetAllProjectsRequest, GetProjectRequest,
    UpdateProjectRequest,
};
use planboard_api::grpc::{grpc_server, ProjectServiceClient};
use planboard_api::telemetry::Telemetry;
use planboard_core::controller::ProjectController;
use planboard_core::memory::InMemoryProjectRepo;
use planboard_core::repository::ProjectRepository;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Channel;
use tonic::Code;

type Client = ProjectServiceClient<Channel>;

async fn start_server() -> Client {
    start_server_with(Arc::new(InMemoryProjectRepo::new())).await
}

/// Bind to port 0, spawn the gRPC server over `repo`, and return a
/// connected client.
async fn start_server_with(repo: Arc<dyn ProjectRepository>) -> Client {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let controller = ProjectController::new(repo);
    let svc = grpc_server(controller, Telemetry::disabled());
    tokio::spawn(async move {
        tonic::transport::Server::builder()
            .add_service(svc)
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });

    ProjectServiceClient::connect(format!("http://{addr}"))
        .await
        .unwrap()
}

fn ts(seconds: i64) -> Option<prost_types::Timestamp> {
    Some(prost_types::Timestamp { seconds, nanos: 0 })
}

// 2024-01-01, 2024-06-01 and 2024-06-02, all midnight UTC.
const JAN_1: i64 = 1_704_067_200;
const JUN_1: i64 = 1_717_200_000;
const JUN_2: i64 = 1_717_286_400;

fn launch() -> CreateProjectRequest {
    CreateProjectRequest {
        name: "Launch".into(),
        description: String::new(),
        start_date: ts(JAN_1),
        target_end_date: ts(JUN_1),
    }
}

async fn create_launch(client: &mut Client) -> i64 {
    client
        .create_project(launch())
        .await
        .unwrap()
        .into_inner()
        .project
        .unwrap()
        .id
}

fn update(project_id: i64) -> UpdateProjectRequest {
    UpdateProjectRequest {
        project_id,
        name: None,
        description: None,
        start_date: None,
        target_end_date: None,
        actual_end_date: None,
        modified_by: 0,
    }
}

#[tokio::test]
async fn create_then_get() {
    let mut client = start_server().await;

    let created = client
        .create_project(launch())
        .await
        .unwrap()
        .into_inner()
        .project
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.version, 1);
    assert_eq!(created.actual_end_date, None);
    assert_eq!(created.start_date, ts(JAN_1));

    let fetched = client
        .get_project(GetProjectRequest {
            project_id: created.id,
        })
        .await
        .unwrap()
        .into_inner()
        .project
        .unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_with_invalid_fields_is_invalid_argument() {
    let mut client = start_server().await;

    let status = client
        .create_project(CreateProjectRequest {
            name: String::new(),
            ..launch()
        })
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::InvalidArgument);
    let fields: serde_json::Value = serde_json::from_str(status.message()).unwrap();
    assert_eq!(fields["name"], "must be provided");
}

#[tokio::test]
async fn create_without_start_date_is_invalid_argument() {
    let mut client = start_server().await;

    let status = client
        .create_project(CreateProjectRequest {
            start_date: None,
            ..launch()
        })
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::InvalidArgument);
    assert_eq!(status.message(), "start_date must be provided");
}

#[tokio::test]
async fn update_merges_present_fields_only() {
    let mut client = start_server().await;
    let id = create_launch(&mut client).await;

    let updated = client
        .update_project(UpdateProjectRequest {
            actual_end_date: ts(JUN_2),
            ..update(id)
        })
        .await
        .unwrap()
        .into_inner()
        .project
        .unwrap();

    assert_eq!(updated.version, 2);
    assert_eq!(updated.actual_end_date, ts(JUN_2));
    assert_eq!(updated.name, "Launch");
    assert_eq!(updated.target_end_date, ts(JUN_1));
}

#[tokio::test]
async fn update_distinguishes_empty_from_absent() {
    let mut client = start_server().await;
    let id = create_launch(&mut client).await;
    client
        .update_project(UpdateProjectRequest {
            description: Some("draft".into()),
            ..update(id)
        })
        .await
        .unwrap();

    let updated = client
        .update_project(UpdateProjectRequest {
            description: Some(String::new()),
            ..update(id)
        })
        .await
        .unwrap()
        .into_inner()
        .project
        .unwrap();

    assert_eq!(updated.description, "");
    assert_eq!(updated.name, "Launch");
    assert_eq!(updated.version, 3);
}

#[tokio::test]
async fn update_losing_version_race_is_already_exists() {
    let mut client = start_server_with(Arc::new(common::RacingRepo::default())).await;
    let id = create_launch(&mut client).await;

    let status = client
        .update_project(UpdateProjectRequest {
            name: Some("x".into()),
            ..update(id)
        })
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::AlreadyExists);
    assert_eq!(
        status.message(),
        "unable to update the record due to an edit conflict, please try again"
    );
}

#[tokio::test]
async fn update_ignores_client_supplied_modifier() {
    let mut client = start_server().await;
    let id = create_launch(&mut client).await;

    let updated = client
        .update_project(UpdateProjectRequest {
            name: Some("Relaunch".into()),
            modified_by: 99,
            ..update(id)
        })
        .await
        .unwrap()
        .into_inner()
        .project
        .unwrap();

    assert_eq!(updated.modified_by, 1);
}

#[tokio::test]
async fn invalid_ids_are_not_found() {
    let mut client = start_server().await;

    for id in [0, -5, 404] {
        let status = client
            .get_project(GetProjectRequest { project_id: id })
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::NotFound);

        let status = client.update_project(update(id)).await.unwrap_err();
        assert_eq!(status.code(), Code::NotFound);

        let status = client
            .delete_project(DeleteProjectRequest { project_id: id })
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::NotFound);
    }
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let mut client = start_server().await;
    let id = create_launch(&mut client).await;

    let resp = client
        .delete_project(DeleteProjectRequest { project_id: id })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(resp.message, "project successfully deleted");

    let status = client
        .get_project(GetProjectRequest { project_id: id })
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);
}

#[tokio::test]
async fn get_all_projects_is_unimplemented() {
    let mut client = start_server().await;

    let status = client
        .get_all_projects(GetAllProjectsRequest {})
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::Unimplemented);
}
