#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use planboard_api::config::ServerConfig;
use planboard_api::router::build_app_router;
use planboard_api::state::AppState;
use planboard_api::telemetry::Telemetry;
use planboard_core::controller::ProjectController;
use planboard_core::memory::InMemoryProjectRepo;
use planboard_core::project::{NewProject, Project};
use planboard_core::repository::{ProjectRepository, RepoError, WriteStamp};
use planboard_core::types::DbId;
use tokio_util::sync::CancellationToken;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        grpc_port: 0,
        database_url: None,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Full application router over a fresh in-memory store.
pub fn build_test_app() -> Router {
    build_test_app_with(Arc::new(InMemoryProjectRepo::new()), test_config())
}

/// Full application router over the given repository and config, with the
/// same middleware stack production uses.
pub fn build_test_app_with(repo: Arc<dyn ProjectRepository>, config: ServerConfig) -> Router {
    let state = AppState {
        controller: ProjectController::new(repo),
        telemetry: Telemetry::disabled(),
    };
    build_app_router(state, &config)
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<String>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(body.map(Body::from).unwrap_or_else(Body::empty))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(json.to_string())).await
}

pub async fn patch_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(json.to_string())).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// A valid creation body for the "Launch" project.
pub fn launch_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Launch",
        "description": "",
        "start_date": "2024-01-01T00:00:00Z",
        "target_end_date": "2024-06-01T00:00:00Z",
    })
}

/// In-memory store where another writer commits between every read and the
/// caller's write, so every read-merge-write loses the version check.
#[derive(Default)]
pub struct RacingRepo {
    inner: InMemoryProjectRepo,
}

#[async_trait]
impl ProjectRepository for RacingRepo {
    async fn create(
        &self,
        input: &NewProject,
        cancel: &CancellationToken,
    ) -> Result<Project, RepoError> {
        self.inner.create(input, cancel).await
    }

    async fn get(&self, id: DbId, cancel: &CancellationToken) -> Result<Project, RepoError> {
        let project = self.inner.get(id, cancel).await?;
        self.inner.update(&project, cancel).await?;
        Ok(project)
    }

    async fn update(
        &self,
        project: &Project,
        cancel: &CancellationToken,
    ) -> Result<WriteStamp, RepoError> {
        self.inner.update(project, cancel).await
    }

    async fn delete(&self, id: DbId, cancel: &CancellationToken) -> Result<(), RepoError> {
        self.inner.delete(id, cancel).await
    }

    async fn health_check(&self) -> Result<(), RepoError> {
        self.inner.health_check().await
    }
}
