//! `GET /health`: liveness plus a probe of the project store.
//!
//! Always answers `200`; an unreachable store shows up as `"degraded"` so
//! load balancers can tell a running process from a usable one.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Ok,
    Degraded,
}

impl ServiceStatus {
    fn from_store(reachable: bool) -> Self {
        if reachable {
            ServiceStatus::Ok
        } else {
            ServiceStatus::Degraded
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub db_healthy: bool,
}

async fn report(State(state): State<AppState>) -> Json<HealthReport> {
    let db_healthy = state.controller.store_healthy().await;
    Json(HealthReport {
        status: ServiceStatus::from_store(db_healthy),
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}
