use std::net::SocketAddr;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use planboard_api::config::ServerConfig;
use planboard_api::grpc::grpc_server;
use planboard_api::router::build_app_router;
use planboard_api::state::AppState;
use planboard_api::telemetry::Telemetry;
use planboard_core::controller::ProjectController;
use planboard_core::memory::InMemoryProjectRepo;
use planboard_core::repository::ProjectRepository;
use planboard_db::repositories::PgProjectRepo;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "planboard_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = config.port,
        grpc_port = config.grpc_port,
        "Loaded server configuration"
    );

    // --- Repository ---
    let repo: Arc<dyn ProjectRepository> = match &config.database_url {
        Some(database_url) => {
            let pool = planboard_db::create_pool(database_url)
                .await
                .expect("Failed to connect to database");
            tracing::info!("Database connection pool created");

            planboard_db::health_check(&pool)
                .await
                .expect("Database health check failed");
            tracing::info!("Database health check passed");

            Arc::new(PgProjectRepo::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using the in-memory project store");
            Arc::new(InMemoryProjectRepo::new())
        }
    };

    let controller = ProjectController::new(repo);

    // --- Shutdown coordination ---
    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        signal_token.cancel();
    });

    // --- REST ---
    let state = AppState {
        controller: controller.clone(),
        telemetry: Telemetry::new("http"),
    };
    let app = build_app_router(state, &config);

    let http_addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    let listener = tokio::net::TcpListener::bind(http_addr)
        .await
        .expect("Failed to bind to address");
    tracing::info!(%http_addr, "Starting REST server");

    let http_shutdown = shutdown.clone();
    let http_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(http_shutdown.cancelled_owned())
            .await
    });

    // --- gRPC ---
    let grpc_addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.grpc_port,
    );
    tracing::info!(%grpc_addr, "Starting gRPC server");

    let grpc_shutdown = shutdown.clone();
    let grpc_handle = tokio::spawn(async move {
        tonic::transport::Server::builder()
            .add_service(grpc_server(controller, Telemetry::new("grpc")))
            .serve_with_shutdown(grpc_addr, grpc_shutdown.cancelled_owned())
            .await
    });

    // Either server stopping brings the other one down too.
    let (http_result, grpc_result) = tokio::join!(
        async {
            let result = http_handle.await;
            shutdown.cancel();
            result
        },
        async {
            let result = grpc_handle.await;
            shutdown.cancel();
            result
        },
    );

    match http_result {
        Ok(Ok(())) => tracing::info!("REST server stopped"),
        Ok(Err(e)) => tracing::error!(error = %e, "REST server error"),
        Err(e) => tracing::error!(error = %e, "REST server task failed"),
    }
    match grpc_result {
        Ok(Ok(())) => tracing::info!("gRPC server stopped"),
        Ok(Err(e)) => tracing::error!(error = %e, "gRPC server error"),
        Err(e) => tracing::error!(error = %e, "gRPC server task failed"),
    }

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
