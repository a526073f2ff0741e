//! Planboard API server library.
//!
//! Exposes the building blocks of both transport adapters (config, state,
//! error handling, REST routes, gRPC service) so integration tests and the
//! binary entrypoint can share them.

pub mod config;
pub mod error;
pub mod extract;
pub mod grpc;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
pub mod telemetry;
