//! Planboard domain core.
//!
//! Holds the project model, its validation rules, the repository capability
//! trait (with an in-memory variant) and the transport-agnostic controller
//! that both the REST and gRPC adapters drive.

pub mod controller;
pub mod error;
pub mod memory;
pub mod project;
pub mod repository;
pub mod types;
pub mod validation;
