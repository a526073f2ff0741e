//! Request handlers for the REST adapter.
//!
//! Handlers decode the request, call [`planboard_core::controller::ProjectController`]
//! and map errors via [`crate::error::AppError`].

pub mod project;
