//! Message types for `planboard.v1.ProjectService` (prost, standard protobuf
//! wire format, no `.proto` file).
//!
//! Field tags match the service's published schema. `UpdateProjectRequest`
//! relies on field presence: proto3 `optional` strings and message-typed
//! timestamps distinguish "not supplied" from "supplied as empty".

#[derive(Clone, PartialEq, prost::Message)]
pub struct Project {
    #[prost(int64, tag = "1")]
    pub id: i64,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub description: String,
    #[prost(message, optional, tag = "4")]
    pub start_date: Option<prost_types::Timestamp>,
    #[prost(message, optional, tag = "5")]
    pub target_end_date: Option<prost_types::Timestamp>,
    #[prost(message, optional, tag = "6")]
    pub actual_end_date: Option<prost_types::Timestamp>,
    #[prost(message, optional, tag = "7")]
    pub created_on: Option<prost_types::Timestamp>,
    #[prost(int64, tag = "8")]
    pub created_by: i64,
    #[prost(message, optional, tag = "9")]
    pub modified_on: Option<prost_types::Timestamp>,
    #[prost(int64, tag = "10")]
    pub modified_by: i64,
    #[prost(int64, tag = "11")]
    pub version: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CreateProjectRequest {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub description: String,
    #[prost(message, optional, tag = "3")]
    pub start_date: Option<prost_types::Timestamp>,
    #[prost(message, optional, tag = "4")]
    pub target_end_date: Option<prost_types::Timestamp>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CreateProjectResponse {
    #[prost(message, optional, tag = "1")]
    pub project: Option<Project>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetProjectRequest {
    #[prost(int64, tag = "1")]
    pub project_id: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetProjectResponse {
    #[prost(message, optional, tag = "1")]
    pub project: Option<Project>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetAllProjectsRequest {}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetAllProjectsResponse {}

#[derive(Clone, PartialEq, prost::Message)]
pub struct UpdateProjectRequest {
    #[prost(int64, tag = "1")]
    pub project_id: i64,
    #[prost(string, optional, tag = "2")]
    pub name: Option<String>,
    #[prost(string, optional, tag = "3")]
    pub description: Option<String>,
    #[prost(message, optional, tag = "4")]
    pub start_date: Option<prost_types::Timestamp>,
    #[prost(message, optional, tag = "5")]
    pub target_end_date: Option<prost_types::Timestamp>,
    #[prost(message, optional, tag = "6")]
    pub actual_end_date: Option<prost_types::Timestamp>,
    /// Accepted for wire compatibility; the modifier is the placeholder
    /// caller identity, never a client-supplied value.
    #[prost(int64, tag = "7")]
    pub modified_by: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct UpdateProjectResponse {
    #[prost(message, optional, tag = "1")]
    pub project: Option<Project>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DeleteProjectRequest {
    #[prost(int64, tag = "1")]
    pub project_id: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DeleteProjectResponse {
    #[prost(string, tag = "1")]
    pub message: String,
}
