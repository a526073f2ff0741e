fn main() {
    // Service/client stubs are generated from hand-written prost messages in
    // `src/grpc/messages.rs`, so no `.proto` file or protoc is needed.
    let method = |name: &str, route: &str, input: &str, output: &str| {
        tonic_build::manual::Method::builder()
            .name(name)
            .route_name(route)
            .input_type(format!("crate::grpc::messages::{input}"))
            .output_type(format!("crate::grpc::messages::{output}"))
            .codec_path("tonic::codec::ProstCodec")
            .build()
    };

    let service = tonic_build::manual::Service::builder()
        .name("ProjectService")
        .package("planboard.v1")
        .method(method(
            "create_project",
            "CreateProject",
            "CreateProjectRequest",
            "CreateProjectResponse",
        ))
        .method(method(
            "get_project",
            "GetProject",
            "GetProjectRequest",
            "GetProjectResponse",
        ))
        .method(method(
            "get_all_projects",
            "GetAllProjects",
            "GetAllProjectsRequest",
            "GetAllProjectsResponse",
        ))
        .method(method(
            "update_project",
            "UpdateProject",
            "UpdateProjectRequest",
            "UpdateProjectResponse",
        ))
        .method(method(
            "delete_project",
            "DeleteProject",
            "DeleteProjectRequest",
            "DeleteProjectResponse",
        ))
        .build();

    tonic_build::manual::Builder::new().compile(&[service]);
}
