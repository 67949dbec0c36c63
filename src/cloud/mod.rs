//! The GPCORE cloud API as seen by resources.
//!
//! Resources talk to the API through the [`CloudApi`] trait. The production
//! implementation is [`GrpcCloudClient`]; tests script a double instead.

mod client;
#[cfg(test)]
pub(crate) mod fake;

#[allow(missing_docs)]
#[allow(clippy::all)]
pub mod v1;

pub use client::{BearerAuth, GrpcCloudClient};
pub use v1::{
    BillingPeriod, CreateNodeRequest, CreateNodeResponse, CreateProjectRequest,
    CreateProjectResponse, DeleteProjectRequest, DeleteProjectResponse, DestroyNodeRequest,
    DestroyNodeResponse, GetNodeRequest, GetNodeResponse, GetProjectRequest, GetProjectResponse,
    Node, NodeStatus, Project, ProjectEnvironment, UpdateNodeRequest, UpdateNodeResponse,
    UpdateProjectRequest, UpdateProjectResponse,
};

/// Unary calls against `gpcore.api.cloud.v1.CloudService`.
///
/// Implementations must be safe to share between concurrently running
/// resource operations.
#[async_trait::async_trait]
pub trait CloudApi: Send + Sync + 'static {
    /// Create one or more nodes.
    async fn create_node(
        &self,
        request: CreateNodeRequest,
    ) -> Result<CreateNodeResponse, tonic::Status>;

    /// Fetch a node.
    async fn get_node(&self, request: GetNodeRequest) -> Result<GetNodeResponse, tonic::Status>;

    /// Update a node's mutable fields.
    async fn update_node(
        &self,
        request: UpdateNodeRequest,
    ) -> Result<UpdateNodeResponse, tonic::Status>;

    /// Destroy a node.
    async fn destroy_node(
        &self,
        request: DestroyNodeRequest,
    ) -> Result<DestroyNodeResponse, tonic::Status>;

    /// Create a project.
    async fn create_project(
        &self,
        request: CreateProjectRequest,
    ) -> Result<CreateProjectResponse, tonic::Status>;

    /// Fetch a project.
    async fn get_project(
        &self,
        request: GetProjectRequest,
    ) -> Result<GetProjectResponse, tonic::Status>;

    /// Update a project.
    async fn update_project(
        &self,
        request: UpdateProjectRequest,
    ) -> Result<UpdateProjectResponse, tonic::Status>;

    /// Delete a project.
    async fn delete_project(
        &self,
        request: DeleteProjectRequest,
    ) -> Result<DeleteProjectResponse, tonic::Status>;
}
