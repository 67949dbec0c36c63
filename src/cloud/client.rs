use std::fmt;

use tonic::metadata::AsciiMetadataValue;
use tonic::service::interceptor::InterceptedService;
use tonic::service::Interceptor;
use tonic::transport::{Channel, Endpoint};
use tonic::{Request, Response, Status};
use tracing::trace;

use super::v1::cloud_service_client::CloudServiceClient;
use super::v1::*;
use super::CloudApi;
use crate::error::ProviderError;

/// Adds `authorization: Bearer <token>` to every outgoing call.
#[derive(Debug, Clone, Default)]
pub struct BearerAuth {
    authorization: Option<AsciiMetadataValue>,
}

impl BearerAuth {
    /// Authenticate with `access_token`, or send no header when `None`.
    pub fn new(access_token: Option<&str>) -> Result<Self, ProviderError> {
        let authorization = access_token
            .map(|token| format!("Bearer {}", token).parse::<AsciiMetadataValue>())
            .transpose()
            .map_err(|_| {
                ProviderError::Configuration(
                    "access token contains characters that are not valid in a header".to_string(),
                )
            })?;
        Ok(Self { authorization })
    }
}

impl Interceptor for BearerAuth {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        if let Some(value) = &self.authorization {
            request.metadata_mut().insert("authorization", value.clone());
        }
        Ok(request)
    }
}

type AuthedClient = CloudServiceClient<InterceptedService<Channel, BearerAuth>>;

/// gRPC client for the cloud API.
///
/// Cloning is cheap; every call works on its own clone of the channel, so a
/// single client can serve concurrent operations.
#[derive(Clone)]
pub struct GrpcCloudClient {
    inner: AuthedClient,
}

impl GrpcCloudClient {
    /// Wrap an existing channel.
    pub fn new(channel: Channel, auth: BearerAuth) -> Self {
        Self {
            inner: CloudServiceClient::with_interceptor(channel, auth),
        }
    }

    /// Build a client whose channel connects on first use.
    ///
    /// Must be called from within a tokio runtime.
    pub fn connect_lazy(endpoint: &str, access_token: Option<&str>) -> Result<Self, ProviderError> {
        let channel = Endpoint::from_shared(endpoint.to_string())
            .map_err(|e| {
                ProviderError::Configuration(format!("invalid endpoint '{}': {}", endpoint, e))
            })?
            .connect_lazy();

        Ok(Self::new(channel, BearerAuth::new(access_token)?))
    }

    fn client(&self, method: &'static str) -> AuthedClient {
        trace!(method, "calling cloud API");
        self.inner.clone()
    }
}

impl fmt::Debug for GrpcCloudClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrpcCloudClient").finish_non_exhaustive()
    }
}

#[async_trait::async_trait]
impl CloudApi for GrpcCloudClient {
    async fn create_node(&self, request: CreateNodeRequest) -> Result<CreateNodeResponse, Status> {
        self.client("CreateNode")
            .create_node(request)
            .await
            .map(Response::into_inner)
    }

    async fn get_node(&self, request: GetNodeRequest) -> Result<GetNodeResponse, Status> {
        self.client("GetNode")
            .get_node(request)
            .await
            .map(Response::into_inner)
    }

    async fn update_node(&self, request: UpdateNodeRequest) -> Result<UpdateNodeResponse, Status> {
        self.client("UpdateNode")
            .update_node(request)
            .await
            .map(Response::into_inner)
    }

    async fn destroy_node(
        &self,
        request: DestroyNodeRequest,
    ) -> Result<DestroyNodeResponse, Status> {
        self.client("DestroyNode")
            .destroy_node(request)
            .await
            .map(Response::into_inner)
    }

    async fn create_project(
        &self,
        request: CreateProjectRequest,
    ) -> Result<CreateProjectResponse, Status> {
        self.client("CreateProject")
            .create_project(request)
            .await
            .map(Response::into_inner)
    }

    async fn get_project(&self, request: GetProjectRequest) -> Result<GetProjectResponse, Status> {
        self.client("GetProject")
            .get_project(request)
            .await
            .map(Response::into_inner)
    }

    async fn update_project(
        &self,
        request: UpdateProjectRequest,
    ) -> Result<UpdateProjectResponse, Status> {
        self.client("UpdateProject")
            .update_project(request)
            .await
            .map(Response::into_inner)
    }

    async fn delete_project(
        &self,
        request: DeleteProjectRequest,
    ) -> Result<DeleteProjectResponse, Status> {
        self.client("DeleteProject")
            .delete_project(request)
            .await
            .map(Response::into_inner)
    }
}
