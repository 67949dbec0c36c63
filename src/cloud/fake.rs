//! Scripted in-memory [`CloudApi`] for tests.
//!
//! Each method answers from its own queue. The last queued answer is sticky:
//! once a queue holds a single entry it is returned for every further call.
//! An empty queue answers `Unimplemented`.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use tonic::Status;

use super::v1::*;
use super::CloudApi;

#[derive(Debug)]
struct Script<Req, Resp> {
    responses: VecDeque<Result<Resp, Status>>,
    requests: Vec<Req>,
}

impl<Req, Resp> Default for Script<Req, Resp> {
    fn default() -> Self {
        Self {
            responses: VecDeque::new(),
            requests: Vec::new(),
        }
    }
}

impl<Req, Resp: Clone> Script<Req, Resp> {
    fn call(&mut self, method: &str, request: Req) -> Result<Resp, Status> {
        self.requests.push(request);
        if self.responses.len() > 1 {
            return self.responses.pop_front().unwrap();
        }
        self.responses
            .front()
            .cloned()
            .unwrap_or_else(|| Err(Status::unimplemented(format!("no scripted {}", method))))
    }
}

#[derive(Debug, Default)]
struct Scripts {
    create_node: Script<CreateNodeRequest, CreateNodeResponse>,
    get_node: Script<GetNodeRequest, GetNodeResponse>,
    update_node: Script<UpdateNodeRequest, UpdateNodeResponse>,
    destroy_node: Script<DestroyNodeRequest, DestroyNodeResponse>,
    create_project: Script<CreateProjectRequest, CreateProjectResponse>,
    get_project: Script<GetProjectRequest, GetProjectResponse>,
    update_project: Script<UpdateProjectRequest, UpdateProjectResponse>,
    delete_project: Script<DeleteProjectRequest, DeleteProjectResponse>,
    calls: Vec<&'static str>,
}

#[derive(Debug, Default)]
pub(crate) struct FakeCloud {
    scripts: Mutex<Scripts>,
}

impl FakeCloud {
    pub fn new() -> Self {
        Self::default()
    }

    fn with<T>(&self, f: impl FnOnce(&mut Scripts) -> T) -> T {
        f(&mut self.scripts.lock().unwrap())
    }

    pub fn on_create_node(&self, response: Result<CreateNodeResponse, Status>) -> &Self {
        self.with(|s| s.create_node.responses.push_back(response));
        self
    }

    pub fn on_get_node(&self, response: Result<GetNodeResponse, Status>) -> &Self {
        self.with(|s| s.get_node.responses.push_back(response));
        self
    }

    pub fn on_update_node(&self, response: Result<UpdateNodeResponse, Status>) -> &Self {
        self.with(|s| s.update_node.responses.push_back(response));
        self
    }

    pub fn on_destroy_node(&self, response: Result<DestroyNodeResponse, Status>) -> &Self {
        self.with(|s| s.destroy_node.responses.push_back(response));
        self
    }

    pub fn on_create_project(&self, response: Result<CreateProjectResponse, Status>) -> &Self {
        self.with(|s| s.create_project.responses.push_back(response));
        self
    }

    pub fn on_get_project(&self, response: Result<GetProjectResponse, Status>) -> &Self {
        self.with(|s| s.get_project.responses.push_back(response));
        self
    }

    pub fn on_update_project(&self, response: Result<UpdateProjectResponse, Status>) -> &Self {
        self.with(|s| s.update_project.responses.push_back(response));
        self
    }

    pub fn on_delete_project(&self, response: Result<DeleteProjectResponse, Status>) -> &Self {
        self.with(|s| s.delete_project.responses.push_back(response));
        self
    }

    /// Method names in call order, e.g. `["CreateNode", "GetNode"]`.
    pub fn calls(&self) -> Vec<&'static str> {
        self.with(|s| s.calls.clone())
    }

    pub fn call_count(&self, method: &str) -> usize {
        self.with(|s| s.calls.iter().filter(|m| **m == method).count())
    }

    pub fn create_node_requests(&self) -> Vec<CreateNodeRequest> {
        self.with(|s| s.create_node.requests.clone())
    }

    pub fn update_node_requests(&self) -> Vec<UpdateNodeRequest> {
        self.with(|s| s.update_node.requests.clone())
    }

    pub fn destroy_node_requests(&self) -> Vec<DestroyNodeRequest> {
        self.with(|s| s.destroy_node.requests.clone())
    }

    pub fn create_project_requests(&self) -> Vec<CreateProjectRequest> {
        self.with(|s| s.create_project.requests.clone())
    }

    pub fn update_project_requests(&self) -> Vec<UpdateProjectRequest> {
        self.with(|s| s.update_project.requests.clone())
    }
}

/// A running node with the given addresses on a single interface, or no
/// interfaces at all when `ips` is empty.
pub(crate) fn node(id: &str, project_id: &str, ips: &[&str]) -> Node {
    let network_interfaces = if ips.is_empty() {
        Vec::new()
    } else {
        vec![NetworkInterface {
            mac_address: "52:54:00:12:34:56".to_string(),
            ip_addresses: ips.iter().map(|ip| ip.to_string()).collect(),
        }]
    };
    Node {
        id: id.to_string(),
        project_id: project_id.to_string(),
        fqdn: "node1.example.com".to_string(),
        flavour: Some(Flavour {
            id: "8a3e4a57-0b5f-4f0b-8f43-1c2d3e4f5a6b".to_string(),
            name: "small".to_string(),
        }),
        datacenter: Some(Datacenter {
            id: "1f0e2d3c-4b5a-4978-8695-a4b3c2d1e0f9".to_string(),
            name: "fra01".to_string(),
        }),
        image: Some(Image {
            id: "5c6d7e8f-9a0b-4c1d-8e2f-3a4b5c6d7e8f".to_string(),
            name: "debian-12".to_string(),
        }),
        billing_period: BillingPeriod::Monthly as i32,
        status: NodeStatus::Running as i32,
        network_interfaces,
        tags: HashMap::new(),
    }
}

pub(crate) fn project(id: &str, environment: ProjectEnvironment) -> Project {
    Project {
        id: id.to_string(),
        name: "web".to_string(),
        description: "web tier".to_string(),
        environment: environment as i32,
    }
}

#[async_trait::async_trait]
impl CloudApi for FakeCloud {
    async fn create_node(
        &self,
        request: CreateNodeRequest,
    ) -> Result<CreateNodeResponse, Status> {
        self.with(|s| {
            s.calls.push("CreateNode");
            s.create_node.call("CreateNode", request)
        })
    }

    async fn get_node(&self, request: GetNodeRequest) -> Result<GetNodeResponse, Status> {
        self.with(|s| {
            s.calls.push("GetNode");
            s.get_node.call("GetNode", request)
        })
    }

    async fn update_node(
        &self,
        request: UpdateNodeRequest,
    ) -> Result<UpdateNodeResponse, Status> {
        self.with(|s| {
            s.calls.push("UpdateNode");
            s.update_node.call("UpdateNode", request)
        })
    }

    async fn destroy_node(
        &self,
        request: DestroyNodeRequest,
    ) -> Result<DestroyNodeResponse, Status> {
        self.with(|s| {
            s.calls.push("DestroyNode");
            s.destroy_node.call("DestroyNode", request)
        })
    }

    async fn create_project(
        &self,
        request: CreateProjectRequest,
    ) -> Result<CreateProjectResponse, Status> {
        self.with(|s| {
            s.calls.push("CreateProject");
            s.create_project.call("CreateProject", request)
        })
    }

    async fn get_project(&self, request: GetProjectRequest) -> Result<GetProjectResponse, Status> {
        self.with(|s| {
            s.calls.push("GetProject");
            s.get_project.call("GetProject", request)
        })
    }

    async fn update_project(
        &self,
        request: UpdateProjectRequest,
    ) -> Result<UpdateProjectResponse, Status> {
        self.with(|s| {
            s.calls.push("UpdateProject");
            s.update_project.call("UpdateProject", request)
        })
    }

    async fn delete_project(
        &self,
        request: DeleteProjectRequest,
    ) -> Result<DeleteProjectResponse, Status> {
        self.with(|s| {
            s.calls.push("DeleteProject");
            s.delete_project.call("DeleteProject", request)
        })
    }
}
