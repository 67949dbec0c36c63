//! The `gpcore_node` resource: a bare metal node.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::time::{sleep, Instant};
use tonic::Code;
use tracing::{debug, info, trace, warn};

use super::{known_string, ClientSlot, Resource};
use crate::cloud::v1::{
    BillingPeriod, CreateNodeRequest, DestroyNodeRequest, GetNodeRequest, GetNodeResponse, Node,
    UpdateNodeRequest,
};
use crate::cloud::CloudApi;
use crate::error::ProviderError;
use crate::schema::{Attribute, Diagnostic, Schema};
use crate::types::{AttrValue, StateResponse};
use crate::validator::{EnumValidator, UuidListValidator, UuidValidator};

/// State of a `gpcore_node`, one field per schema attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct NodeModel {
    pub project_id: AttrValue<String>,
    pub flavour_id: AttrValue<String>,
    pub datacenter_id: AttrValue<String>,
    pub password: AttrValue<String>,
    pub ssh_key_ids: AttrValue<Vec<String>>,
    pub user_data: AttrValue<String>,
    pub fqdn: AttrValue<String>,
    /// Primary IP address, see [`primary_ip`].
    pub ip: AttrValue<String>,
    /// A `BillingPeriod` name such as `BILLING_PERIOD_MONTHLY`.
    pub billing_period: AttrValue<String>,
    pub image_id: AttrValue<String>,
    pub tags: AttrValue<BTreeMap<String, String>>,
    /// A `NodeStatus` name such as `NODE_STATUS_RUNNING`.
    pub status: AttrValue<String>,
    pub id: AttrValue<String>,
}

/// First address of the first network interface that has one.
pub fn primary_ip(node: &Node) -> Option<&str> {
    node.network_interfaces
        .iter()
        .flat_map(|interface| interface.ip_addresses.iter())
        .next()
        .map(String::as_str)
}

impl NodeModel {
    fn create_request(&self) -> Result<CreateNodeRequest, ProviderError> {
        let billing_period = known_string(&self.billing_period, "billing_period")?;
        let billing_period = BillingPeriod::from_str_name(&billing_period)
            .filter(|period| *period != BillingPeriod::Unspecified)
            .ok_or_else(|| {
                ProviderError::Validation(format!(
                    "Invalid billing period specified: {}",
                    billing_period
                ))
            })?;

        Ok(CreateNodeRequest {
            project_id: known_string(&self.project_id, "project_id")?,
            flavour_id: known_string(&self.flavour_id, "flavour_id")?,
            datacenter_id: known_string(&self.datacenter_id, "datacenter_id")?,
            image_id: known_string(&self.image_id, "image_id")?,
            billing_period: billing_period as i32,
            fqdns: vec![known_string(&self.fqdn, "fqdn")?],
            password: self.password.as_known().cloned(),
            ssh_key_ids: self.ssh_key_ids.value_or_default(),
            user_data: self.user_data.as_known().cloned(),
        })
    }

    fn tag_map(&self) -> HashMap<String, String> {
        self.tags
            .as_known()
            .map(|tags| tags.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            .unwrap_or_default()
    }

    fn has_tags(&self) -> bool {
        self.tags.as_known().is_some_and(|tags| !tags.is_empty())
    }

    fn identity(&self) -> Result<(String, String), ProviderError> {
        match (&self.id, &self.project_id) {
            (AttrValue::Known(id), AttrValue::Known(project_id)) => {
                Ok((id.clone(), project_id.clone()))
            },
            _ => Err(ProviderError::InvalidState(
                "Node ID or Project ID is missing from the state".to_string(),
            )),
        }
    }

    /// Copy server-side fields of `node` into the model.
    ///
    /// Password, user data, SSH keys and tags keep their planned values.
    fn write(&mut self, node: &Node) {
        self.project_id = AttrValue::Known(node.project_id.clone());
        if let Some(flavour) = &node.flavour {
            self.flavour_id = AttrValue::Known(flavour.id.clone());
        }
        if let Some(datacenter) = &node.datacenter {
            self.datacenter_id = AttrValue::Known(datacenter.id.clone());
        }
        self.fqdn = AttrValue::Known(node.fqdn.clone());
        self.billing_period = AttrValue::Known(node.billing_period().as_str_name().to_string());
        if let Some(image) = &node.image {
            self.image_id = AttrValue::Known(image.id.clone());
        }
        self.id = AttrValue::Known(node.id.clone());
        self.status = AttrValue::Known(node.status().as_str_name().to_string());
        if let Some(ip) = primary_ip(node) {
            self.ip = AttrValue::Known(ip.to_string());
        }
    }

    /// State never stores unknown values.
    fn settle(&mut self) {
        if self.ip.is_unknown() {
            self.ip = AttrValue::Null;
        }
        if self.status.is_unknown() {
            self.status = AttrValue::Null;
        }
    }
}

/// How long Create waits for the node's IP address, and how often it asks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSettings {
    /// Give up after this long.
    pub timeout: Duration,
    /// Delay before each fetch.
    pub interval: Duration,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5 * 60),
            interval: Duration::from_secs(10),
        }
    }
}

/// Handler for `gpcore_node`.
#[derive(Debug, Default)]
pub struct NodeResource {
    client: ClientSlot,
    poll: PollSettings,
}

impl NodeResource {
    /// Create an unconfigured handler with default polling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an unconfigured handler that polls with `poll`.
    pub fn with_poll_settings(poll: PollSettings) -> Self {
        Self {
            client: ClientSlot::default(),
            poll,
        }
    }

    /// Fetch the node until it reports a primary IP or the deadline passes.
    async fn wait_for_ip(
        &self,
        client: &dyn CloudApi,
        model: &mut NodeModel,
        node: &Node,
    ) -> Result<(), ProviderError> {
        if primary_ip(node).is_some() {
            return Ok(());
        }

        let deadline = Instant::now() + self.poll.timeout;
        let request = GetNodeRequest {
            id: node.id.clone(),
            project_id: node.project_id.clone(),
        };
        let mut attempts = 0u32;

        loop {
            if Instant::now() > deadline {
                warn!(node_id = %request.id, attempts, "node has no IP address after deadline");
                return Err(ProviderError::DeadlineExceeded(
                    "Unable to get node IP address".to_string(),
                ));
            }
            sleep(self.poll.interval).await;
            attempts += 1;

            match client.get_node(request.clone()).await {
                Ok(GetNodeResponse {
                    node: Some(current),
                }) => {
                    model.write(&current);
                    if let Some(ip) = primary_ip(&current) {
                        debug!(node_id = %request.id, ip, attempts, "node has an IP address");
                        return Ok(());
                    }
                },
                Ok(_) => debug!(node_id = %request.id, "node missing from response"),
                Err(status) => {
                    warn!(node_id = %request.id, error = %status.message(), "fetching node failed")
                },
            }
        }
    }
}

#[async_trait::async_trait]
impl Resource for NodeResource {
    fn type_name(&self, provider_type_name: &str) -> String {
        format!("{}_node", provider_type_name)
    }

    fn schema(&self) -> Schema {
        Schema::v0()
            .with_description(
                "Node is the representation of the Bare Metal Node that got created in the G-PORTAL Cloud.\n\n\
                 Changing the Nodes Image ID will cause the Node to be destroyed and recreated.",
            )
            .with_attribute(
                "project_id",
                Attribute::required_string()
                    .with_description("Project ID the node belongs to")
                    .with_validator(UuidValidator),
            )
            .with_attribute(
                "flavour_id",
                Attribute::required_string()
                    .with_description("Flavour ID of the node")
                    .with_validator(UuidValidator),
            )
            .with_attribute(
                "datacenter_id",
                Attribute::required_string()
                    .with_description("Datacenter ID the node is located in")
                    .with_validator(UuidValidator),
            )
            .with_attribute(
                "password",
                Attribute::optional_string()
                    .sensitive()
                    .with_description("Password used for authentication"),
            )
            .with_attribute(
                "ssh_key_ids",
                Attribute::optional_string_list()
                    .with_description("SSH Keys used for authentication")
                    .with_validator(UuidListValidator),
            )
            .with_attribute(
                "user_data",
                Attribute::optional_string()
                    .with_description("User Data to be provided for cloud-init"),
            )
            .with_attribute(
                "fqdn",
                Attribute::required_string().with_description("Fully Qualified Domain Name of the node"),
            )
            .with_attribute(
                "ip",
                Attribute::computed_string().with_description("IP Address of the node"),
            )
            .with_attribute(
                "billing_period",
                Attribute::required_string()
                    .with_description("Billing Configuration")
                    .with_validator(EnumValidator::billing_period()),
            )
            .with_attribute(
                "image_id",
                Attribute::required_string()
                    .with_description(
                        "Image ID to install the node with (ID of gpcore_image or gpcore_project_image)",
                    )
                    .with_force_new()
                    .with_validator(UuidValidator),
            )
            .with_attribute(
                "tags",
                Attribute::optional_string_map().with_description("Node Tags"),
            )
            .with_attribute(
                "status",
                Attribute::computed_string().with_description("Node Status"),
            )
            .with_attribute(
                "id",
                Attribute::computed_string()
                    .with_description("Node ID")
                    .with_use_state_for_unknown(),
            )
    }

    fn configure(&self, client: Arc<dyn CloudApi>) {
        self.client.set(client);
    }

    async fn create(&self, planned: Value) -> Result<StateResponse, ProviderError> {
        let client = self.client.get()?;
        let mut model: NodeModel = serde_json::from_value(planned)?;
        let request = model.create_request()?;

        debug!(project_id = %request.project_id, fqdns = ?request.fqdns, "creating node");
        let response = client
            .create_node(request)
            .await
            .map_err(|status| ProviderError::remote("create node", status))?;
        let node = response.nodes.into_iter().next().ok_or_else(|| {
            ProviderError::Client(
                "Unable to create node, got error: the response contained no node".to_string(),
            )
        })?;
        model.write(&node);
        info!(node_id = %node.id, "created node");

        self.wait_for_ip(client, &mut model, &node).await?;

        // Tags can only be attached once the node exists.
        if model.has_tags() {
            let request = UpdateNodeRequest {
                id: node.id.clone(),
                project_id: node.project_id.clone(),
                fqdn: Some(node.fqdn.clone()),
                tags: model.tag_map(),
            };
            let response = client
                .update_node(request)
                .await
                .map_err(|status| ProviderError::remote("update node after creation", status))?;
            if let Some(updated) = &response.node {
                model.write(updated);
            }
            debug!(node_id = %node.id, "attached tags");
        }

        model.settle();
        trace!(node_id = %node.id, "create complete");
        Ok(StateResponse::new(serde_json::to_value(&model)?))
    }

    async fn read(&self, current: Value) -> Result<StateResponse, ProviderError> {
        let client = self.client.get()?;
        let mut model: NodeModel = serde_json::from_value(current)?;
        let (id, project_id) = model.identity()?;

        let request = GetNodeRequest {
            id: id.clone(),
            project_id: project_id.clone(),
        };
        match client.get_node(request).await {
            Ok(response) => {
                let node = response.node.ok_or_else(|| {
                    ProviderError::Client(
                        "Unable to get node, got error: the response contained no node"
                            .to_string(),
                    )
                })?;
                model.write(&node);
                model.settle();
                Ok(StateResponse::new(serde_json::to_value(&model)?))
            },
            Err(status) if status.code() == Code::NotFound => {
                warn!(node_id = %id, project_id = %project_id, "node not found, removing from state");
                Ok(StateResponse::removed().with_diagnostic(
                    Diagnostic::warning("Node not found").with_detail(format!(
                        "Node with ID {} not found in the project {}. It has been removed from the state.",
                        id, project_id
                    )),
                ))
            },
            Err(status) => Err(ProviderError::remote("get node", status)),
        }
    }

    async fn update(&self, prior: Value, planned: Value) -> Result<StateResponse, ProviderError> {
        let client = self.client.get()?;
        let prior: NodeModel = serde_json::from_value(prior)?;
        let mut model: NodeModel = serde_json::from_value(planned)?;
        let (id, project_id) = model.identity().or_else(|_| prior.identity())?;

        let request = UpdateNodeRequest {
            id: id.clone(),
            project_id,
            fqdn: Some(known_string(&model.fqdn, "fqdn")?),
            tags: model.tag_map(),
        };
        debug!(node_id = %id, "updating node");
        let response = client
            .update_node(request)
            .await
            .map_err(|status| ProviderError::remote("update node", status))?;
        let node = response.node.ok_or_else(|| {
            ProviderError::Client(
                "Unable to update node, got error: the response contained no node".to_string(),
            )
        })?;
        model.write(&node);
        if model.ip.is_unknown() {
            model.ip = prior.ip.clone();
        }
        model.settle();
        trace!(node_id = %id, "update complete");
        Ok(StateResponse::new(serde_json::to_value(&model)?))
    }

    async fn delete(&self, current: Value) -> Result<Vec<Diagnostic>, ProviderError> {
        let client = self.client.get()?;
        let model: NodeModel = serde_json::from_value(current)?;
        let (id, project_id) = model.identity()?;

        let request = DestroyNodeRequest {
            id: id.clone(),
            project_id,
        };
        match client.destroy_node(request).await {
            Ok(_) => {
                info!(node_id = %id, "destroyed node");
                Ok(Vec::new())
            },
            Err(status) if status.code() == Code::NotFound => {
                debug!(node_id = %id, "node already gone");
                Ok(vec![Diagnostic::warning("Client Warning").with_detail(format!(
                    "Node that should be deleted does not exist: {}",
                    status.message()
                ))])
            },
            Err(status) => Err(ProviderError::remote("delete node", status)),
        }
    }

    fn import_state(&self, id: &str) -> Result<Value, ProviderError> {
        let parts: Vec<&str> = id.split(':').collect();
        let [project_id, node_id] = parts.as_slice() else {
            return Err(invalid_import_id());
        };
        if project_id.is_empty() || node_id.is_empty() {
            return Err(invalid_import_id());
        }

        let model = NodeModel {
            project_id: AttrValue::Known(project_id.to_string()),
            id: AttrValue::Known(node_id.to_string()),
            ..Default::default()
        };
        Ok(serde_json::to_value(&model)?)
    }
}

fn invalid_import_id() -> ProviderError {
    ProviderError::InvalidImportId("Expected import ID format: project_id:node_id".to_string())
}
