//! The GPCORE provider: resource registry and host call dispatch.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};

use crate::cloud::{CloudApi, GrpcCloudClient};
use crate::config::ProviderConfig;
use crate::error::ProviderError;
use crate::plan;
use crate::resource::{NodeResource, ProjectResource, Resource};
use crate::schema::{Diagnostic, ProviderSchema};
use crate::service::ProviderService;
use crate::types::{ImportedResource, PlanResult, ProviderMetadata, StateResponse};
use crate::validation;

/// Prefix of every resource type name.
pub const PROVIDER_TYPE_NAME: &str = "gpcore";

/// Provider for the GPCORE cloud API.
///
/// Serves `gpcore_node` and `gpcore_project`.
pub struct GpcoreProvider {
    resources: BTreeMap<String, Box<dyn Resource>>,
}

impl GpcoreProvider {
    /// Create an unconfigured provider with every resource registered.
    pub fn new() -> Self {
        Self::with_resources(vec![
            Box::new(NodeResource::new()),
            Box::new(ProjectResource::new()),
        ])
    }

    /// Create an unconfigured provider serving `resources`.
    pub fn with_resources(resources: Vec<Box<dyn Resource>>) -> Self {
        let resources = resources
            .into_iter()
            .map(|resource| (resource.type_name(PROVIDER_TYPE_NAME), resource))
            .collect();
        Self { resources }
    }

    /// Create a provider whose resources use `client` without going through
    /// [`ProviderService::configure`].
    pub fn with_client(client: Arc<dyn CloudApi>) -> Self {
        let provider = Self::new();
        provider.configure_client(client);
        provider
    }

    /// Hand `client` to every resource.
    pub fn configure_client(&self, client: Arc<dyn CloudApi>) {
        for resource in self.resources.values() {
            resource.configure(Arc::clone(&client));
        }
    }

    fn resource(&self, resource_type: &str) -> Result<&dyn Resource, ProviderError> {
        self.resources
            .get(resource_type)
            .map(|resource| resource.as_ref())
            .ok_or_else(|| ProviderError::UnknownResource(resource_type.to_string()))
    }
}

impl Default for GpcoreProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GpcoreProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GpcoreProvider")
            .field("resources", &self.resources.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[async_trait::async_trait]
impl ProviderService for GpcoreProvider {
    fn schema(&self) -> ProviderSchema {
        self.resources.iter().fold(
            ProviderSchema::new().with_provider_config(ProviderConfig::schema()),
            |schema, (name, resource)| schema.with_resource(name.clone(), resource.schema()),
        )
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            type_name: PROVIDER_TYPE_NAME.to_string(),
            resources: self.resources.keys().cloned().collect(),
        }
    }

    #[instrument(skip(self, config), name = "provider.validate_provider_config")]
    async fn validate_provider_config(&self, config: Value) -> Result<Vec<Diagnostic>, ProviderError> {
        let mut diagnostics = validation::validate(&ProviderConfig::schema(), &config);
        if diagnostics.is_empty() {
            diagnostics.extend(ProviderConfig::from_value(config)?.diagnostics());
        }
        Ok(diagnostics)
    }

    #[instrument(skip(self, config), name = "provider.configure")]
    async fn configure(&self, config: Value) -> Result<Vec<Diagnostic>, ProviderError> {
        debug!("Configure called");
        let config = ProviderConfig::from_value(config)?;
        let diagnostics = config.diagnostics();
        if !diagnostics.is_empty() {
            warn!(diagnostics = diagnostics.len(), "Configure rejected the provider block");
            return Ok(diagnostics);
        }

        let client = config.resolve().and_then(|settings| {
            GrpcCloudClient::connect_lazy(&settings.endpoint, settings.access_token.as_deref())
        });
        match client {
            Ok(client) => {
                self.configure_client(Arc::new(client));
                info!("Configure completed successfully");
                Ok(vec![])
            },
            Err(e) => {
                error!(error = %e, "Configure failed");
                Ok(vec![e.to_diagnostic()])
            },
        }
    }

    #[instrument(skip(self, config), name = "provider.validate_resource_config")]
    async fn validate_resource_config(
        &self,
        resource_type: &str,
        config: Value,
    ) -> Result<Vec<Diagnostic>, ProviderError> {
        let schema = self.resource(resource_type)?.schema();
        let diagnostics = validation::validate(&schema, &config);
        if diagnostics.iter().any(Diagnostic::is_error) {
            warn!(resource_type, diagnostics = diagnostics.len(), "ValidateResourceConfig completed with errors");
        }
        Ok(diagnostics)
    }

    #[instrument(skip(self, state), name = "provider.upgrade_resource_state")]
    async fn upgrade_resource_state(
        &self,
        resource_type: &str,
        version: u64,
        state: Value,
    ) -> Result<Value, ProviderError> {
        let schema = self.resource(resource_type)?.schema();
        if version > schema.version {
            return Err(ProviderError::InvalidState(format!(
                "State version {} is newer than schema version {} of {}",
                version, schema.version, resource_type
            )));
        }
        Ok(state)
    }

    #[instrument(skip(self, prior_state, proposed_state, config), name = "provider.plan")]
    async fn plan(
        &self,
        resource_type: &str,
        prior_state: Option<Value>,
        proposed_state: Value,
        config: Value,
    ) -> Result<PlanResult, ProviderError> {
        let schema = self.resource(resource_type)?.schema();
        let result = plan::plan(&schema, prior_state.as_ref(), &proposed_state, &config);
        debug!(
            resource_type,
            changes = result.changes.len(),
            requires_replace = result.requires_replace,
            "Plan completed"
        );
        Ok(result)
    }

    #[instrument(skip(self, planned_state), name = "provider.create")]
    async fn create(
        &self,
        resource_type: &str,
        planned_state: Value,
    ) -> Result<StateResponse, ProviderError> {
        let result = self.resource(resource_type)?.create(planned_state).await;
        if let Err(e) = &result {
            error!(resource_type, error = %e, "Create failed");
        }
        result
    }

    #[instrument(skip(self, current_state), name = "provider.read")]
    async fn read(
        &self,
        resource_type: &str,
        current_state: Value,
    ) -> Result<StateResponse, ProviderError> {
        let result = self.resource(resource_type)?.read(current_state).await;
        if let Err(e) = &result {
            error!(resource_type, error = %e, "Read failed");
        }
        result
    }

    #[instrument(skip(self, prior_state, planned_state), name = "provider.update")]
    async fn update(
        &self,
        resource_type: &str,
        prior_state: Value,
        planned_state: Value,
    ) -> Result<StateResponse, ProviderError> {
        let result = self
            .resource(resource_type)?
            .update(prior_state, planned_state)
            .await;
        if let Err(e) = &result {
            error!(resource_type, error = %e, "Update failed");
        }
        result
    }

    #[instrument(skip(self, current_state), name = "provider.delete")]
    async fn delete(
        &self,
        resource_type: &str,
        current_state: Value,
    ) -> Result<Vec<Diagnostic>, ProviderError> {
        let result = self.resource(resource_type)?.delete(current_state).await;
        if let Err(e) = &result {
            error!(resource_type, error = %e, "Delete failed");
        }
        result
    }

    #[instrument(skip(self), name = "provider.import_resource")]
    async fn import_resource(
        &self,
        resource_type: &str,
        id: &str,
    ) -> Result<Vec<ImportedResource>, ProviderError> {
        let state = self.resource(resource_type)?.import_state(id)?;
        info!(resource_type, "Import completed");
        Ok(vec![ImportedResource::new(resource_type, state)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud::fake::FakeCloud;
    use crate::schema::DiagnosticSeverity;
    use serde_json::json;

    #[test]
    fn test_registered_resources() {
        let provider = GpcoreProvider::new();
        let metadata = provider.metadata();
        assert_eq!(metadata.type_name, "gpcore");
        assert_eq!(metadata.resources, vec!["gpcore_node", "gpcore_project"]);

        let schema = provider.schema();
        assert!(schema.resources.contains_key("gpcore_node"));
        assert!(schema.provider.attribute("endpoint").is_some());
        assert_eq!(
            format!("{:?}", provider),
            "GpcoreProvider { resources: [\"gpcore_node\", \"gpcore_project\"] }"
        );
    }

    #[tokio::test]
    async fn test_unknown_resource_type() {
        let provider = GpcoreProvider::with_client(Arc::new(FakeCloud::new()));
        let err = provider
            .create("gpcore_volume", json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::UnknownResource(_)));
        assert_eq!(err.to_diagnostic().summary, "Unknown Resource Type");
    }

    #[tokio::test]
    async fn test_configure_with_endpoint() {
        let provider = GpcoreProvider::new();
        let diagnostics = provider
            .configure(json!({"endpoint": "http://127.0.0.1:50051", "access_token": "t"}))
            .await
            .unwrap();
        assert!(diagnostics.is_empty());
    }

    #[tokio::test]
    async fn test_configure_rejects_bad_block() {
        let provider = GpcoreProvider::new();
        let diagnostics = provider
            .configure(json!({"endpoint": "", "access_token": "line\nbreak"}))
            .await
            .unwrap();
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.iter().all(|d| d.severity == DiagnosticSeverity::Error));
    }

    #[tokio::test]
    async fn test_configure_bad_endpoint_is_diagnostic() {
        let provider = GpcoreProvider::new();
        let diagnostics = provider
            .configure(json!({"endpoint": "not a uri"}))
            .await
            .unwrap();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].summary, "Provider Configuration Error");
    }

    #[tokio::test]
    async fn test_validate_provider_config() {
        let provider = GpcoreProvider::new();
        assert!(provider
            .validate_provider_config(json!({"endpoint": "http://localhost:50051"}))
            .await
            .unwrap()
            .is_empty());

        let diagnostics = provider
            .validate_provider_config(json!({"endpoint": 42}))
            .await
            .unwrap();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].attribute.as_deref(), Some("endpoint"));
    }

    #[tokio::test]
    async fn test_validate_resource_config_runs_validators() {
        let provider = GpcoreProvider::new();
        let diagnostics = provider
            .validate_resource_config(
                "gpcore_node",
                json!({
                    "project_id": "0b6f2b6e-5b3c-4a7e-9d55-3f8a2b1c0d4e",
                    "flavour_id": "8a3e4a57-0b5f-4f0b-8f43-1c2d3e4f5a6b",
                    "datacenter_id": "1f0e2d3c-4b5a-4978-8695-a4b3c2d1e0f9",
                    "fqdn": "node1.example.com",
                    "billing_period": "BILLING_PERIOD_WEEKLY",
                    "image_id": "5c6d7e8f-9a0b-4c1d-8e2f-3a4b5c6d7e8f",
                    "ssh_key_ids": ["0b6f2b6e-5b3c-4a7e-9d55-3f8a2b1c0d4e", "nope"],
                }),
            )
            .await
            .unwrap();

        let paths: Vec<_> = diagnostics
            .iter()
            .filter_map(|d| d.attribute.as_deref())
            .collect();
        assert_eq!(paths, vec!["billing_period", "ssh_key_ids.1"]);
        assert_eq!(diagnostics[0].summary, "Invalid Billing Period");
    }

    #[tokio::test]
    async fn test_upgrade_resource_state() {
        let provider = GpcoreProvider::new();
        let state = json!({"id": "x"});
        assert_eq!(
            provider
                .upgrade_resource_state("gpcore_node", 0, state.clone())
                .await
                .unwrap(),
            state
        );
        assert!(provider
            .upgrade_resource_state("gpcore_node", 1, state)
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_import_resource() {
        let provider = GpcoreProvider::new();
        let imported = provider
            .import_resource("gpcore_node", "abc:def")
            .await
            .unwrap();
        assert_eq!(imported.len(), 1);
        assert_eq!(imported[0].resource_type, "gpcore_node");
        assert_eq!(imported[0].state["project_id"], "abc");
        assert_eq!(imported[0].state["id"], "def");

        let err = provider
            .import_resource("gpcore_node", "abc:def:ghi")
            .await
            .unwrap_err();
        assert_eq!(err.to_diagnostic().summary, "Invalid Import ID");
    }
}
