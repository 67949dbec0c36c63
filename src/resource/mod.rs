//! Resource handlers.
//!
//! Every managed object type implements [`Resource`]. The provider owns one
//! handler per type and routes host calls to it by type name.

mod node;
mod project;

pub use node::{primary_ip, NodeModel, NodeResource, PollSettings};
pub use project::{ProjectModel, ProjectResource};

use std::fmt;
use std::sync::{Arc, OnceLock};

use serde_json::Value;
use tracing::warn;

use crate::cloud::CloudApi;
use crate::error::ProviderError;
use crate::schema::{Diagnostic, Schema};
use crate::types::{AttrValue, StateResponse};

/// Lifecycle callbacks for one resource type.
///
/// A handler starts unconfigured; every remote operation fails with
/// [`ProviderError::Unconfigured`] until [`Resource::configure`] ran.
#[async_trait::async_trait]
pub trait Resource: Send + Sync + 'static {
    /// Full type name, e.g. `gpcore_node` for provider type name `gpcore`.
    fn type_name(&self, provider_type_name: &str) -> String;

    /// Attribute schema.
    fn schema(&self) -> Schema;

    /// Hand the shared API client to the handler.
    fn configure(&self, client: Arc<dyn CloudApi>);

    /// Create the object described by `planned`.
    async fn create(&self, planned: Value) -> Result<StateResponse, ProviderError>;

    /// Refresh `current` from the API.
    async fn read(&self, current: Value) -> Result<StateResponse, ProviderError>;

    /// Apply `planned` to an existing object.
    async fn update(&self, prior: Value, planned: Value) -> Result<StateResponse, ProviderError>;

    /// Delete the object. Returned diagnostics are warnings only.
    async fn delete(&self, current: Value) -> Result<Vec<Diagnostic>, ProviderError>;

    /// Seed state from an import identifier.
    fn import_state(&self, id: &str) -> Result<Value, ProviderError>;
}

/// Set-once holder for the client a handler receives at configure time.
#[derive(Default)]
pub(crate) struct ClientSlot(OnceLock<Arc<dyn CloudApi>>);

impl ClientSlot {
    pub(crate) fn set(&self, client: Arc<dyn CloudApi>) {
        if self.0.set(client).is_err() {
            warn!("resource already configured, keeping the existing client");
        }
    }

    pub(crate) fn get(&self) -> Result<&dyn CloudApi, ProviderError> {
        self.0.get().map(|client| client.as_ref()).ok_or_else(|| {
            ProviderError::Unconfigured(
                "Expected a configured provider. Configure the provider before managing resources."
                    .to_string(),
            )
        })
    }
}

impl fmt::Debug for ClientSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClientSlot")
            .field(&self.0.get().map(|_| "configured").unwrap_or("unconfigured"))
            .finish()
    }
}

/// A string attribute that must hold a concrete value for the operation.
pub(crate) fn known_string(value: &AttrValue<String>, name: &str) -> Result<String, ProviderError> {
    value.as_known().cloned().ok_or_else(|| {
        ProviderError::Validation(format!(
            "The {} attribute must be known before apply",
            name
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud::fake::FakeCloud;

    #[test]
    fn test_client_slot() {
        let slot = ClientSlot::default();
        let err = slot.get().err().unwrap();
        assert!(matches!(err, ProviderError::Unconfigured(_)));
        assert_eq!(err.to_diagnostic().summary, "Unconfigured Provider");
        assert_eq!(format!("{:?}", slot), "ClientSlot(\"unconfigured\")");

        slot.set(Arc::new(FakeCloud::new()));
        assert!(slot.get().is_ok());

        // A second client is ignored.
        slot.set(Arc::new(FakeCloud::new()));
        assert!(slot.get().is_ok());
    }

    #[test]
    fn test_known_string() {
        assert_eq!(
            known_string(&AttrValue::Known("x".to_string()), "fqdn").unwrap(),
            "x"
        );
        assert!(known_string(&AttrValue::Unknown, "fqdn").is_err());
        assert!(known_string(&AttrValue::Null, "fqdn").is_err());
    }
}
