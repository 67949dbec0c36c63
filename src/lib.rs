//! GPCORE Provider
//!
//! An infrastructure provider that maps declarative configuration onto the
//! GPCORE cloud API. The host runtime owns planning, state storage and the
//! dependency graph; this crate fills in the per-resource lifecycle.
//!
//! # Overview
//!
//! - **Resources**: `gpcore_node` and `gpcore_project` ([`resource`])
//! - **Validators**: billing period, project environment and UUID checks ([`validator`])
//! - **Planning**: schema-driven computed values and replacement ([`plan`])
//! - **Cloud API**: prost messages and a tonic client ([`cloud`])
//! - **Host contract**: [`ProviderService`], implemented by [`GpcoreProvider`]
//!
//! # Quick Start
//!
//! ```ignore
//! use gpcore_provider::{init_logging, GpcoreProvider, ProviderService};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     init_logging();
//!
//!     let provider = GpcoreProvider::new();
//!     provider
//!         .configure(json!({"endpoint": "https://api.gpcore.example:443"}))
//!         .await?;
//!
//!     let created = provider
//!         .create("gpcore_project", json!({
//!             "name": "web",
//!             "environment": "PROJECT_ENVIRONMENT_PRODUCTION",
//!         }))
//!         .await?;
//!     println!("{:?}", created.state);
//!     Ok(())
//! }
//! ```
//!
//! # Configuration
//!
//! | Attribute      | Environment fallback  |
//! |----------------|-----------------------|
//! | `endpoint`     | `GPCORE_ENDPOINT`     |
//! | `access_token` | `GPCORE_ACCESS_TOKEN` |
//!
//! # Import
//!
//! - `gpcore_node`: `<project_id>:<node_id>`
//! - `gpcore_project`: `<project_id>`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cloud;
pub mod config;
pub mod error;
pub mod logging;
pub mod plan;
pub mod provider;
pub mod resource;
pub mod schema;
pub mod service;
pub mod testing;
pub mod types;
pub mod validation;
pub mod validator;

// Re-export main types at crate root
pub use config::{ProviderConfig, ACCESS_TOKEN_ENV, ENDPOINT_ENV};
pub use error::ProviderError;
pub use logging::{init_logging, init_logging_with_default, try_init_logging};
pub use provider::{GpcoreProvider, PROVIDER_TYPE_NAME};
pub use schema::ProviderSchema;
pub use service::ProviderService;
pub use types::{
    AttrValue, AttributeChange, ImportedResource, PlanResult, ProviderMetadata, StateResponse,
    UNKNOWN_VALUE,
};
pub use validation::{is_valid, validate, validate_result};

// Re-export async_trait for convenience
pub use async_trait::async_trait;

// Re-export commonly used external types
pub use serde_json;
pub use tonic;
pub use tracing;
