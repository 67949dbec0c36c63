//! Provider configuration.
//!
//! The provider block carries the API endpoint and an optional access token.
//! Either may be left out of configuration and supplied through the
//! environment instead.

use serde::Deserialize;
use serde_json::Value;

use crate::error::ProviderError;
use crate::schema::{Attribute, Diagnostic, Schema};
use crate::types::AttrValue;

/// Environment variable consulted when `endpoint` is not configured.
pub const ENDPOINT_ENV: &str = "GPCORE_ENDPOINT";

/// Environment variable consulted when `access_token` is not configured.
pub const ACCESS_TOKEN_ENV: &str = "GPCORE_ACCESS_TOKEN";

/// The provider block as written in configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProviderConfig {
    /// gRPC endpoint of the cloud API, e.g. `https://grpc.example.com:443`.
    #[serde(default)]
    pub endpoint: AttrValue<String>,
    /// Bearer token sent with every call.
    #[serde(default)]
    pub access_token: AttrValue<String>,
}

/// Connection settings after configuration and environment are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// gRPC endpoint.
    pub endpoint: String,
    /// Bearer token, if any.
    pub access_token: Option<String>,
}

impl ProviderConfig {
    /// Schema of the provider block.
    pub fn schema() -> Schema {
        Schema::v0()
            .with_description("Interact with the GPCORE cloud API.")
            .with_attribute(
                "endpoint",
                Attribute::optional_string().with_description(format!(
                    "gRPC endpoint of the cloud API. Defaults to the `{}` environment variable.",
                    ENDPOINT_ENV
                )),
            )
            .with_attribute(
                "access_token",
                Attribute::optional_string()
                    .sensitive()
                    .with_description(format!(
                        "Access token used to authenticate. Defaults to the `{}` environment variable.",
                        ACCESS_TOKEN_ENV
                    )),
            )
    }

    /// Decode the provider block. A null block is an empty configuration.
    pub fn from_value(value: Value) -> Result<Self, ProviderError> {
        if value.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Check the block without touching the environment.
    ///
    /// Only values that can never work are reported; missing values may still
    /// come from the environment at configure time.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        if let AttrValue::Known(endpoint) = &self.endpoint {
            if endpoint.trim().is_empty() {
                diagnostics.push(
                    Diagnostic::error("Invalid Endpoint")
                        .with_detail("The endpoint must not be empty")
                        .with_attribute("endpoint"),
                );
            }
        }
        if let AttrValue::Known(token) = &self.access_token {
            if !is_header_safe(token) {
                diagnostics.push(
                    Diagnostic::error("Invalid Access Token")
                        .with_detail("The access token contains characters that are not allowed in a request header")
                        .with_attribute("access_token"),
                );
            }
        }
        diagnostics
    }

    /// Merge configuration with the process environment.
    pub fn resolve(&self) -> Result<ClientSettings, ProviderError> {
        self.resolve_with(|key| std::env::var(key).ok())
    }

    /// Merge configuration with values from `lookup`.
    pub fn resolve_with(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<ClientSettings, ProviderError> {
        let endpoint = pick("endpoint", &self.endpoint, ENDPOINT_ENV, &lookup)?.ok_or_else(|| {
            ProviderError::Configuration(format!(
                "Missing API endpoint. Set the endpoint attribute or the {} environment variable.",
                ENDPOINT_ENV
            ))
        })?;

        let access_token = pick("access_token", &self.access_token, ACCESS_TOKEN_ENV, &lookup)?;
        if let Some(token) = &access_token {
            if !is_header_safe(token) {
                return Err(ProviderError::Configuration(
                    "The access token contains characters that are not allowed in a request header"
                        .to_string(),
                ));
            }
        }

        Ok(ClientSettings {
            endpoint,
            access_token,
        })
    }
}

fn pick(
    name: &str,
    configured: &AttrValue<String>,
    env: &str,
    lookup: &impl Fn(&str) -> Option<String>,
) -> Result<Option<String>, ProviderError> {
    match configured {
        AttrValue::Unknown => Err(ProviderError::Configuration(format!(
            "The {} attribute is unknown at configure time. Use a value that is known before apply.",
            name
        ))),
        AttrValue::Known(value) if !value.trim().is_empty() => Ok(Some(value.clone())),
        _ => Ok(lookup(env).filter(|value| !value.trim().is_empty())),
    }
}

fn is_header_safe(value: &str) -> bool {
    value.bytes().all(|b| b == b'\t' || (0x20..0x7f).contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UNKNOWN_VALUE;
    use serde_json::json;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_from_value() {
        let config = ProviderConfig::from_value(json!({
            "endpoint": "https://grpc.example.com:443",
            "access_token": "secret",
        }))
        .unwrap();
        assert_eq!(
            config.endpoint,
            AttrValue::Known("https://grpc.example.com:443".to_string())
        );

        let config = ProviderConfig::from_value(Value::Null).unwrap();
        assert!(config.endpoint.is_null());
        assert!(config.access_token.is_null());

        assert!(ProviderConfig::from_value(json!({"endpoint": 42})).is_err());
    }

    #[test]
    fn test_resolve_prefers_configuration() {
        let config = ProviderConfig {
            endpoint: AttrValue::Known("https://configured:443".to_string()),
            access_token: AttrValue::Known("configured-token".to_string()),
        };
        let settings = config
            .resolve_with(|_| Some("from-env".to_string()))
            .unwrap();
        assert_eq!(settings.endpoint, "https://configured:443");
        assert_eq!(settings.access_token.as_deref(), Some("configured-token"));
    }

    #[test]
    fn test_resolve_falls_back_to_environment() {
        let settings = ProviderConfig::default()
            .resolve_with(|key| match key {
                ENDPOINT_ENV => Some("https://env:443".to_string()),
                ACCESS_TOKEN_ENV => Some("env-token".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(settings.endpoint, "https://env:443");
        assert_eq!(settings.access_token.as_deref(), Some("env-token"));
    }

    #[test]
    fn test_resolve_missing_endpoint() {
        let err = ProviderConfig::default().resolve_with(no_env).unwrap_err();
        assert!(matches!(err, ProviderError::Configuration(_)));
        assert!(err.message().contains(ENDPOINT_ENV));
    }

    #[test]
    fn test_resolve_unknown_value() {
        let config = ProviderConfig::from_value(json!({"endpoint": UNKNOWN_VALUE})).unwrap();
        let err = config.resolve_with(no_env).unwrap_err();
        assert!(err.message().contains("unknown"));
    }

    #[test]
    fn test_token_optional() {
        let config = ProviderConfig {
            endpoint: AttrValue::Known("http://localhost:50051".to_string()),
            access_token: AttrValue::Null,
        };
        assert_eq!(config.resolve_with(no_env).unwrap().access_token, None);
    }

    #[test]
    fn test_bad_token() {
        let config = ProviderConfig {
            endpoint: AttrValue::Known("http://localhost:50051".to_string()),
            access_token: AttrValue::Known("bad\ntoken".to_string()),
        };
        assert!(config.resolve_with(no_env).is_err());

        let diagnostics = config.diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].attribute.as_deref(), Some("access_token"));
    }

    #[test]
    fn test_diagnostics_empty_endpoint() {
        let config = ProviderConfig {
            endpoint: AttrValue::Known("  ".to_string()),
            access_token: AttrValue::Null,
        };
        let diagnostics = config.diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].summary, "Invalid Endpoint");

        assert!(ProviderConfig::default().diagnostics().is_empty());
    }

    #[test]
    fn test_schema_marks_token_sensitive() {
        let schema = ProviderConfig::schema();
        assert!(schema.attribute("access_token").unwrap().flags.sensitive);
        assert!(schema.attribute("endpoint").unwrap().flags.optional);
    }
}
