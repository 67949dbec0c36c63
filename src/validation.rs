//! Schema validation helpers.
//!
//! This module validates a configuration `serde_json::Value` against a
//! [`Schema`]: attribute types, required attributes, and the validators
//! attached to each attribute.
//!
//! # Example
//!
//! ```
//! use gpcore_provider::schema::{Attribute, Schema};
//! use gpcore_provider::validation::validate;
//! use gpcore_provider::validator::EnumValidator;
//! use serde_json::json;
//!
//! let schema = Schema::v0().with_attribute(
//!     "billing_period",
//!     Attribute::required_string().with_validator(EnumValidator::billing_period()),
//! );
//!
//! let diagnostics = validate(&schema, &json!({"billing_period": "BILLING_PERIOD_HOURLY"}));
//! assert!(diagnostics.is_empty());
//!
//! let diagnostics = validate(&schema, &json!({"billing_period": "WEEKLY"}));
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].attribute, Some("billing_period".to_string()));
//! ```

use crate::schema::{Attribute, AttributeType, Diagnostic, Schema};
use crate::types::is_unknown;
use serde_json::Value;

/// Validate a JSON value against a schema.
///
/// Returns a list of diagnostics for any validation errors found.
/// An empty list means the value is valid.
///
/// # Validation Rules
///
/// - Required attributes must be present and non-null
/// - Optional attributes may be absent or null
/// - Computed-only attributes are skipped (provider sets these)
/// - Unknown values pass every check
/// - Attribute types must match the schema
/// - Attached validators run only when the type check passed
pub fn validate(schema: &Schema, value: &Value) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    let obj = match value {
        Value::Object(map) => map,
        Value::Null => return diagnostics,
        _ => {
            diagnostics.push(
                Diagnostic::error("Expected object")
                    .with_detail(format!("Got {}", value_type_name(value))),
            );
            return diagnostics;
        },
    };

    for (name, attr) in &schema.attributes {
        validate_attribute(attr, obj.get(name), name, &mut diagnostics);
    }
    diagnostics
}

/// Validate a JSON value against a schema, returning Ok if valid or Err with diagnostics.
///
/// This is a convenience wrapper around [`validate`] that returns a Result.
pub fn validate_result(schema: &Schema, value: &Value) -> Result<(), Vec<Diagnostic>> {
    let diagnostics = validate(schema, value);
    if diagnostics.is_empty() {
        Ok(())
    } else {
        Err(diagnostics)
    }
}

/// Check if a JSON value is valid against a schema.
///
/// Returns `true` if valid, `false` otherwise.
/// Use [`validate`] to get detailed error information.
pub fn is_valid(schema: &Schema, value: &Value) -> bool {
    validate(schema, value).is_empty()
}

fn validate_attribute(
    attr: &Attribute,
    value: Option<&Value>,
    path: &str,
    diagnostics: &mut Vec<Diagnostic>,
) {
    // Skip computed-only attributes (provider sets these)
    if !attr.flags.configurable() {
        return;
    }

    match value {
        None | Some(Value::Null) => {
            if attr.flags.required {
                diagnostics.push(
                    Diagnostic::error(format!("Missing required attribute '{}'", path))
                        .with_detail("This attribute is required and must be provided")
                        .with_attribute(path),
                );
            }
        },
        Some(v) if is_unknown(v) => {},
        Some(v) => {
            let before = diagnostics.len();
            validate_attribute_type(&attr.attr_type, v, path, diagnostics);
            if diagnostics.len() == before {
                for validator in &attr.validators {
                    validator.validate(path, v, diagnostics);
                }
            }
        },
    }
}

fn validate_attribute_type(
    attr_type: &AttributeType,
    value: &Value,
    path: &str,
    diagnostics: &mut Vec<Diagnostic>,
) {
    if is_unknown(value) {
        return;
    }
    match attr_type {
        AttributeType::String => {
            if !value.is_string() {
                diagnostics.push(type_error(path, "string", value));
            }
        },
        AttributeType::List(element_type) => {
            if let Some(arr) = value.as_array() {
                for (i, elem) in arr.iter().enumerate() {
                    let elem_path = format!("{}.{}", path, i);
                    validate_attribute_type(element_type, elem, &elem_path, diagnostics);
                }
            } else {
                diagnostics.push(type_error(path, "list", value));
            }
        },
        AttributeType::Map(value_type) => {
            if let Some(obj) = value.as_object() {
                for (key, val) in obj {
                    let key_path = format!("{}.{}", path, key);
                    validate_attribute_type(value_type, val, &key_path, diagnostics);
                }
            } else {
                diagnostics.push(type_error(path, "map", value));
            }
        },
    }
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn type_error(path: &str, expected: &str, got: &Value) -> Diagnostic {
    Diagnostic::error(format!("Invalid type for attribute '{}'", path))
        .with_detail(format!(
            "Expected {}, got {}",
            expected,
            value_type_name(got)
        ))
        .with_attribute(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UNKNOWN_VALUE;
    use crate::validator::{EnumValidator, UuidListValidator, UuidValidator};
    use serde_json::json;

    const UUID_A: &str = "0b6f2b6e-5b3c-4a7e-9d55-3f8a2b1c0d4e";

    #[test]
    fn test_validate_required_string() {
        let schema = Schema::v0().with_attribute("fqdn", Attribute::required_string());

        // Valid
        let diagnostics = validate(&schema, &json!({"fqdn": "node.example.com"}));
        assert!(diagnostics.is_empty());

        // Missing required
        let diagnostics = validate(&schema, &json!({}));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].attribute, Some("fqdn".to_string()));

        // Null value
        let diagnostics = validate(&schema, &json!({"fqdn": null}));
        assert_eq!(diagnostics.len(), 1);

        // Wrong type
        let diagnostics = validate(&schema, &json!({"fqdn": 123}));
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].summary.contains("Invalid type"));

        // Unknown until apply
        let diagnostics = validate(&schema, &json!({"fqdn": UNKNOWN_VALUE}));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_validate_optional_attribute() {
        let schema = Schema::v0().with_attribute("user_data", Attribute::optional_string());

        assert!(validate(&schema, &json!({"user_data": "#cloud-config"})).is_empty());
        assert!(validate(&schema, &json!({})).is_empty());
        assert!(validate(&schema, &json!({"user_data": null})).is_empty());
        assert_eq!(validate(&schema, &json!({"user_data": true})).len(), 1);
    }

    #[test]
    fn test_validate_computed_attribute_skipped() {
        let schema = Schema::v0().with_attribute("id", Attribute::computed_string());

        assert!(validate(&schema, &json!({})).is_empty());
        assert!(validate(&schema, &json!({"id": 123})).is_empty());
    }

    #[test]
    fn test_validate_list() {
        let schema = Schema::v0().with_attribute("ssh_key_ids", Attribute::optional_string_list());

        assert!(validate(&schema, &json!({"ssh_key_ids": ["a", "b"]})).is_empty());
        assert!(validate(&schema, &json!({"ssh_key_ids": []})).is_empty());

        let diagnostics = validate(&schema, &json!({"ssh_key_ids": ["a", 123, "c"]}));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].attribute, Some("ssh_key_ids.1".to_string()));

        let diagnostics = validate(&schema, &json!({"ssh_key_ids": "not a list"}));
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_validate_map() {
        let schema = Schema::v0().with_attribute("tags", Attribute::optional_string_map());

        let diagnostics = validate(&schema, &json!({"tags": {"env": "prod", "app": "web"}}));
        assert!(diagnostics.is_empty());

        let diagnostics = validate(&schema, &json!({"tags": {"env": "prod", "count": 42}}));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].attribute, Some("tags.count".to_string()));
    }

    #[test]
    fn test_attached_validators_run() {
        let schema = Schema::v0()
            .with_attribute(
                "billing_period",
                Attribute::required_string().with_validator(EnumValidator::billing_period()),
            )
            .with_attribute(
                "project_id",
                Attribute::required_string().with_validator(UuidValidator),
            )
            .with_attribute(
                "ssh_key_ids",
                Attribute::optional_string_list().with_validator(UuidListValidator),
            );

        let diagnostics = validate(
            &schema,
            &json!({
                "billing_period": "BILLING_PERIOD_MONTHLY",
                "project_id": UUID_A,
                "ssh_key_ids": [UUID_A],
            }),
        );
        assert!(diagnostics.is_empty());

        let diagnostics = validate(
            &schema,
            &json!({
                "billing_period": "WEEKLY",
                "project_id": "nope",
                "ssh_key_ids": [UUID_A, "bad"],
            }),
        );
        assert_eq!(diagnostics.len(), 3);
        let paths: Vec<_> = diagnostics
            .iter()
            .filter_map(|d| d.attribute.as_deref())
            .collect();
        assert!(paths.contains(&"billing_period"));
        assert!(paths.contains(&"project_id"));
        assert!(paths.contains(&"ssh_key_ids.1"));
    }

    #[test]
    fn test_validators_skip_after_type_error() {
        let schema = Schema::v0().with_attribute(
            "project_id",
            Attribute::required_string().with_validator(UuidValidator),
        );

        let diagnostics = validate(&schema, &json!({"project_id": 42}));
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].summary.contains("Invalid type"));
    }

    #[test]
    fn test_validate_multiple_errors() {
        let schema = Schema::v0()
            .with_attribute("fqdn", Attribute::required_string())
            .with_attribute("image_id", Attribute::required_string())
            .with_attribute("tags", Attribute::optional_string_map());

        let diagnostics = validate(
            &schema,
            &json!({"fqdn": 123, "image_id": ["x"], "tags": "env=prod"}),
        );
        assert_eq!(diagnostics.len(), 3);
    }

    #[test]
    fn test_is_valid_helper() {
        let schema = Schema::v0().with_attribute("fqdn", Attribute::required_string());

        assert!(is_valid(&schema, &json!({"fqdn": "node.example.com"})));
        assert!(!is_valid(&schema, &json!({})));
    }

    #[test]
    fn test_validate_result_helper() {
        let schema = Schema::v0().with_attribute("fqdn", Attribute::required_string());

        assert!(validate_result(&schema, &json!({"fqdn": "node.example.com"})).is_ok());

        let result = validate_result(&schema, &json!({}));
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().len(), 1);
    }

    #[test]
    fn test_validate_root_not_object() {
        let schema = Schema::v0().with_attribute("fqdn", Attribute::required_string());

        let diagnostics = validate(&schema, &json!("not an object"));
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].summary.contains("Expected object"));
    }
}
