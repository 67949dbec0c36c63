//! Attribute validators.
//!
//! Validators are attached to schema attributes with
//! [`Attribute::with_validator`](crate::schema::Attribute::with_validator) and
//! run by [`validate`](crate::validation::validate). A null or unknown value is
//! never reported; required-ness is the schema's concern.

use std::fmt;

use serde_json::Value;
use uuid::Uuid;

use crate::cloud::{BillingPeriod, ProjectEnvironment};
use crate::schema::Diagnostic;
use crate::types::is_unknown;

/// A check run against one configured attribute value.
pub trait Validator: Send + Sync + fmt::Debug {
    /// Plain text description of the validator's behavior.
    fn description(&self) -> String;

    /// Markdown description of the validator's behavior.
    fn markdown_description(&self) -> String {
        self.description()
    }

    /// Validate `value` found at `path`, pushing any findings.
    fn validate(&self, path: &str, value: &Value, diagnostics: &mut Vec<Diagnostic>);
}

fn skip(value: &Value) -> bool {
    value.is_null() || is_unknown(value)
}

/// Accepts only the names of a protocol enum, minus its `_UNSPECIFIED` member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValidator {
    title: &'static str,
    plural: &'static str,
    valid: Vec<&'static str>,
}

impl EnumValidator {
    /// Build a validator from enum member names.
    ///
    /// `title` names one value ("billing period"), `plural` the set
    /// ("billing periods").
    pub fn new(
        title: &'static str,
        plural: &'static str,
        names: impl IntoIterator<Item = &'static str>,
    ) -> Self {
        let valid = names
            .into_iter()
            .filter(|name| !name.ends_with("_UNSPECIFIED"))
            .collect();
        Self {
            title,
            plural,
            valid,
        }
    }

    /// Validator for [`BillingPeriod`] names.
    pub fn billing_period() -> Self {
        let names = (0i32..)
            .map_while(|n| BillingPeriod::try_from(n).ok())
            .map(|p| p.as_str_name());
        Self::new("billing period", "billing periods", names)
    }

    /// Validator for [`ProjectEnvironment`] names.
    pub fn project_environment() -> Self {
        let names = (0i32..)
            .map_while(|n| ProjectEnvironment::try_from(n).ok())
            .map(|e| e.as_str_name());
        Self::new("project environment", "environments", names)
    }

    /// The accepted values, in declaration order.
    pub fn valid_values(&self) -> &[&'static str] {
        &self.valid
    }

    fn summary(&self) -> String {
        let title = self
            .title
            .split(' ')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        format!("Invalid {}", title)
    }
}

impl Validator for EnumValidator {
    fn description(&self) -> String {
        format!("Validates the {}.", self.title)
    }

    fn markdown_description(&self) -> String {
        format!("Ensures a valid {} is provided", self.title)
    }

    fn validate(&self, path: &str, value: &Value, diagnostics: &mut Vec<Diagnostic>) {
        if skip(value) {
            return;
        }
        let Some(s) = value.as_str() else {
            // Type mismatches are reported by schema validation.
            return;
        };
        if self.valid.iter().any(|v| *v == s) {
            return;
        }
        diagnostics.push(
            Diagnostic::error(self.summary())
                .with_detail(format!(
                    "Invalid {} specified: {}\nValid {}: {}",
                    self.title,
                    s,
                    self.plural,
                    self.valid.join(", ")
                ))
                .with_attribute(path),
        );
    }
}

fn uuid_error(path: &str, value: &str) -> Diagnostic {
    Diagnostic::error("Invalid UUID")
        .with_detail(format!("Value is not a valid UUID: {}", value))
        .with_attribute(path)
}

/// Requires a string attribute to hold a UUID.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidValidator;

impl Validator for UuidValidator {
    fn description(&self) -> String {
        "Validates that the value is a UUID.".to_string()
    }

    fn validate(&self, path: &str, value: &Value, diagnostics: &mut Vec<Diagnostic>) {
        if skip(value) {
            return;
        }
        if let Some(s) = value.as_str() {
            if Uuid::parse_str(s).is_err() {
                diagnostics.push(uuid_error(path, s));
            }
        }
    }
}

/// Requires every element of a list attribute to be a UUID.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidListValidator;

impl Validator for UuidListValidator {
    fn description(&self) -> String {
        "Validates that every list element is a UUID.".to_string()
    }

    fn validate(&self, path: &str, value: &Value, diagnostics: &mut Vec<Diagnostic>) {
        if skip(value) {
            return;
        }
        let Some(items) = value.as_array() else {
            return;
        };
        for (i, item) in items.iter().enumerate() {
            if skip(item) {
                continue;
            }
            if let Some(s) = item.as_str() {
                if Uuid::parse_str(s).is_err() {
                    diagnostics.push(uuid_error(&format!("{}.{}", path, i), s));
                }
            }
        }
    }
}
