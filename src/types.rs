//! Value and response types shared by the provider and its resources.

use serde::de::{DeserializeOwned, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ProviderError;
use crate::schema::{Diagnostic, DiagnosticSeverity};

/// Marker the host uses for a value that will only be known after apply.
pub const UNKNOWN_VALUE: &str = "74D93920-ED26-11E3-AC10-0800200C9A66";

/// Whether a raw JSON value is the unknown marker.
pub fn is_unknown(value: &Value) -> bool {
    matches!(value, Value::String(s) if s == UNKNOWN_VALUE)
}

/// A single attribute value as seen in configuration, plan or state.
///
/// `Null` covers both an explicit `null` and a missing key, so model structs
/// use `#[serde(default)]` on every field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue<T> {
    /// Not known until apply.
    Unknown,
    /// Explicitly absent.
    Null,
    /// A concrete value.
    Known(T),
}

impl<T> Default for AttrValue<T> {
    fn default() -> Self {
        Self::Null
    }
}

impl<T> AttrValue<T> {
    /// Returns `true` for [`AttrValue::Unknown`].
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Returns `true` for [`AttrValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for [`AttrValue::Known`].
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Borrow the concrete value, if any.
    pub fn as_known(&self) -> Option<&T> {
        match self {
            Self::Known(v) => Some(v),
            _ => None,
        }
    }

    /// Take the concrete value, if any.
    pub fn into_known(self) -> Option<T> {
        match self {
            Self::Known(v) => Some(v),
            _ => None,
        }
    }
}

impl<T: Default + Clone> AttrValue<T> {
    /// The concrete value, or `T::default()` for unknown and null.
    pub fn value_or_default(&self) -> T {
        self.as_known().cloned().unwrap_or_default()
    }
}

impl<T: DeserializeOwned> AttrValue<T> {
    /// Decode from a raw JSON value.
    pub fn from_json(value: Value) -> Result<Self, serde_json::Error> {
        match value {
            Value::Null => Ok(Self::Null),
            ref v if is_unknown(v) => Ok(Self::Unknown),
            other => serde_json::from_value(other).map(Self::Known),
        }
    }
}

impl<T> From<Option<T>> for AttrValue<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Known)
    }
}

impl<T: Serialize> Serialize for AttrValue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unknown => serializer.serialize_str(UNKNOWN_VALUE),
            Self::Null => serializer.serialize_none(),
            Self::Known(v) => v.serialize(serializer),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for AttrValue<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Self::from_json(raw).map_err(serde::de::Error::custom)
    }
}

/// A change to a single attribute during a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeChange {
    /// The path to the attribute that changed.
    pub path: String,
    /// The value before the change (None if creating).
    pub before: Option<Value>,
    /// The value after the change (None if deleting).
    pub after: Option<Value>,
}

impl AttributeChange {
    /// Create a new attribute change.
    pub fn new(path: impl Into<String>, before: Option<Value>, after: Option<Value>) -> Self {
        Self {
            path: path.into(),
            before,
            after,
        }
    }

    /// Create a change for a new attribute.
    pub fn added(path: impl Into<String>, value: Value) -> Self {
        Self::new(path, None, Some(value))
    }

    /// Create a change for a removed attribute.
    pub fn removed(path: impl Into<String>, value: Value) -> Self {
        Self::new(path, Some(value), None)
    }

    /// Create a change for a modified attribute.
    pub fn modified(path: impl Into<String>, before: Value, after: Value) -> Self {
        Self::new(path, Some(before), Some(after))
    }
}

/// The result of a plan operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResult {
    /// The planned state after the operation.
    pub planned_state: Value,
    /// The list of attribute changes.
    pub changes: Vec<AttributeChange>,
    /// Whether the resource requires replacement.
    pub requires_replace: bool,
}

impl PlanResult {
    /// Create a plan result with no changes.
    pub fn no_change(state: Value) -> Self {
        Self {
            planned_state: state,
            changes: Vec::new(),
            requires_replace: false,
        }
    }

    /// Create a plan result with changes.
    pub fn with_changes(
        planned_state: Value,
        changes: Vec<AttributeChange>,
        requires_replace: bool,
    ) -> Self {
        Self {
            planned_state,
            changes,
            requires_replace,
        }
    }
}

/// New state plus diagnostics, returned by create, read and update.
///
/// `state: None` tells the host to drop the resource from its state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StateResponse {
    /// The state to persist.
    pub state: Option<Value>,
    /// Warnings (and, for folded errors, errors) to render.
    pub diagnostics: Vec<Diagnostic>,
}

impl StateResponse {
    /// Respond with new state and no diagnostics.
    pub fn new(state: Value) -> Self {
        Self {
            state: Some(state),
            diagnostics: Vec::new(),
        }
    }

    /// Respond by removing the resource from state.
    pub fn removed() -> Self {
        Self::default()
    }

    /// Attach a diagnostic.
    pub fn with_diagnostic(mut self, diagnostic: Diagnostic) -> Self {
        self.diagnostics.push(diagnostic);
        self
    }

    /// Fold an operation result into a response.
    ///
    /// An error never carries state: it becomes a single error diagnostic.
    pub fn from_result(result: Result<StateResponse, ProviderError>) -> Self {
        result.unwrap_or_else(|err| Self::removed().with_diagnostic(err.to_diagnostic()))
    }

    /// Whether any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == DiagnosticSeverity::Error)
    }
}

/// An imported resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportedResource {
    /// The resource type.
    pub resource_type: String,
    /// The imported state.
    pub state: Value,
}

impl ImportedResource {
    /// Create a new imported resource.
    pub fn new(resource_type: impl Into<String>, state: Value) -> Self {
        Self {
            resource_type: resource_type.into(),
            state,
        }
    }
}

/// Provider metadata returned by GetMetadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProviderMetadata {
    /// The provider's type name prefix, e.g. `gpcore`.
    pub type_name: String,
    /// List of resource type names.
    pub resources: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[derive(Debug, Default, Serialize, Deserialize)]
    struct Model {
        #[serde(default)]
        name: AttrValue<String>,
        #[serde(default)]
        ids: AttrValue<Vec<String>>,
        #[serde(default)]
        tags: AttrValue<BTreeMap<String, String>>,
    }

    #[test]
    fn test_attr_value_decoding() {
        let model: Model = serde_json::from_value(json!({
            "name": UNKNOWN_VALUE,
            "ids": ["a", "b"],
        }))
        .unwrap();

        assert!(model.name.is_unknown());
        assert_eq!(model.ids.as_known().unwrap().len(), 2);
        assert!(model.tags.is_null());
    }

    #[test]
    fn test_attr_value_encoding() {
        let model = Model {
            name: AttrValue::Unknown,
            ids: AttrValue::Null,
            tags: AttrValue::Known(BTreeMap::from([("env".to_string(), "prod".to_string())])),
        };

        let value = serde_json::to_value(&model).unwrap();
        assert_eq!(value["name"], UNKNOWN_VALUE);
        assert!(value["ids"].is_null());
        assert_eq!(value["tags"]["env"], "prod");
    }

    #[test]
    fn test_attr_value_helpers() {
        let known = AttrValue::Known("x".to_string());
        assert!(known.is_known());
        assert_eq!(known.value_or_default(), "x");
        assert_eq!(known.into_known(), Some("x".to_string()));

        let null: AttrValue<String> = None.into();
        assert!(null.is_null());
        assert_eq!(null.value_or_default(), "");

        assert!(AttrValue::<String>::Unknown.as_known().is_none());
    }

    #[test]
    fn test_attr_value_type_mismatch() {
        assert!(AttrValue::<Vec<String>>::from_json(json!(42)).is_err());
        // The marker string is still a valid plain string for list-typed attrs.
        assert!(AttrValue::<Vec<String>>::from_json(json!(UNKNOWN_VALUE))
            .unwrap()
            .is_unknown());
    }

    #[test]
    fn test_attribute_change_constructors() {
        let added = AttributeChange::added("fqdn", json!("node.example.com"));
        assert!(added.before.is_none());
        assert_eq!(added.after, Some(json!("node.example.com")));

        let removed = AttributeChange::removed("fqdn", json!("old"));
        assert_eq!(removed.before, Some(json!("old")));
        assert!(removed.after.is_none());

        let modified = AttributeChange::modified("fqdn", json!("a"), json!("b"));
        assert_eq!(modified.before, Some(json!("a")));
        assert_eq!(modified.after, Some(json!("b")));
    }

    #[test]
    fn test_plan_result() {
        let no_change = PlanResult::no_change(json!({"id": "123"}));
        assert!(no_change.changes.is_empty());
        assert!(!no_change.requires_replace);

        let with_changes = PlanResult::with_changes(
            json!({"id": "123", "fqdn": "new"}),
            vec![AttributeChange::modified("fqdn", json!("old"), json!("new"))],
            false,
        );
        assert_eq!(with_changes.changes.len(), 1);
    }

    #[test]
    fn test_state_response_from_error() {
        let resp = StateResponse::from_result(Err(ProviderError::DeadlineExceeded(
            "Unable to get node IP address".to_string(),
        )));
        assert!(resp.state.is_none());
        assert!(resp.has_errors());
        assert_eq!(resp.diagnostics[0].summary, "Timeout Error");
    }

    #[test]
    fn test_state_response_removed_with_warning() {
        let resp = StateResponse::removed().with_diagnostic(Diagnostic::warning("gone"));
        assert!(resp.state.is_none());
        assert!(!resp.has_errors());

        let ok = StateResponse::from_result(Ok(StateResponse::new(json!({"id": "1"}))));
        assert_eq!(ok.state, Some(json!({"id": "1"})));
    }

    #[test]
    fn test_imported_resource() {
        let imported = ImportedResource::new("gpcore_node", json!({"id": "node-1"}));
        assert_eq!(imported.resource_type, "gpcore_node");
        assert_eq!(imported.state["id"], "node-1");
    }
}
