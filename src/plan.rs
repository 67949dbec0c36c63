//! Schema-driven planning.
//!
//! The host proposes a new state; [`plan`] decides which computed values
//! become unknown, lists the attribute changes and flags replacement.

use serde_json::{Map, Value};

use crate::schema::Schema;
use crate::types::{AttributeChange, PlanResult, UNKNOWN_VALUE};

static NULL: Value = Value::Null;

fn get<'a>(object: &'a Value, name: &str) -> &'a Value {
    object.get(name).unwrap_or(&NULL)
}

/// Plan a resource change.
///
/// - `proposed` null: destroy. The planned state is null and every prior
///   attribute is removed.
/// - `prior` absent or null: create. Computed attributes not set in `config`
///   are unknown.
/// - Otherwise update. Computed attributes not set in `config` keep their
///   prior value when nothing changed or when they use state for unknown,
///   and are unknown otherwise. Changing a `force_new` attribute requires
///   replacement, which makes every unset computed attribute unknown.
pub fn plan(schema: &Schema, prior: Option<&Value>, proposed: &Value, config: &Value) -> PlanResult {
    let prior = prior.filter(|p| !p.is_null());

    if proposed.is_null() {
        return match prior {
            Some(prior) => plan_destroy(schema, prior),
            None => PlanResult::no_change(Value::Null),
        };
    }

    let mut planned = proposed.as_object().cloned().unwrap_or_default();
    let unset_computed: Vec<&str> = schema
        .attributes
        .iter()
        .filter(|(name, attr)| attr.flags.computed && get(config, name).is_null())
        .map(|(name, _)| name.as_str())
        .collect();

    let Some(prior) = prior else {
        for name in &unset_computed {
            planned.insert(name.to_string(), Value::String(UNKNOWN_VALUE.to_string()));
        }
        let changes = schema
            .attributes
            .keys()
            .filter_map(|name| match planned.get(name) {
                Some(value) if !value.is_null() => {
                    Some(AttributeChange::added(name.as_str(), value.clone()))
                },
                _ => None,
            })
            .collect();
        return PlanResult::with_changes(Value::Object(planned), changes, false);
    };

    for name in &unset_computed {
        planned.insert(name.to_string(), get(prior, name).clone());
    }

    let configured_changes: Vec<&str> = schema
        .attributes
        .iter()
        .filter(|(name, attr)| {
            attr.flags.configurable() && planned_value(&planned, name) != get(prior, name)
        })
        .map(|(name, _)| name.as_str())
        .collect();

    if configured_changes.is_empty() {
        return PlanResult::no_change(Value::Object(planned));
    }

    let requires_replace = configured_changes
        .iter()
        .any(|name| schema.attribute(name).is_some_and(|attr| attr.force_new));

    for name in &unset_computed {
        let keep = !requires_replace
            && schema
                .attribute(name)
                .is_some_and(|attr| attr.use_state_for_unknown);
        if !keep {
            planned.insert(name.to_string(), Value::String(UNKNOWN_VALUE.to_string()));
        }
    }

    let changes = diff(schema, prior, &planned);
    PlanResult::with_changes(Value::Object(planned), changes, requires_replace)
}

fn planned_value<'a>(planned: &'a Map<String, Value>, name: &str) -> &'a Value {
    planned.get(name).unwrap_or(&NULL)
}

fn diff(schema: &Schema, prior: &Value, planned: &Map<String, Value>) -> Vec<AttributeChange> {
    schema
        .attributes
        .keys()
        .filter_map(|name| {
            let before = get(prior, name);
            let after = planned_value(planned, name);
            if before == after {
                return None;
            }
            Some(match (before.is_null(), after.is_null()) {
                (true, _) => AttributeChange::added(name.as_str(), after.clone()),
                (false, true) => AttributeChange::removed(name.as_str(), before.clone()),
                (false, false) => AttributeChange::modified(name.as_str(), before.clone(), after.clone()),
            })
        })
        .collect()
}

fn plan_destroy(schema: &Schema, prior: &Value) -> PlanResult {
    let changes = schema
        .attributes
        .keys()
        .filter_map(|name| {
            let before = get(prior, name);
            (!before.is_null()).then(|| AttributeChange::removed(name.as_str(), before.clone()))
        })
        .collect();
    PlanResult::with_changes(Value::Null, changes, false)
}
