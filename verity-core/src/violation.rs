//! Violations and the validation failure type

use crate::constraint::Constraint;
use crate::value::Value;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Record of one failed constraint check against one property's value.
///
/// `property` is the dot-delimited path of the field within the root
/// object graph (e.g. `"address.latitude"`). `value` is the snapshot
/// taken when the check ran, `None` when the property was absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub property: String,
    pub value: Option<Value>,
    pub constraint: Constraint,
}

impl Violation {
    pub fn new(property: impl Into<String>, value: Option<Value>, constraint: Constraint) -> Self {
        Self {
            property: property.into(),
            value,
            constraint,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.constraint.name())
    }
}

/// Validation failure carrying the complete set of violations collected
/// during one `validate` call, in check order. Never partial: either a
/// call succeeds silently or it fails with every violation it found.
#[derive(Debug, Clone, Error)]
#[error("validation failed with {} violation(s)", violations.len())]
pub struct ConstraintViolationError {
    pub violations: Vec<Violation>,
}

impl ConstraintViolationError {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations recorded for one property path.
    pub fn property_violations(&self, property: &str) -> Vec<&Violation> {
        self.violations
            .iter()
            .filter(|v| v.property == property)
            .collect()
    }

    /// JSON representation of the full report.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "violations": self.violations.iter().map(|v| {
                serde_json::json!({
                    "property": v.property,
                    "value": v.value,
                    "constraint": v.constraint.name(),
                    "params": v.constraint.params()
                        .into_iter()
                        .map(|(k, v)| (k.to_string(), serde_json::Value::String(v)))
                        .collect::<serde_json::Map<String, serde_json::Value>>(),
                })
            }).collect::<Vec<_>>()
        })
    }
}
