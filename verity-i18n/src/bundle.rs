//! Message bundles
//!
//! A [`MessageBundle`] maps message keys to templates for one locale.
//! Bundles load from JSON, where nested objects flatten into dot-joined
//! keys: `{"constraints": {"equals": "..."}}` yields
//! `constraints.equals`.

use crate::Result;
use std::collections::HashMap;

/// Messages for a single locale, keyed by message ID.
#[derive(Debug, Clone, Default)]
pub struct MessageBundle {
    messages: HashMap<String, String>,
}

impl MessageBundle {
    /// Create a new empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let data: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        let mut bundle = Self::new();
        flatten_into(&mut bundle.messages, None, &data);
        Ok(bundle)
    }

    /// Add a message template.
    pub fn add(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.messages.insert(key.into(), template.into());
    }

    /// Get a message template.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(|s| s.as_str())
    }

    /// Check whether the bundle has a template for `key`.
    pub fn has(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    /// All message keys.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.messages.keys()
    }

    /// Merge `other` into this bundle, overriding existing keys.
    pub fn merge(&mut self, other: MessageBundle) {
        self.messages.extend(other.messages);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

fn flatten_into(
    messages: &mut HashMap<String, String>,
    prefix: Option<&str>,
    data: &serde_json::Map<String, serde_json::Value>,
) {
    for (key, value) in data {
        let full_key = match prefix {
            Some(prefix) => format!("{}.{}", prefix, key),
            None => key.clone(),
        };
        match value {
            serde_json::Value::String(s) => {
                messages.insert(full_key, s.clone());
            }
            serde_json::Value::Object(nested) => {
                flatten_into(messages, Some(&full_key), nested);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_keys() {
        let bundle = MessageBundle::from_json(r#"{"constraints.null": "Must be null"}"#).unwrap();
        assert_eq!(bundle.get("constraints.null"), Some("Must be null"));
    }

    #[test]
    fn test_nested_keys_flatten() {
        let json = r#"{
            "constraints": {
                "equals": "Must be equal to {value}",
                "size": {
                    "min": "Size must be greater than or equal to {min}"
                }
            }
        }"#;
        let bundle = MessageBundle::from_json(json).unwrap();
        assert_eq!(bundle.get("constraints.equals"), Some("Must be equal to {value}"));
        assert_eq!(
            bundle.get("constraints.size.min"),
            Some("Size must be greater than or equal to {min}")
        );
    }

    #[test]
    fn test_merge_overrides() {
        let mut base = MessageBundle::new();
        base.add("a", "one");
        base.add("b", "two");

        let mut over = MessageBundle::new();
        over.add("b", "override");
        base.merge(over);

        assert_eq!(base.get("a"), Some("one"));
        assert_eq!(base.get("b"), Some("override"));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(MessageBundle::from_json("not json").is_err());
    }
}
