// SPDX-License-Identifier: MIT

//! Variable context supplied by upstream workflow nodes
//!
//! A two-level map from node id to variable name to raw JSON value. The
//! expression engine only reads it; construction belongs to the caller
//! that collected the node outputs.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Read-only variable store keyed by node id, then variable name
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VariableContext {
    #[serde(flatten)]
    nodes: HashMap<String, HashMap<String, Value>>,
}

impl VariableContext {
    /// Create an empty context
    pub fn empty() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }

    /// Record one variable under a node id
    pub fn insert(&mut self, node_id: &str, name: &str, value: Value) {
        self.nodes
            .entry(node_id.to_string())
            .or_default()
            .insert(name.to_string(), value);
    }

    /// All variables of one node
    pub fn node(&self, node_id: &str) -> Option<&HashMap<String, Value>> {
        self.nodes.get(node_id)
    }

    /// A single variable value
    pub fn get(&self, node_id: &str, name: &str) -> Option<&Value> {
        self.nodes.get(node_id)?.get(name)
    }

    /// Node ids present in the context
    pub fn node_ids(&self) -> impl Iterator<Item = &String> {
        self.nodes.keys()
    }
}

impl From<HashMap<String, HashMap<String, Value>>> for VariableContext {
    fn from(nodes: HashMap<String, HashMap<String, Value>>) -> Self {
        Self { nodes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_context() {
        let context = VariableContext::empty();
        assert!(context.node("anything").is_none());
        assert!(context.get("anything", "x").is_none());
    }

    #[test]
    fn test_insert_and_get() {
        let mut context = VariableContext::empty();
        context.insert("N1", "certificate.validity", json!(true));
        context.insert("N1", "certificate.daysLeft", json!(2));

        assert_eq!(context.get("N1", "certificate.validity"), Some(&json!(true)));
        assert_eq!(context.get("N1", "certificate.daysLeft"), Some(&json!(2)));
        assert_eq!(context.node("N1").map(|n| n.len()), Some(2));
        assert!(context.get("N1", "missing").is_none());
    }

    #[test]
    fn test_deserialize_from_json_object() {
        let context: VariableContext = serde_json::from_value(json!({
            "N1": {"certificate.validity": true},
            "N2": {"certificate.daysLeft": 30},
        }))
        .unwrap();

        assert_eq!(context.get("N1", "certificate.validity"), Some(&json!(true)));
        assert_eq!(context.get("N2", "certificate.daysLeft"), Some(&json!(30)));
        assert_eq!(context.node_ids().count(), 2);
    }
}
