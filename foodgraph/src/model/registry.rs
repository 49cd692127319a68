// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Model registry: validated set of node and edge types
//!
//! The registry is the only way to obtain a model. Construction checks every
//! invariant up front, so a `ModelRegistry` value always has unique node type
//! names and edges whose endpoints resolve.

use super::catalog;
use super::types::{EdgeType, ModelStats, NodeType};
use crate::error::{EdgeEnd, ModelIntegrityError, Result};
use log::debug;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Directed graph of node type names connected by relationship labels
pub type ModelGraph = DiGraph<String, String>;

/// On-disk shape of a model document
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ModelDocument {
    nodes: Vec<NodeType>,
    #[serde(default)]
    edges: Vec<EdgeType>,
}

/// Validated, read-only description of the graph model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelRegistry {
    nodes: Vec<NodeType>,
    edges: Vec<EdgeType>,
}

impl ModelRegistry {
    /// Build a registry, rejecting duplicate node types and dangling edges
    pub fn new(
        nodes: Vec<NodeType>,
        edges: Vec<EdgeType>,
    ) -> std::result::Result<Self, ModelIntegrityError> {
        let registry = Self { nodes, edges };
        registry.validate()?;
        debug!(
            "model registry ready: {} node types, {} edge types",
            registry.nodes.len(),
            registry.edges.len()
        );
        Ok(registry)
    }

    /// The built-in food delivery model
    pub fn food_delivery() -> Self {
        // Validity of the literals is asserted by test_food_delivery_model_is_valid
        Self {
            nodes: catalog::food_delivery_nodes(),
            edges: catalog::food_delivery_edges(),
        }
    }

    /// Parse a JSON model document and validate it
    pub fn from_json_str(json: &str) -> Result<Self> {
        let doc: ModelDocument = serde_json::from_str(json)?;
        Ok(Self::new(doc.nodes, doc.edges)?)
    }

    /// Load a JSON model document from disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        debug!("loading model from {:?}", path.as_ref());
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn nodes(&self) -> &[NodeType] {
        &self.nodes
    }

    pub fn edges(&self) -> &[EdgeType] {
        &self.edges
    }

    /// Look up a node type by name
    pub fn node(&self, name: &str) -> Option<&NodeType> {
        self.nodes.iter().find(|n| n.name == name)
    }

    pub fn stats(&self) -> ModelStats {
        ModelStats {
            node_types: self.nodes.len(),
            edge_types: self.edges.len(),
        }
    }

    /// Check every registry invariant
    pub fn validate(&self) -> std::result::Result<(), ModelIntegrityError> {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for (idx, node) in self.nodes.iter().enumerate() {
            if seen.insert(node.name.as_str(), idx).is_some() {
                return Err(ModelIntegrityError::DuplicateNodeType(node.name.clone()));
            }
        }

        for edge in &self.edges {
            if edge.relationship.trim().is_empty() {
                return Err(ModelIntegrityError::EmptyRelationship {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                });
            }
            for (end, name) in [(EdgeEnd::From, &edge.from), (EdgeEnd::To, &edge.to)] {
                if !seen.contains_key(name.as_str()) {
                    return Err(ModelIntegrityError::DanglingEndpoint {
                        relationship: edge.relationship.clone(),
                        end,
                        node_type: name.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Build the directed graph consumed by the layout engine
    ///
    /// Vertices follow registry order and arcs follow edge order, so the
    /// graph (and any seeded layout over it) is reproducible.
    pub fn to_graph(&self) -> std::result::Result<ModelGraph, ModelIntegrityError> {
        let mut graph = ModelGraph::with_capacity(self.nodes.len(), self.edges.len());
        let mut index: HashMap<&str, NodeIndex> = HashMap::new();

        for node in &self.nodes {
            index.insert(node.name.as_str(), graph.add_node(node.name.clone()));
        }

        for edge in &self.edges {
            let resolve = |end: EdgeEnd, name: &String| {
                index.get(name.as_str()).copied().ok_or_else(|| {
                    ModelIntegrityError::DanglingEndpoint {
                        relationship: edge.relationship.clone(),
                        end,
                        node_type: name.clone(),
                    }
                })
            };
            let source = resolve(EdgeEnd::From, &edge.from)?;
            let target = resolve(EdgeEnd::To, &edge.to)?;
            graph.add_edge(source, target, edge.relationship.clone());
        }

        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_delivery_model_is_valid() {
        let registry = ModelRegistry::food_delivery();
        assert!(registry.validate().is_ok());
        assert_eq!(
            registry.stats(),
            ModelStats {
                node_types: 5,
                edge_types: 6
            }
        );
    }

    #[test]
    fn test_node_lookup() {
        let registry = ModelRegistry::food_delivery();
        let dish = registry.node("Dish").expect("Dish should exist");
        assert_eq!(dish.color, "#fbbf24");
        assert_eq!(dish.properties[0], "dish_id");
        assert!(registry.node("Driver").is_none());
    }

    #[test]
    fn test_duplicate_node_type_rejected() {
        let nodes = vec![
            NodeType::new("A", &[], "#000000", ""),
            NodeType::new("A", &[], "#ffffff", ""),
        ];
        let err = ModelRegistry::new(nodes, vec![]).unwrap_err();
        assert_eq!(err, ModelIntegrityError::DuplicateNodeType("A".to_string()));
    }

    #[test]
    fn test_dangling_target_rejected() {
        let nodes = vec![NodeType::new("A", &[], "#000000", "")];
        let edges = vec![EdgeType::new("A", "B", "LINKS", &[])];
        let err = ModelRegistry::new(nodes, edges).unwrap_err();
        assert!(matches!(
            err,
            ModelIntegrityError::DanglingEndpoint { end: EdgeEnd::To, ref node_type, .. } if node_type == "B"
        ));
    }

    #[test]
    fn test_dangling_source_rejected() {
        let nodes = vec![NodeType::new("Order", &[], "#000000", "")];
        let edges = vec![EdgeType::new("Courier", "Order", "DELIVERS", &[])];
        let err = ModelRegistry::new(nodes, edges).unwrap_err();
        assert_eq!(
            err,
            ModelIntegrityError::DanglingEndpoint {
                relationship: "DELIVERS".to_string(),
                end: EdgeEnd::From,
                node_type: "Courier".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_relationship_rejected() {
        let nodes = vec![NodeType::new("A", &[], "#000000", "")];
        let edges = vec![EdgeType::new("A", "A", " ", &[])];
        assert!(matches!(
            ModelRegistry::new(nodes, edges),
            Err(ModelIntegrityError::EmptyRelationship { .. })
        ));
    }

    #[test]
    fn test_to_graph_preserves_order() {
        let registry = ModelRegistry::food_delivery();
        let graph = registry.to_graph().unwrap();
        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 6);

        let names: Vec<&str> = graph.node_weights().map(String::as_str).collect();
        assert_eq!(
            names,
            vec!["Customer", "Restaurant", "Dish", "DeliveryPerson", "Order"]
        );
        let labels: Vec<&str> = graph.edge_weights().map(String::as_str).collect();
        assert_eq!(
            labels,
            vec!["PLACES", "FROM", "CONTAINS", "DELIVERS", "SERVES", "REVIEWS"]
        );
    }

    #[test]
    fn test_json_round_trip() {
        let registry = ModelRegistry::food_delivery();
        let json = registry.to_json_pretty().unwrap();
        assert!(json.contains("\"type\": \"Customer\""));
        let reloaded = ModelRegistry::from_json_str(&json).unwrap();
        assert_eq!(reloaded, registry);
    }
}
