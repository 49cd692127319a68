// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Node and edge type descriptors
//!
//! These are purely descriptive: a node type names a vertex category and how
//! it is displayed, an edge type names a directed relationship between two
//! node types. Neither carries any instance data.

use serde::{Deserialize, Serialize};

/// A vertex category in the graph model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeType {
    /// Unique name of the node type (e.g. `Customer`)
    #[serde(rename = "type")]
    pub name: String,
    /// Property names in display order
    #[serde(default)]
    pub properties: Vec<String>,
    /// Display color as a CSS hex string
    pub color: String,
    /// Display icon (a single emoji)
    #[serde(default)]
    pub icon: String,
}

impl NodeType {
    pub fn new(name: &str, properties: &[&str], color: &str, icon: &str) -> Self {
        Self {
            name: name.to_string(),
            properties: properties.iter().map(|p| p.to_string()).collect(),
            color: color.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// A labelled, directed relationship category between two node types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeType {
    /// Source node type name
    pub from: String,
    /// Target node type name
    pub to: String,
    /// Relationship label (e.g. `PLACES`)
    pub relationship: String,
    /// Property names in display order
    #[serde(default)]
    pub properties: Vec<String>,
}

impl EdgeType {
    pub fn new(from: &str, to: &str, relationship: &str, properties: &[&str]) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            relationship: relationship.to_string(),
            properties: properties.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// `RELATIONSHIP: From → To`
    pub fn signature(&self) -> String {
        format!("{}: {} → {}", self.relationship, self.from, self.to)
    }
}

/// Counts shown by the overview page and the quick stats panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelStats {
    pub node_types: usize,
    pub edge_types: usize,
}
