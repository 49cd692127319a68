// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Page identifiers for the six demo views

use crate::error::FoodGraphError;
use serde::Serialize;
use std::fmt;

/// One of the demo's views, in sidebar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Page {
    #[default]
    Overview,
    Nodes,
    Edges,
    Queries,
    Visualization,
    Implementation,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Overview,
        Page::Nodes,
        Page::Edges,
        Page::Queries,
        Page::Visualization,
        Page::Implementation,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::Nodes => "Nodes",
            Page::Edges => "Edges",
            Page::Queries => "Queries",
            Page::Visualization => "Visualization",
            Page::Implementation => "Implementation",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Page::Overview => "📖",
            Page::Nodes => "🔷",
            Page::Edges => "🔗",
            Page::Queries => "🔍",
            Page::Visualization => "📈",
            Page::Implementation => "💾",
        }
    }

    /// Heading shown at the top of the page
    pub fn heading(self) -> &'static str {
        match self {
            Page::Overview => "Graph Data Model Overview",
            Page::Nodes => "Node Types (Vertices)",
            Page::Edges => "Edge Types (Relationships)",
            Page::Queries => "Graph Queries",
            Page::Visualization => "Graph Visualization",
            Page::Implementation => "Implementation Details",
        }
    }

    /// 1-based position in the sidebar
    pub fn number(self) -> usize {
        Page::ALL.iter().position(|p| *p == self).unwrap_or(0) + 1
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon(), self.title())
    }
}

impl std::str::FromStr for Page {
    type Err = FoodGraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        if let Ok(n) = key.parse::<usize>() {
            return n
                .checked_sub(1)
                .and_then(|i| Page::ALL.get(i).copied())
                .ok_or_else(|| FoodGraphError::UnknownPage(s.to_string()));
        }
        match key.as_str() {
            "overview" | "home" => Ok(Page::Overview),
            "nodes" | "node" | "vertices" => Ok(Page::Nodes),
            "edges" | "edge" | "relationships" => Ok(Page::Edges),
            "queries" | "query" => Ok(Page::Queries),
            "visualization" | "visualisation" | "visualize" | "viz" | "graph" => {
                Ok(Page::Visualization)
            }
            "implementation" | "impl" => Ok(Page::Implementation),
            _ => Err(FoodGraphError::UnknownPage(s.to_string())),
        }
    }
}
