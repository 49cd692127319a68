// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! foodgraph - Food delivery graph data model demo
//!
//! A fixed, hand-authored graph model (node types, edge types, sample
//! queries) for a hypothetical food delivery graph database, with the pieces
//! needed to present it:
//!
//! - [`model`] - validated node/edge type registry and the built-in model
//! - [`showcase`] - example queries paired with illustrative result tables
//! - [`export`] - CSV/JSON export of result tables
//! - [`layout`] - seeded force-directed layout and curved edge routing
//! - [`render`] - SVG drawing of the model graph
//! - [`page`] / [`session`] - the six views and per-user selection state
//! - [`content`] - static overview and implementation text
//!
//! Nothing here executes queries: the query text is opaque and the results
//! are authored constants.
//!
//! # Example
//!
//! ```no_run
//! use foodgraph::{visualize, CanvasConfig, LayoutConfig, ModelRegistry};
//!
//! # fn main() -> foodgraph::Result<()> {
//! let registry = ModelRegistry::food_delivery();
//! let viz = visualize(&registry, &LayoutConfig::default(), &CanvasConfig::default())?;
//! std::fs::write("graph.svg", &viz.svg)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod export;
pub mod layout;
pub mod model;
pub mod page;
pub mod render;
pub mod session;
pub mod showcase;

pub use config::{CanvasConfig, LayoutConfig};
pub use content::{ImplementationTab, Section};
pub use error::{EdgeEnd, FoodGraphError, ModelIntegrityError, Result};
pub use export::ExportFormat;
pub use layout::{CurvedEdge, ForceLayout, Layout, Point};
pub use model::{EdgeType, ModelGraph, ModelRegistry, ModelStats, NodeType};
pub use page::Page;
pub use render::{visualize, Visualization};
pub use session::Session;
pub use showcase::{CellValue, QueryExample, QueryShowcase, ResultTable};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
