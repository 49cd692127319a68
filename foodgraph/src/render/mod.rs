// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Graph rendering
//!
//! Ties the model registry, the force layout and edge routing together and
//! produces an SVG document of the model graph.

pub mod svg;

pub use svg::{escape_xml, SvgRenderer};

use crate::config::{CanvasConfig, LayoutConfig};
use crate::error::Result;
use crate::layout::{route_edges, CurvedEdge, ForceLayout, Layout};
use crate::model::ModelRegistry;
use log::debug;

/// Everything the visualization page shows
#[derive(Debug, Clone)]
pub struct Visualization {
    pub layout: Layout,
    pub edges: Vec<CurvedEdge>,
    pub svg: String,
}

/// Build the graph, lay it out, route its edges and draw it
///
/// Fails with a model integrity error if an edge names an unknown node type.
pub fn visualize(
    registry: &ModelRegistry,
    layout_config: &LayoutConfig,
    canvas: &CanvasConfig,
) -> Result<Visualization> {
    let graph = registry.to_graph()?;
    let layout = ForceLayout::new(layout_config.clone()).compute(&graph);
    let edges = route_edges(&graph, &layout, canvas.arc_rad);
    debug!(
        "visualized {} vertices and {} arcs (seed {})",
        layout.len(),
        edges.len(),
        layout_config.seed
    );
    let svg = SvgRenderer::new(canvas.clone()).render(registry, &layout, &edges);
    Ok(Visualization { layout, edges, svg })
}
