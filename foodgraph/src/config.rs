// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Layout and canvas configuration

use serde::{Deserialize, Serialize};

/// Parameters of the force-directed layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Optimal distance between vertices; `None` uses 1/sqrt(n)
    pub k: Option<f64>,
    /// Fixed iteration budget
    pub iterations: usize,
    /// Seed for the initial random placement
    pub seed: u64,
    /// Largest absolute coordinate after rescaling
    pub scale: f64,
    /// Starting temperature (maximum displacement per iteration)
    pub initial_temperature: f64,
    /// Minimum distance kept between any two vertices
    pub min_separation: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            k: Some(2.0),
            iterations: 50,
            seed: 42,
            scale: 1.0,
            initial_temperature: 0.1,
            min_separation: 1e-3,
        }
    }
}

impl LayoutConfig {
    /// Default layout with a different seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Default layout with a different iteration budget
    pub fn with_iterations(iterations: usize) -> Self {
        Self {
            iterations,
            ..Default::default()
        }
    }
}

/// Drawing parameters for the SVG renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    pub width: f64,
    pub height: f64,
    /// Space kept clear around the layout's bounding box
    pub margin: f64,
    pub node_radius: f64,
    pub node_opacity: f64,
    pub edge_color: String,
    pub edge_width: f64,
    pub edge_opacity: f64,
    /// Curvature of edges relative to their length
    pub arc_rad: f64,
    pub title: String,
    pub title_font_size: f64,
    pub node_font_size: f64,
    pub edge_font_size: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1400.0,
            height: 1000.0,
            margin: 120.0,
            node_radius: 48.0,
            node_opacity: 0.9,
            edge_color: "#666666".to_string(),
            edge_width: 2.0,
            edge_opacity: 0.6,
            arc_rad: 0.1,
            title: "Food Delivery System - Graph Structure".to_string(),
            title_font_size: 16.0,
            node_font_size: 10.0,
            edge_font_size: 8.0,
        }
    }
}

impl CanvasConfig {
    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }
}
