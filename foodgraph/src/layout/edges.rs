// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Curved edge routing
//!
//! Each arc is drawn as a quadratic Bézier whose control point sits off the
//! chord midpoint by `rad` times the chord length, on the clockwise side of
//! the direction of travel. Arcs between the same pair in opposite directions
//! therefore bend to opposite sides, and repeated arcs in the same direction
//! get progressively larger curvature.

use super::{Layout, Point};
use crate::model::ModelGraph;
use log::warn;
use petgraph::visit::EdgeRef;
use serde::Serialize;
use std::collections::HashMap;

/// A routed, labelled arc
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurvedEdge {
    pub source: String,
    pub target: String,
    pub label: String,
    pub start: Point,
    pub control: Point,
    pub end: Point,
    /// Where the relationship label is anchored (the curve's midpoint)
    pub label_at: Point,
}

impl CurvedEdge {
    /// Point on the curve at parameter `t` in [0, 1]
    pub fn point_at(&self, t: f64) -> Point {
        let u = 1.0 - t;
        self.start * (u * u) + self.control * (2.0 * u * t) + self.end * (t * t)
    }
}

/// Route every arc of `graph` over the positions in `layout`
pub fn route_edges(graph: &ModelGraph, layout: &Layout, rad: f64) -> Vec<CurvedEdge> {
    let mut repeats: HashMap<(usize, usize), usize> = HashMap::new();
    let mut routed = Vec::with_capacity(graph.edge_count());

    for edge in graph.edge_references() {
        let source = &graph[edge.source()];
        let target = &graph[edge.target()];
        let (Some(start), Some(end)) = (layout.get(source), layout.get(target)) else {
            warn!(
                "edge {} -> {} has an endpoint outside the layout, not routed",
                source, target
            );
            continue;
        };

        let repeat = repeats
            .entry((edge.source().index(), edge.target().index()))
            .or_insert(0);
        let curvature = rad * (1.0 + *repeat as f64);
        *repeat += 1;

        let chord = end - start;
        let control = start.midpoint(end) + chord.perpendicular() * -curvature;
        let mut curved = CurvedEdge {
            source: source.clone(),
            target: target.clone(),
            label: edge.weight().clone(),
            start,
            control,
            end,
            label_at: Point::ORIGIN,
        };
        curved.label_at = curved.point_at(0.5);
        routed.push(curved);
    }

    routed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::PlacedVertex;

    fn two_point_layout() -> Layout {
        Layout::new(vec![
            PlacedVertex {
                name: "A".into(),
                position: Point::new(0.0, 0.0),
            },
            PlacedVertex {
                name: "B".into(),
                position: Point::new(2.0, 0.0),
            },
        ])
    }

    fn graph(arcs: &[(&str, &str, &str)]) -> ModelGraph {
        let mut g = ModelGraph::new();
        let a = g.add_node("A".to_string());
        let b = g.add_node("B".to_string());
        for (from, to, label) in arcs {
            let s = if *from == "A" { a } else { b };
            let t = if *to == "A" { a } else { b };
            g.add_edge(s, t, label.to_string());
        }
        g
    }

    #[test]
    fn test_control_point_is_off_chord() {
        let edges = route_edges(&graph(&[("A", "B", "X")]), &two_point_layout(), 0.1);
        assert_eq!(edges.len(), 1);
        let e = &edges[0];
        // chord along +x, clockwise side is -y
        assert_eq!(e.control, Point::new(1.0, -0.2));
        assert_eq!(e.label_at, Point::new(1.0, -0.1));
        assert_eq!(e.point_at(0.0), e.start);
        assert_eq!(e.point_at(1.0), e.end);
    }

    #[test]
    fn test_opposing_arcs_bend_apart() {
        let edges = route_edges(
            &graph(&[("A", "B", "OUT"), ("B", "A", "BACK")]),
            &two_point_layout(),
            0.1,
        );
        assert!(edges[0].control.y < 0.0);
        assert!(edges[1].control.y > 0.0);
        assert!(edges[0].label_at.distance(edges[1].label_at) > 0.1);
    }

    #[test]
    fn test_repeated_arcs_get_more_curvature() {
        let edges = route_edges(
            &graph(&[("A", "B", "ONE"), ("A", "B", "TWO")]),
            &two_point_layout(),
            0.1,
        );
        assert_ne!(edges[0].control, edges[1].control);
        assert!(edges[1].control.y < edges[0].control.y);
        assert_eq!(edges[1].label, "TWO");
    }
}
