// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Fruchterman-Reingold force-directed layout
//!
//! Every vertex pair repels with force k²/d and every arc pulls its endpoints
//! together with force d²/k. Displacement per iteration is capped by a
//! temperature that cools linearly to zero over the iteration budget. The
//! initial placement is drawn from a seeded generator, so a given graph and
//! seed always produce the same layout.

use super::{Layout, PlacedVertex, Point};
use crate::config::LayoutConfig;
use crate::model::ModelGraph;
use log::{debug, warn};
use petgraph::visit::EdgeRef;

/// Distances below this are clamped to keep forces finite
const MIN_DISTANCE: f64 = 0.01;

/// Golden angle, used to spread separation nudges
const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;

/// Force-directed layout engine
#[derive(Debug, Clone, Default)]
pub struct ForceLayout {
    config: LayoutConfig,
}

impl ForceLayout {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Compute positions for every vertex of `graph`
    pub fn compute(&self, graph: &ModelGraph) -> Layout {
        let n = graph.node_count();
        if n == 0 {
            return Layout::empty();
        }

        let names: Vec<String> = graph.node_weights().cloned().collect();
        let arcs: Vec<(usize, usize)> = graph
            .edge_references()
            .map(|e| (e.source().index(), e.target().index()))
            .filter(|(s, t)| s != t)
            .collect();

        let mut positions = if n == 1 {
            vec![Point::ORIGIN]
        } else {
            let mut positions = self.initial_positions(n);
            self.simulate(&mut positions, &arcs);
            self.rescale(&mut positions);
            positions
        };
        self.enforce_separation(&mut positions);

        Layout::new(
            names
                .into_iter()
                .zip(positions)
                .map(|(name, position)| PlacedVertex { name, position })
                .collect(),
        )
    }

    fn initial_positions(&self, n: usize) -> Vec<Point> {
        let mut rng = fastrand::Rng::with_seed(self.config.seed);
        (0..n).map(|_| Point::new(rng.f64(), rng.f64())).collect()
    }

    fn simulate(&self, positions: &mut [Point], arcs: &[(usize, usize)]) {
        let n = positions.len();
        let k = self
            .config
            .k
            .filter(|k| k.is_finite() && *k > 0.0 && (k * k).is_finite())
            .unwrap_or_else(|| 1.0 / (n as f64).sqrt());
        let mut temperature = self.config.initial_temperature;
        let cooling = temperature / (self.config.iterations as f64 + 1.0);

        let mut displacement = vec![Point::ORIGIN; n];
        for iteration in 0..self.config.iterations {
            displacement.iter_mut().for_each(|d| *d = Point::ORIGIN);

            for i in 0..n {
                for j in 0..n {
                    if i == j {
                        continue;
                    }
                    let delta = positions[i] - positions[j];
                    let distance = delta.length().max(MIN_DISTANCE);
                    displacement[i] = displacement[i] + delta * (k * k / (distance * distance));
                }
            }

            for &(source, target) in arcs {
                let delta = positions[source] - positions[target];
                let distance = delta.length().max(MIN_DISTANCE);
                let pull = delta * (distance / k);
                displacement[source] = displacement[source] - pull;
                displacement[target] = displacement[target] + pull;
            }

            let mut moved = 0.0;
            for (position, disp) in positions.iter_mut().zip(&displacement) {
                let length = disp.length().max(MIN_DISTANCE);
                let step = *disp * (length.min(temperature) / length);
                *position = *position + step;
                moved += step.length();
            }

            temperature -= cooling;
            if iteration % 10 == 0 {
                debug!(
                    "layout iteration {}: total movement {:.4}, temperature {:.4}",
                    iteration, moved, temperature
                );
            }
        }
    }

    /// Center on the origin and scale so the largest coordinate equals `scale`
    fn rescale(&self, positions: &mut [Point]) {
        let n = positions.len() as f64;
        let center = positions
            .iter()
            .fold(Point::ORIGIN, |acc, p| acc + *p)
            * (1.0 / n);
        let mut limit: f64 = 0.0;
        for p in positions.iter_mut() {
            *p = *p - center;
            limit = limit.max(p.x.abs()).max(p.y.abs());
        }
        if limit > 0.0 {
            for p in positions.iter_mut() {
                *p = *p * (self.config.scale / limit);
            }
        }
    }

    /// Move vertices until every pair is at least `min_separation` apart.
    ///
    /// Vertices are placed in order; each one is checked against all the
    /// vertices before it. It is first pushed directly away from the vertex it
    /// overlaps, then, if that keeps colliding, placed on a widening spiral.
    fn enforce_separation(&self, positions: &mut [Point]) {
        let min_sep = self.config.min_separation;
        if !(min_sep.is_finite() && min_sep > 0.0) {
            return;
        }
        for j in 1..positions.len() {
            let (placed, rest) = positions.split_at_mut(j);
            let vertex = &mut rest[0];
            let mut attempt = 0usize;
            while let Some(i) = placed.iter().position(|p| p.distance(*vertex) < min_sep) {
                let delta = *vertex - placed[i];
                let distance = delta.length();
                if attempt == 0 {
                    warn!(
                        "layout vertices {} and {} overlap (distance {:.2e}), separating",
                        i, j, distance
                    );
                }
                *vertex = if attempt < placed.len() && distance > 0.0 {
                    placed[i] + delta * (min_sep / distance)
                } else {
                    let angle = (j + attempt) as f64 * GOLDEN_ANGLE;
                    let reach = min_sep * (attempt.saturating_sub(placed.len()) + 1) as f64;
                    placed[i] + Point::new(angle.cos(), angle.sin()) * reach
                };
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelRegistry;

    fn food_graph() -> ModelGraph {
        ModelRegistry::food_delivery().to_graph().unwrap()
    }

    #[test]
    fn test_empty_graph_gives_empty_layout() {
        let layout = ForceLayout::default().compute(&ModelGraph::new());
        assert!(layout.is_empty());
    }

    #[test]
    fn test_single_vertex_sits_at_origin() {
        let mut graph = ModelGraph::new();
        graph.add_node("Solo".to_string());
        let layout = ForceLayout::default().compute(&graph);
        assert_eq!(layout.get("Solo"), Some(Point::ORIGIN));
    }

    #[test]
    fn test_rescaled_to_unit_box() {
        let layout = ForceLayout::default().compute(&food_graph());
        let (lo, hi) = layout.bounds().unwrap();
        let extent = lo.x.abs().max(lo.y.abs()).max(hi.x.abs()).max(hi.y.abs());
        assert!((extent - 1.0).abs() < 1e-9, "extent was {}", extent);
    }

    #[test]
    fn test_separation_pass_splits_coincident_points() {
        let engine = ForceLayout::new(LayoutConfig {
            min_separation: 0.5,
            ..Default::default()
        });
        let mut points = vec![Point::new(0.2, 0.2), Point::new(0.2, 0.2), Point::new(0.2, 0.3)];
        engine.enforce_separation(&mut points);
        assert_eq!(points[0], Point::new(0.2, 0.2));
        assert_all_separated(&points, 0.5);
    }

    #[test]
    fn test_separation_pass_rechecks_earlier_vertices() {
        let engine = ForceLayout::new(LayoutConfig {
            min_separation: 1.0,
            ..Default::default()
        });
        let mut points = vec![Point::new(0.0, 0.0), Point::new(1.5, 0.0), Point::new(0.9, 0.0)];
        engine.enforce_separation(&mut points);
        assert_eq!(&points[..2], &[Point::new(0.0, 0.0), Point::new(1.5, 0.0)]);
        assert_all_separated(&points, 1.0);
    }

    #[test]
    fn test_separation_pass_handles_crowded_cluster() {
        let engine = ForceLayout::new(LayoutConfig {
            min_separation: 0.3,
            ..Default::default()
        });
        let mut points: Vec<Point> = (0..12).map(|i| Point::new(i as f64 * 0.01, 0.0)).collect();
        engine.enforce_separation(&mut points);
        assert_all_separated(&points, 0.3);
    }

    #[test]
    fn test_non_finite_k_falls_back() {
        let layout = ForceLayout::new(LayoutConfig {
            k: Some(f64::INFINITY),
            ..Default::default()
        })
        .compute(&food_graph());
        assert!(layout
            .iter()
            .all(|v| v.position.x.is_finite() && v.position.y.is_finite()));

        let huge = ForceLayout::new(LayoutConfig {
            k: Some(1e200),
            ..Default::default()
        })
        .compute(&food_graph());
        assert!(huge.iter().all(|v| v.position.x.is_finite()));
    }

    fn assert_all_separated(points: &[Point], min_sep: f64) {
        for j in 1..points.len() {
            for i in 0..j {
                let d = points[i].distance(points[j]);
                assert!(d >= min_sep, "d({}, {}) = {} < {}", i, j, d, min_sep);
            }
        }
    }

    #[test]
    fn test_self_loops_are_ignored() {
        let mut graph = ModelGraph::new();
        let a = graph.add_node("A".to_string());
        let b = graph.add_node("B".to_string());
        graph.add_edge(a, a, "SELF".to_string());
        graph.add_edge(a, b, "LINK".to_string());
        let layout = ForceLayout::default().compute(&graph);
        assert_eq!(layout.len(), 2);
        assert!(layout.min_pairwise_distance().unwrap() > 0.0);
    }
}
