// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Graph layout
//!
//! This module provides:
//! - A seeded Fruchterman-Reingold force-directed layout
//! - Curved edge routing so opposing and parallel arcs stay distinguishable
//! - The `Layout` mapping from vertex name to 2D position

pub mod edges;
pub mod force;

pub use edges::{route_edges, CurvedEdge};
pub use force::ForceLayout;

use serde::Serialize;
use std::ops::{Add, Mul, Sub};

/// A point in layout space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(self, other: Point) -> f64 {
        (self - other).length()
    }

    /// Counter-clockwise perpendicular of the same length
    pub fn perpendicular(self) -> Point {
        Point::new(-self.y, self.x)
    }

    pub fn midpoint(self, other: Point) -> Point {
        (self + other) * 0.5
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// A vertex and its computed position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedVertex {
    pub name: String,
    pub position: Point,
}

/// Vertex positions in graph insertion order
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Layout {
    vertices: Vec<PlacedVertex>,
}

impl Layout {
    pub fn new(vertices: Vec<PlacedVertex>) -> Self {
        Self { vertices }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Position of a vertex by name
    pub fn get(&self, name: &str) -> Option<Point> {
        self.vertices
            .iter()
            .find(|v| v.name == name)
            .map(|v| v.position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedVertex> {
        self.vertices.iter()
    }

    /// Bounding box as (min, max), or `None` for an empty layout
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let first = self.vertices.first()?.position;
        Some(self.vertices.iter().fold((first, first), |(lo, hi), v| {
            let p = v.position;
            (
                Point::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        }))
    }

    /// Smallest distance between any two vertices
    pub fn min_pairwise_distance(&self) -> Option<f64> {
        let mut best: Option<f64> = None;
        for (i, a) in self.vertices.iter().enumerate() {
            for b in &self.vertices[i + 1..] {
                let d = a.position.distance(b.position);
                best = Some(best.map_or(d, |cur| cur.min(d)));
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, -2.0);
        assert_eq!(a + b, Point::new(4.0, 0.0));
        assert_eq!(b - a, Point::new(2.0, -4.0));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0));
        assert_eq!(a.midpoint(b), Point::new(2.0, 0.0));
        assert_eq!(Point::new(3.0, 4.0).length(), 5.0);
        assert_eq!(Point::new(1.0, 0.0).perpendicular(), Point::new(0.0, 1.0));
    }

    #[test]
    fn test_layout_lookup_and_bounds() {
        let layout = Layout::new(vec![
            PlacedVertex {
                name: "A".into(),
                position: Point::new(-1.0, 0.5),
            },
            PlacedVertex {
                name: "B".into(),
                position: Point::new(1.0, -0.5),
            },
        ]);
        assert_eq!(layout.get("B"), Some(Point::new(1.0, -0.5)));
        assert_eq!(layout.get("C"), None);
        assert_eq!(
            layout.bounds(),
            Some((Point::new(-1.0, -0.5), Point::new(1.0, 0.5)))
        );
        assert!(layout.min_pairwise_distance().unwrap() > 2.0);
    }

    #[test]
    fn test_empty_layout() {
        let layout = Layout::empty();
        assert!(layout.is_empty());
        assert_eq!(layout.bounds(), None);
        assert_eq!(layout.min_pairwise_distance(), None);
    }
}
