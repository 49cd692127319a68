// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! SVG drawing of the model graph

use crate::config::CanvasConfig;
use crate::layout::{CurvedEdge, Layout, Point};
use crate::model::ModelRegistry;
use std::fmt::Write;

const FALLBACK_COLOR: &str = "#9ca3af";

/// Escape text for use in SVG content and attributes
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Maps layout space onto the canvas, flipping y so "up" stays up
struct Viewport {
    scale_x: f64,
    scale_y: f64,
    center: Point,
    canvas_center: Point,
}

impl Viewport {
    fn fit(layout: &Layout, canvas: &CanvasConfig) -> Self {
        let (lo, hi) = layout.bounds().unwrap_or((Point::ORIGIN, Point::ORIGIN));
        let inner_w = (canvas.width - 2.0 * canvas.margin).max(1.0);
        // leave room for the title band
        let inner_h = (canvas.height - 2.0 * canvas.margin - 40.0).max(1.0);
        let span_x = hi.x - lo.x;
        let span_y = hi.y - lo.y;
        Self {
            scale_x: if span_x > 0.0 { inner_w / span_x } else { 0.0 },
            scale_y: if span_y > 0.0 { inner_h / span_y } else { 0.0 },
            center: lo.midpoint(hi),
            canvas_center: Point::new(canvas.width / 2.0, canvas.height / 2.0 + 20.0),
        }
    }

    fn project(&self, p: Point) -> Point {
        Point::new(
            self.canvas_center.x + (p.x - self.center.x) * self.scale_x,
            self.canvas_center.y - (p.y - self.center.y) * self.scale_y,
        )
    }
}

/// Renders the registry's graph as a standalone SVG document
pub struct SvgRenderer {
    canvas: CanvasConfig,
}

impl SvgRenderer {
    pub fn new(canvas: CanvasConfig) -> Self {
        Self { canvas }
    }

    pub fn render(&self, registry: &ModelRegistry, layout: &Layout, edges: &[CurvedEdge]) -> String {
        let c = &self.canvas;
        let view = Viewport::fit(layout, c);
        let mut out = String::new();

        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
            w = c.width,
            h = c.height
        );
        let _ = write!(
            out,
            r#"<defs><marker id="arrow" viewBox="0 0 10 10" refX="10" refY="5" markerWidth="8" markerHeight="8" orient="auto-start-reverse"><path d="M 0 0 L 10 5 L 0 10 z" fill="{}"/></marker></defs>"#,
            escape_xml(&c.edge_color)
        );
        let _ = write!(out, r#"<rect width="100%" height="100%" fill="white"/>"#);
        let _ = write!(
            out,
            r#"<text class="title" x="{:.1}" y="40" text-anchor="middle" font-size="{}" font-weight="bold">{}</text>"#,
            c.width / 2.0,
            c.title_font_size * 1.5,
            escape_xml(&c.title)
        );

        out.push_str(r#"<g class="edges">"#);
        for edge in edges {
            self.write_edge(&mut out, &view, edge);
        }
        out.push_str("</g>");

        out.push_str(r#"<g class="nodes">"#);
        for vertex in layout.iter() {
            let p = view.project(vertex.position);
            let color = registry
                .node(&vertex.name)
                .map(|n| n.color.as_str())
                .unwrap_or(FALLBACK_COLOR);
            let _ = write!(
                out,
                r#"<circle cx="{:.1}" cy="{:.1}" r="{}" fill="{}" fill-opacity="{}"><title>{}</title></circle>"#,
                p.x,
                p.y,
                c.node_radius,
                escape_xml(color),
                c.node_opacity,
                escape_xml(&vertex.name)
            );
            let _ = write!(
                out,
                r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" dominant-baseline="central" font-size="{}" font-weight="bold" fill="white">{}</text>"#,
                p.x,
                p.y,
                c.node_font_size * 1.2,
                escape_xml(&vertex.name)
            );
        }
        out.push_str("</g>");

        self.write_legend(&mut out, registry);
        out.push_str("</svg>");
        out
    }

    fn write_edge(&self, out: &mut String, view: &Viewport, edge: &CurvedEdge) {
        let c = &self.canvas;
        let start = view.project(edge.start);
        let control = view.project(edge.control);
        let end = view.project(edge.end);

        // trim both ends to the node circles so the arrowhead stays visible
        let start = towards(start, control, c.node_radius);
        let end = towards(end, control, c.node_radius + 2.0);

        let _ = write!(
            out,
            r#"<path class="edge" d="M {:.1},{:.1} Q {:.1},{:.1} {:.1},{:.1}" fill="none" stroke="{}" stroke-width="{}" stroke-opacity="{}" marker-end="url(#arrow)"/>"#,
            start.x,
            start.y,
            control.x,
            control.y,
            end.x,
            end.y,
            escape_xml(&c.edge_color),
            c.edge_width,
            c.edge_opacity
        );

        let label = view.project(edge.label_at);
        let text = escape_xml(&edge.label);
        let box_w = edge.label.chars().count() as f64 * c.edge_font_size * 0.7 + 12.0;
        let box_h = c.edge_font_size * 1.2 + 8.0;
        let _ = write!(
            out,
            r#"<rect class="edge-label" x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" rx="4" fill="white" fill-opacity="0.7"/>"#,
            label.x - box_w / 2.0,
            label.y - box_h / 2.0,
            box_w,
            box_h
        );
        let _ = write!(
            out,
            r##"<text x="{:.1}" y="{:.1}" text-anchor="middle" dominant-baseline="central" font-size="{}" fill="#333333">{}</text>"##,
            label.x,
            label.y,
            c.edge_font_size * 1.2,
            text
        );
    }

    fn write_legend(&self, out: &mut String, registry: &ModelRegistry) {
        let c = &self.canvas;
        let y = c.height - 36.0;
        let slot = c.width / registry.nodes().len().max(1) as f64;
        out.push_str(r#"<g class="legend">"#);
        for (idx, node) in registry.nodes().iter().enumerate() {
            let x = slot * idx as f64 + 12.0;
            let _ = write!(
                out,
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="26" rx="5" fill="{}"/><text x="{:.1}" y="{:.1}" text-anchor="middle" dominant-baseline="central" font-size="12" font-weight="bold" fill="white">{} {}</text>"#,
                x,
                y,
                slot - 24.0,
                escape_xml(&node.color),
                x + (slot - 24.0) / 2.0,
                y + 13.0,
                escape_xml(&node.icon),
                escape_xml(&node.name)
            );
        }
        out.push_str("</g>");
    }
}

/// Move `from` a fixed distance towards `to`
fn towards(from: Point, to: Point, distance: f64) -> Point {
    let delta = to - from;
    let length = delta.length();
    if length <= f64::EPSILON {
        return from;
    }
    from + delta * (distance.min(length) / length)
}
