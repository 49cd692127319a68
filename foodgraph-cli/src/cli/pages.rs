// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Page router: one render function per page

use colored::Colorize;
use comfy_table::{Cell, CellAlignment};
use foodgraph::content::{self, Section};
use foodgraph::export::export_filename;
use foodgraph::{
    visualize, CanvasConfig, FoodGraphError, ImplementationTab, LayoutConfig, ModelRegistry, Page,
    Session,
};
use log::info;
use std::fmt::Write;
use std::path::PathBuf;

use super::commands::OutputFormat;
use super::output::{new_table, ResultFormatter};

type PageResult = Result<String, FoodGraphError>;

/// Renders pages of the demo against one model registry
pub struct PageRouter<'a> {
    registry: &'a ModelRegistry,
    layout: LayoutConfig,
    canvas: CanvasConfig,
    svg_path: Option<PathBuf>,
}

impl<'a> PageRouter<'a> {
    pub fn new(registry: &'a ModelRegistry) -> Self {
        Self {
            registry,
            layout: LayoutConfig::default(),
            canvas: CanvasConfig::default(),
            svg_path: None,
        }
    }

    /// Write the diagram here whenever the visualization page renders
    pub fn with_svg_path(mut self, path: Option<PathBuf>) -> Self {
        self.svg_path = path;
        self
    }

    /// Render the session's current page
    pub fn render(&self, session: &Session) -> PageResult {
        let page = session.page();
        let body = match page {
            Page::Overview => self.overview(session),
            Page::Nodes => self.nodes(),
            Page::Edges => self.edges(),
            Page::Queries => self.queries(session),
            Page::Visualization => self.visualization(),
            Page::Implementation => self.implementation(session.tab()),
        }?;
        Ok(format!(
            "{}\n\n{}\n\n{}",
            format!("{} {}", page.icon(), page.heading()).bold().yellow(),
            body,
            footer()
        ))
    }

    fn overview(&self, session: &Session) -> PageResult {
        let mut out = String::new();
        let _ = writeln!(out, "{}", "🎯 Model Description".bold().cyan());
        let _ = writeln!(out, "{}", content::MODEL_DESCRIPTION);
        for entity in content::MODEL_ENTITIES {
            let _ = writeln!(out, "  - {}", entity);
        }
        let _ = writeln!(out, "{}\n", content::MODEL_SUMMARY);

        let _ = writeln!(out, "{}", "✨ Key Features".bold().cyan());
        for feature in content::KEY_FEATURES {
            let _ = writeln!(out, "  - {}", feature);
        }
        let _ = writeln!(out);

        let stats = self.registry.stats();
        let node_names: Vec<&str> = self.registry.nodes().iter().map(|n| n.name.as_str()).collect();
        let edge_names: Vec<&str> = self
            .registry
            .edges()
            .iter()
            .map(|e| e.relationship.as_str())
            .collect();

        let mut metrics = new_table();
        metrics.set_header(vec!["Metric", "Count", "Includes"]);
        metrics.add_row(vec![
            Cell::new("🔷 Node Types"),
            Cell::new(stats.node_types).set_alignment(CellAlignment::Right),
            Cell::new(node_names.join(", ")),
        ]);
        metrics.add_row(vec![
            Cell::new("🔗 Edge Types"),
            Cell::new(stats.edge_types).set_alignment(CellAlignment::Right),
            Cell::new(edge_names.join(", ")),
        ]);
        metrics.add_row(vec![
            Cell::new("🔍 Query Examples"),
            Cell::new(session.showcase().len()).set_alignment(CellAlignment::Right),
            Cell::new("Common graph traversal patterns"),
        ]);
        let _ = write!(out, "{}", metrics);
        Ok(out)
    }

    fn nodes(&self) -> PageResult {
        let mut out = String::new();
        for node in self.registry.nodes() {
            let _ = writeln!(out, "{}  {}", node.icon, node.name.bold());
            let _ = writeln!(out, "    Properties: {}", backticked(&node.properties));
            let _ = writeln!(out, "{}", "─".repeat(40).dimmed());
        }
        Ok(out)
    }

    fn edges(&self) -> PageResult {
        let mut out = String::new();
        for edge in self.registry.edges() {
            let _ = writeln!(
                out,
                "{}: {} → {}",
                edge.relationship.bold(),
                edge.from,
                edge.to
            );
            let _ = writeln!(out, "    From: `{}`  ➡️  To: `{}`", edge.from, edge.to);
            if !edge.properties.is_empty() {
                let _ = writeln!(out, "    Properties: {}", backticked(&edge.properties));
            }
            let _ = writeln!(out);
        }
        Ok(out)
    }

    fn queries(&self, session: &Session) -> PageResult {
        let showcase = session.showcase();
        let mut out = String::new();
        let _ = writeln!(out, "Select a query to view:");
        for (idx, label) in showcase.selector_labels().into_iter().enumerate() {
            if idx == session.selected_index() {
                let _ = writeln!(out, "  {} {}", "▶".green(), label.bold());
            } else {
                let _ = writeln!(out, "    {}", label);
            }
        }
        let _ = writeln!(out);

        let Some(example) = session.selected_query() else {
            let _ = writeln!(out, "{}", "No query examples available".yellow());
            return Ok(out);
        };

        let _ = writeln!(out, "{}", example.title.bold().cyan());
        let _ = writeln!(out, "{}\n", example.description.italic());
        let _ = writeln!(out, "{}", format!("💻 LanceGraph Query ({}):", example.language).bold());
        for line in example.query.lines() {
            let _ = writeln!(out, "    {}", line.green());
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", "📊 Sample Result:".bold());
        let _ = writeln!(out, "{}", ResultFormatter::format(&example.result, OutputFormat::Table)?);
        let _ = write!(
            out,
            "📥 Download: {} (run `download` or `foodgraph export {}`)",
            export_filename(session.selected_index()).cyan(),
            session.selected_index() + 1
        );
        Ok(out)
    }

    fn visualization(&self) -> PageResult {
        let viz = visualize(self.registry, &self.layout, &self.canvas)?;
        let mut out = String::new();

        let mut positions = new_table();
        positions.set_header(vec!["Node Type", "x", "y"]);
        for vertex in viz.layout.iter() {
            positions.add_row(vec![
                Cell::new(&vertex.name),
                Cell::new(format!("{:+.3}", vertex.position.x)).set_alignment(CellAlignment::Right),
                Cell::new(format!("{:+.3}", vertex.position.y)).set_alignment(CellAlignment::Right),
            ]);
        }
        let _ = writeln!(
            out,
            "Spring layout (seed {}, {} iterations):",
            self.layout.seed, self.layout.iterations
        );
        let _ = writeln!(out, "{}\n", positions);

        let _ = writeln!(out, "Edges (curved, rad {}):", self.canvas.arc_rad);
        for edge in &viz.edges {
            let _ = writeln!(
                out,
                "  {} ──{}──▶ {}  (label at {:+.3}, {:+.3})",
                edge.source,
                edge.label.bold(),
                edge.target,
                edge.label_at.x,
                edge.label_at.y
            );
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "{}", "🎨 Legend".bold());
        let legend: Vec<String> = self
            .registry
            .nodes()
            .iter()
            .map(|node| {
                let label = format!(" {} {} ", node.icon, node.name);
                match hex_rgb(&node.color) {
                    Some((r, g, b)) => label.bold().white().on_truecolor(r, g, b).to_string(),
                    None => label,
                }
            })
            .collect();
        let _ = writeln!(out, "{}", legend.join(" "));

        if let Some(path) = &self.svg_path {
            std::fs::write(path, &viz.svg)?;
            info!("wrote visualization to {:?}", path);
            let _ = write!(out, "\nDiagram written to {}", path.display().to_string().cyan());
        } else {
            let _ = write!(out, "\nRun `foodgraph render` to write the diagram as SVG");
        }
        Ok(out)
    }

    fn implementation(&self, selected: ImplementationTab) -> PageResult {
        let mut out = String::new();
        let tabs: Vec<String> = ImplementationTab::ALL
            .iter()
            .map(|tab| {
                if *tab == selected {
                    format!("[{}]", tab).bold().to_string()
                } else {
                    format!(" {} ", tab).dimmed().to_string()
                }
            })
            .collect();
        let _ = writeln!(out, "{}\n", tabs.join("  "));

        for section in selected.sections() {
            match section {
                Section::Heading(text) => {
                    let _ = writeln!(out, "{}", format!("{} {}", selected.icon(), text).bold().cyan());
                }
                Section::Paragraph(text) => {
                    let _ = writeln!(out, "{}", text.bold());
                }
                Section::Bullets(items) => {
                    for item in items.iter() {
                        let _ = writeln!(out, "  - {}", item);
                    }
                }
                Section::Code { language, text } => {
                    let _ = writeln!(out, "{}", format!("```{}", language).dimmed());
                    for line in text.lines() {
                        let _ = writeln!(out, "{}", line);
                    }
                    let _ = writeln!(out, "{}", "```".dimmed());
                }
            }
        }
        Ok(out)
    }
}

fn footer() -> String {
    let mut out = "─".repeat(60).dimmed().to_string();
    for (idx, line) in content::FOOTER.iter().enumerate() {
        let line = if idx == 0 {
            line.bold().to_string()
        } else {
            line.dimmed().to_string()
        };
        let _ = write!(out, "\n{}", line);
    }
    out
}

fn backticked(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("`{}`", item))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse `#rrggbb`
fn hex_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use foodgraph::QueryShowcase;
    use tempfile::TempDir;

    fn session_on(page: Page) -> Session {
        let mut session = Session::new(QueryShowcase::food_delivery());
        session.select_page(page);
        session
    }

    #[test]
    fn test_every_page_renders() {
        let registry = ModelRegistry::food_delivery();
        let router = PageRouter::new(&registry);
        for page in Page::ALL {
            let out = router.render(&session_on(page)).unwrap();
            assert!(out.contains(page.heading()), "{} heading missing", page.title());
            for line in content::FOOTER {
                assert!(out.contains(line), "{} footer missing {:?}", page.title(), line);
            }
        }
    }

    #[test]
    fn test_overview_reports_counts() {
        let registry = ModelRegistry::food_delivery();
        let out = PageRouter::new(&registry)
            .render(&session_on(Page::Overview))
            .unwrap();
        assert!(out.contains("Node Types"));
        assert!(out.contains("PLACES, FROM, CONTAINS, DELIVERS, SERVES, REVIEWS"));
        let row = |label: &str| {
            out.lines()
                .find(|line| line.contains(label))
                .map(|line| line.split('│').map(str::trim).collect::<Vec<_>>())
                .unwrap()
        };
        assert!(row("Node Types").contains(&"5"));
        assert!(row("Edge Types").contains(&"6"));
        assert!(row("Query Examples").contains(&"6"));
    }

    #[test]
    fn test_queries_page_shows_selected_example() {
        let registry = ModelRegistry::food_delivery();
        let mut session = session_on(Page::Queries);
        session.select_query(1).unwrap();
        let out = PageRouter::new(&registry).render(&session).unwrap();
        assert!(out.contains("Find dishes from a restaurant"));
        assert!(out.contains("Paneer Tikka"));
        assert!(out.contains("query_2_result.csv"));
    }

    #[test]
    fn test_implementation_tab_selection() {
        let registry = ModelRegistry::food_delivery();
        let mut session = session_on(Page::Implementation);
        session.select_tab(ImplementationTab::Deployment);
        let out = PageRouter::new(&registry).render(&session).unwrap();
        assert!(out.contains("Fraud Detection"));
        assert!(!out.contains("docker pull"));
    }

    #[test]
    fn test_visualization_writes_svg() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("graph.svg");
        let registry = ModelRegistry::food_delivery();
        let router = PageRouter::new(&registry).with_svg_path(Some(path.clone()));
        let out = router.render(&session_on(Page::Visualization)).unwrap();
        assert!(out.contains("DeliveryPerson"));
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.starts_with("<svg"));
    }

    #[test]
    fn test_hex_rgb() {
        assert_eq!(hex_rgb("#60a5fa"), Some((0x60, 0xa5, 0xfa)));
        assert_eq!(hex_rgb("60a5fa"), None);
        assert_eq!(hex_rgb("#zzzzzz"), None);
    }
}
