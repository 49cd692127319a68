// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI command handlers for foodgraph

use colored::Colorize;
use foodgraph::export::{self, ExportFormat};
use foodgraph::{
    visualize, CanvasConfig, FoodGraphError, ImplementationTab, LayoutConfig, ModelRegistry, Page,
    QueryShowcase, Session,
};
use std::path::{Path, PathBuf};

use super::commands::OutputFormat;
use super::navigator;
use super::output::{ModelFormatter, ResultFormatter};
use super::pages::PageRouter;

/// Load the model registry, either the built-in one or from a JSON file
pub fn load_registry(model: Option<&Path>) -> Result<ModelRegistry, Box<dyn std::error::Error>> {
    match model {
        None => Ok(ModelRegistry::food_delivery()),
        Some(path) => {
            let registry = ModelRegistry::from_path(path)
                .map_err(|e| format!("Failed to load model from {:?}: {}", path, e))?;
            log::info!(
                "Loaded model from {:?} ({} node types, {} edge types)",
                path,
                registry.nodes().len(),
                registry.edges().len()
            );
            Ok(registry)
        }
    }
}

/// Convert a 1-based query number into an index
fn query_index(number: usize, showcase: &QueryShowcase) -> Result<usize, FoodGraphError> {
    number
        .checked_sub(1)
        .filter(|idx| *idx < showcase.len())
        .ok_or(FoodGraphError::QueryNotFound {
            number,
            available: showcase.len(),
        })
}

/// Handle the page command
pub fn handle_page(
    model: Option<&Path>,
    page: Page,
    query: usize,
    tab: ImplementationTab,
    svg: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let registry = load_registry(model)?;
    let mut session = Session::new(QueryShowcase::food_delivery());
    let index = query_index(query, session.showcase())?;
    session.select_query(index)?;
    session.select_tab(tab);
    session.select_page(page);

    let router = PageRouter::new(&registry).with_svg_path(svg);
    println!("{}", router.render(&session)?);
    Ok(())
}

/// Handle the browse command
pub fn handle_browse(model: Option<&Path>, svg: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let registry = load_registry(model)?;
    navigator::run(&registry, svg)
}

/// Handle the query command
pub fn handle_query(number: usize, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let showcase = QueryShowcase::food_delivery();
    let example = showcase.require(query_index(number, &showcase)?)?;

    if format == OutputFormat::Table {
        println!("{}", example.title.bold().green());
        println!("{}", example.description);
        println!();
        println!("{}", example.query.cyan());
        println!();
    }
    println!("{}", ResultFormatter::format(&example.result, format)?);
    Ok(())
}

/// Handle the export command
pub fn handle_export(
    number: usize,
    dir: PathBuf,
    format: ExportFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let showcase = QueryShowcase::food_delivery();
    let index = query_index(number, &showcase)?;
    let example = showcase.require(index)?;

    let path = export::write_export(&dir, index, &example.result, format)?;
    println!(
        "{}",
        format!(
            "Saved {} ({} rows)",
            path.display(),
            example.result.row_count()
        )
        .green()
    );
    Ok(())
}

/// Handle the render command
pub fn handle_render(
    model: Option<&Path>,
    output: PathBuf,
    layout: LayoutConfig,
    canvas: CanvasConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let registry = load_registry(model)?;
    let viz = visualize(&registry, &layout, &canvas)?;
    std::fs::write(&output, &viz.svg)?;

    println!("{}", format!("Wrote {}", output.display()).bold().green());
    println!("  Vertices: {}", viz.layout.len());
    println!("  Edges:    {}", viz.edges.len());
    println!("  Seed:     {}", layout.seed);
    if let Some(distance) = viz.layout.min_pairwise_distance() {
        println!("  Closest pair distance: {:.3}", distance);
    }
    Ok(())
}

/// Handle the model command
pub fn handle_model(
    model: Option<&Path>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let registry = load_registry(model)?;
    println!("{}", ModelFormatter::format(&registry, format)?);
    Ok(())
}

/// Handle the stats command
pub fn handle_stats(model: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let registry = load_registry(model)?;
    let stats = registry.stats();
    let showcase = QueryShowcase::food_delivery();

    println!("{}", "🎯 Quick Stats".bold());
    println!("  Node Types:     {}", stats.node_types.to_string().cyan());
    println!("  Edge Types:     {}", stats.edge_types.to_string().cyan());
    println!("  Sample Queries: {}", showcase.len().to_string().cyan());
    Ok(())
}

/// Handle the version command
pub fn handle_version() {
    println!("{}", "foodgraph".bold().green());
    println!("  Version: {}", env!("CARGO_PKG_VERSION"));
    println!("  Library: foodgraph {}", foodgraph::VERSION);
    println!("  License: {}", env!("CARGO_PKG_LICENSE"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_index_bounds() {
        let showcase = QueryShowcase::food_delivery();
        assert_eq!(query_index(1, &showcase).unwrap(), 0);
        assert_eq!(query_index(6, &showcase).unwrap(), 5);
        assert!(matches!(
            query_index(0, &showcase),
            Err(FoodGraphError::QueryNotFound { number: 0, available: 6 })
        ));
        assert!(query_index(7, &showcase).is_err());
    }

    #[test]
    fn test_load_registry_default() {
        let registry = load_registry(None).unwrap();
        assert_eq!(registry.stats().node_types, 5);
    }

    #[test]
    fn test_load_registry_reports_path() {
        let err = load_registry(Some(Path::new("does/not/exist.json"))).unwrap_err();
        assert!(err.to_string().contains("exist.json"));
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested");
        handle_export(2, out.clone(), ExportFormat::Csv).unwrap();
        let text = std::fs::read_to_string(out.join("query_2_result.csv")).unwrap();
        assert!(text.starts_with("restaurant,dish,price,category\n"));
    }

    #[test]
    fn test_render_writes_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.svg");
        handle_render(
            None,
            path.clone(),
            LayoutConfig::default(),
            CanvasConfig::default(),
        )
        .unwrap();
        let svg = std::fs::read_to_string(path).unwrap();
        assert!(svg.starts_with("<svg"));
    }
}
