// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Result table and model formatting for terminal output

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, CellAlignment, Table};
use foodgraph::{export, FoodGraphError, ModelRegistry, ResultTable};

use super::commands::OutputFormat;

/// Formats result tables in the requested output format
pub struct ResultFormatter;

impl ResultFormatter {
    pub fn format(table: &ResultTable, format: OutputFormat) -> Result<String, FoodGraphError> {
        match format {
            OutputFormat::Table => Ok(Self::format_table(table)),
            OutputFormat::Json => export::to_json(table),
            OutputFormat::Csv => export::to_csv(table),
        }
    }

    fn format_table(table: &ResultTable) -> String {
        let mut out = new_table();
        out.set_header(table.columns().iter().map(|c| Cell::new(c)));
        for row in table.rows() {
            out.add_row(row.iter().map(|cell| {
                let c = Cell::new(cell.to_string());
                if cell.is_numeric() {
                    c.set_alignment(CellAlignment::Right)
                } else {
                    c
                }
            }));
        }
        let count = table.row_count();
        format!(
            "{}\n({} row{})",
            out,
            count,
            if count == 1 { "" } else { "s" }
        )
    }
}

/// Formats the model registry
pub struct ModelFormatter;

impl ModelFormatter {
    pub fn format(registry: &ModelRegistry, format: OutputFormat) -> Result<String, FoodGraphError> {
        match format {
            OutputFormat::Json => registry.to_json_pretty(),
            OutputFormat::Table | OutputFormat::Csv => Ok(Self::format_tables(registry)),
        }
    }

    fn format_tables(registry: &ModelRegistry) -> String {
        let mut nodes = new_table();
        nodes.set_header(vec!["", "Node Type", "Properties", "Color"]);
        for node in registry.nodes() {
            nodes.add_row(vec![
                node.icon.clone(),
                node.name.clone(),
                node.properties.join(", "),
                node.color.clone(),
            ]);
        }

        let mut edges = new_table();
        edges.set_header(vec!["Relationship", "From", "To", "Properties"]);
        for edge in registry.edges() {
            edges.add_row(vec![
                edge.relationship.clone(),
                edge.from.clone(),
                edge.to.clone(),
                edge.properties.join(", "),
            ]);
        }

        format!("{}\n{}", nodes, edges)
    }
}

pub(crate) fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).apply_modifier(UTF8_ROUND_CORNERS);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use foodgraph::QueryShowcase;

    #[test]
    fn test_table_output_contains_cells() {
        let showcase = QueryShowcase::food_delivery();
        let out = ResultFormatter::format(&showcase.get(1).unwrap().result, OutputFormat::Table)
            .unwrap();
        assert!(out.contains("restaurant"));
        assert!(out.contains("Butter Chicken"));
        assert!(out.contains("280"));
        assert!(out.ends_with("(2 rows)"));
    }

    #[test]
    fn test_csv_output_matches_export() {
        let showcase = QueryShowcase::food_delivery();
        let table = &showcase.get(5).unwrap().result;
        let out = ResultFormatter::format(table, OutputFormat::Csv).unwrap();
        assert_eq!(out, "category,count\nMain Course,8\nDessert,5\nAppetizer,3\n");
    }

    #[test]
    fn test_json_output_parses() {
        let showcase = QueryShowcase::food_delivery();
        let out = ResultFormatter::format(&showcase.get(3).unwrap().result, OutputFormat::Json)
            .unwrap();
        let rows: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(rows[0]["restaurant"], "Spice Garden");
        assert_eq!(rows[1]["avg_rating"], 4.6);
    }

    #[test]
    fn test_model_tables() {
        let out = ModelFormatter::format(&ModelRegistry::food_delivery(), OutputFormat::Table)
            .unwrap();
        assert!(out.contains("DeliveryPerson"));
        assert!(out.contains("pickup_time"));
    }
}
