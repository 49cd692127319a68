// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Query showcase
//!
//! A fixed list of example queries. The query text is opaque and never
//! executed; each example carries a hand-authored result table shown
//! alongside it.

mod catalog;
pub mod table;

pub use table::{CellValue, ResultTable};

use crate::error::{FoodGraphError, Result};
use serde::{Deserialize, Serialize};

/// One illustrative query with its precomputed result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryExample {
    pub title: String,
    pub description: String,
    /// Query text, shown verbatim
    pub query: String,
    /// Syntax highlighting hint for the query text
    pub language: String,
    pub result: ResultTable,
}

impl QueryExample {
    pub fn cypher(title: &str, description: &str, query: &str, result: ResultTable) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            query: query.to_string(),
            language: "cypher".to_string(),
            result,
        }
    }
}

/// Ordered collection of query examples
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryShowcase {
    examples: Vec<QueryExample>,
}

impl QueryShowcase {
    pub fn new(examples: Vec<QueryExample>) -> Self {
        Self { examples }
    }

    /// The six built-in food delivery examples
    pub fn food_delivery() -> Self {
        Self::new(catalog::food_delivery_queries())
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QueryExample> {
        self.examples.iter()
    }

    /// Example at a 0-based index
    pub fn get(&self, index: usize) -> Option<&QueryExample> {
        self.examples.get(index)
    }

    /// Example at a 0-based index, or `QueryNotFound`
    pub fn require(&self, index: usize) -> Result<&QueryExample> {
        self.get(index).ok_or(FoodGraphError::QueryNotFound {
            number: index + 1,
            available: self.examples.len(),
        })
    }

    pub fn find_by_title(&self, title: &str) -> Option<(usize, &QueryExample)> {
        self.examples
            .iter()
            .enumerate()
            .find(|(_, q)| q.title.eq_ignore_ascii_case(title))
    }

    /// Selector entries in the form `1. Title`
    pub fn selector_labels(&self) -> Vec<String> {
        self.examples
            .iter()
            .enumerate()
            .map(|(i, q)| format!("{}. {}", i + 1, q.title))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_rectangular() {
        let showcase = QueryShowcase::food_delivery();
        for example in showcase.iter() {
            let width = example.result.column_count();
            assert!(width > 0, "{} has no columns", example.title);
            for row in example.result.rows() {
                assert_eq!(row.len(), width, "ragged row in {}", example.title);
            }
        }
    }

    #[test]
    fn test_find_dishes_example() {
        let showcase = QueryShowcase::food_delivery();
        let (idx, example) = showcase
            .find_by_title("Find dishes from a restaurant")
            .expect("example should exist");
        assert_eq!(idx, 1);
        assert_eq!(example.language, "cypher");
        assert!(example.query.starts_with("MATCH (r:Restaurant {name: 'Spice Garden'})"));
        assert!(example.query.contains("\nRETURN r.name, d.name, d.price, d.category"));

        let table = &example.result;
        assert_eq!(table.columns(), &["restaurant", "dish", "price", "category"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(
            table.rows()[0],
            vec![
                CellValue::from("Spice Garden"),
                CellValue::from("Butter Chicken"),
                CellValue::Integer(280),
                CellValue::from("Main Course"),
            ]
        );
    }

    #[test]
    fn test_multiline_query_text_keeps_indentation() {
        let showcase = QueryShowcase::food_delivery();
        let chain = showcase.get(2).unwrap();
        assert!(chain.query.contains("(r:Restaurant),\n      (o)-[:CONTAINS]->(d:Dish)"));
    }

    #[test]
    fn test_selector_labels_are_one_based() {
        let labels = QueryShowcase::food_delivery().selector_labels();
        assert_eq!(labels.len(), 6);
        assert_eq!(labels[0], "1. Find all orders by a customer");
        assert_eq!(labels[5], "6. Customer preferences");
    }

    #[test]
    fn test_require_out_of_range() {
        let showcase = QueryShowcase::food_delivery();
        assert!(matches!(
            showcase.require(6),
            Err(FoodGraphError::QueryNotFound { number: 7, available: 6 })
        ));
    }
}
