// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Fixed result tables for query examples

use crate::error::{FoodGraphError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar cell in an illustrative result table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// Infer a cell from its textual form: integer, then float, else text.
    ///
    /// A number is only inferred when it prints back as `raw`, so text such
    /// as `007`, `+44` or `4.50` stays text.
    pub fn parse(raw: &str) -> Self {
        if let Ok(i) = raw.parse::<i64>() {
            if i.to_string() == raw {
                return CellValue::Integer(i);
            }
        }
        match raw.parse::<f64>() {
            Ok(f) if f.is_finite() && f.to_string() == raw => CellValue::Float(f),
            _ => CellValue::Text(raw.to_string()),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, CellValue::Integer(_) | CellValue::Float(_))
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Integer(i) => write!(f, "{}", i),
            CellValue::Float(x) => write!(f, "{}", x),
            CellValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Integer(i)
    }
}

impl From<f64> for CellValue {
    fn from(x: f64) -> Self {
        CellValue::Float(x)
    }
}

/// Column-named rows of scalar cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultTable {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl ResultTable {
    /// Build a table from a header and rows; every row must match the header width
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Result<Self> {
        if let Some((idx, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != columns.len())
        {
            return Err(FoodGraphError::Table(format!(
                "row {} has {} cells but the table has {} columns",
                idx,
                row.len(),
                columns.len()
            )));
        }
        Ok(Self { columns, rows })
    }

    /// Build a table column by column
    pub fn from_columns(columns: Vec<(&str, Vec<CellValue>)>) -> Result<Self> {
        let height = columns.first().map(|(_, cells)| cells.len()).unwrap_or(0);
        if let Some((name, cells)) = columns.iter().find(|(_, cells)| cells.len() != height) {
            return Err(FoodGraphError::Table(format!(
                "column '{}' has {} values, expected {}",
                name,
                cells.len(),
                height
            )));
        }

        Ok(Self::transpose(columns, height))
    }

    /// Built-in tables are checked by the showcase tests instead of at runtime
    pub(crate) fn authored(columns: Vec<(&str, Vec<CellValue>)>) -> Self {
        let height = columns.first().map(|(_, cells)| cells.len()).unwrap_or(0);
        debug_assert!(columns.iter().all(|(_, cells)| cells.len() == height));
        Self::transpose(columns, height)
    }

    fn transpose(columns: Vec<(&str, Vec<CellValue>)>, height: usize) -> Self {
        let names = columns.iter().map(|(name, _)| name.to_string()).collect();
        let mut rows = vec![Vec::with_capacity(columns.len()); height];
        for (_, cells) in columns {
            for (row, cell) in rows.iter_mut().zip(cells) {
                row.push(cell);
            }
        }
        Self {
            columns: names,
            rows,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at (row, column name)
    pub fn cell(&self, row: usize, column: &str) -> Option<&CellValue> {
        let col = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row).and_then(|r| r.get(col))
    }
}
