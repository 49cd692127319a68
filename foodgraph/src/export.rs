// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Result table export
//!
//! Provides:
//! - CSV serialization with a header row and standard quoting
//! - CSV parsing back into a typed table
//! - JSON serialization as an array of row objects
//! - Writing the "download" file `query_<n>_result.csv`

use crate::error::{FoodGraphError, Result};
use crate::showcase::{CellValue, ResultTable};
use log::{debug, info};
use serde_json::{Map, Value as JsonValue};
use std::path::{Path, PathBuf};

/// Export file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!("Unknown export format: {}. Valid options: csv, json", s)),
        }
    }
}

/// Download filename for the query at a 0-based index
pub fn export_filename(index: usize) -> String {
    export_filename_with(index, ExportFormat::Csv)
}

pub fn export_filename_with(index: usize, format: ExportFormat) -> String {
    format!("query_{}_result.{}", index + 1, format.extension())
}

/// Serialize a table as CSV text (header row, no index column)
pub fn to_csv(table: &ResultTable) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(table.columns())?;
    for row in table.rows() {
        wtr.write_record(row.iter().map(|cell| cell.to_string()))?;
    }
    wtr.flush()?;
    let bytes = wtr.into_inner()?;
    String::from_utf8(bytes).map_err(|e| FoodGraphError::Table(e.to_string()))
}

/// Parse CSV text produced by [`to_csv`] back into a table
pub fn from_csv(text: &str) -> Result<ResultTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let columns: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(CellValue::parse).collect());
    }
    ResultTable::new(columns, rows)
}

/// Serialize a table as a JSON array of objects keyed by column name
pub fn to_json(table: &ResultTable) -> Result<String> {
    let rows: Vec<JsonValue> = table
        .rows()
        .iter()
        .map(|row| -> Result<JsonValue> {
            let mut obj = Map::new();
            for (column, cell) in table.columns().iter().zip(row) {
                obj.insert(column.clone(), serde_json::to_value(cell)?);
            }
            Ok(JsonValue::Object(obj))
        })
        .collect::<Result<_>>()?;
    Ok(serde_json::to_string_pretty(&rows)?)
}

/// Encode a table in the requested format
pub fn encode(table: &ResultTable, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Csv => to_csv(table),
        ExportFormat::Json => to_json(table),
    }
}

/// Write the export file for the query at a 0-based index into `dir`
pub fn write_export(
    dir: &Path,
    index: usize,
    table: &ResultTable,
    format: ExportFormat,
) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_filename_with(index, format));
    let body = encode(table, format)?;
    debug!("encoded {} rows as {}", table.row_count(), format.extension());
    std::fs::write(&path, body)?;
    info!("exported query {} result to {:?}", index + 1, path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResultTable {
        ResultTable::from_columns(vec![
            ("restaurant", vec!["Spice Garden".into(), "Pizza Paradise".into()]),
            ("avg_rating", vec![CellValue::Float(4.7), CellValue::Float(4.6)]),
        ])
        .unwrap()
    }

    #[test]
    fn test_export_filename_is_one_based() {
        assert_eq!(export_filename(0), "query_1_result.csv");
        assert_eq!(export_filename(5), "query_6_result.csv");
        assert_eq!(export_filename_with(1, ExportFormat::Json), "query_2_result.json");
    }

    #[test]
    fn test_csv_layout() {
        let csv = to_csv(&sample()).unwrap();
        assert_eq!(
            csv,
            "restaurant,avg_rating\nSpice Garden,4.7\nPizza Paradise,4.6\n"
        );
    }

    #[test]
    fn test_csv_quotes_embedded_commas() {
        let table = ResultTable::from_columns(vec![(
            "location",
            vec!["Mumbai, MH".into()],
        )])
        .unwrap();
        let csv = to_csv(&table).unwrap();
        assert_eq!(csv, "location\n\"Mumbai, MH\"\n");
        assert_eq!(from_csv(&csv).unwrap(), table);
    }

    #[test]
    fn test_json_uses_native_numbers() {
        let json = to_json(&sample()).unwrap();
        let parsed: JsonValue = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["restaurant"], "Spice Garden");
        assert_eq!(parsed[1]["avg_rating"], 4.6);
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("CSV".parse::<ExportFormat>(), Ok(ExportFormat::Csv));
        assert_eq!("json".parse::<ExportFormat>(), Ok(ExportFormat::Json));
        assert!("xml".parse::<ExportFormat>().is_err());
    }
}
