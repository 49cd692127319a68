// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Error types for foodgraph

use std::fmt;
use thiserror::Error;

/// Result type alias for foodgraph operations
pub type Result<T> = std::result::Result<T, FoodGraphError>;

/// Which end of an edge type failed to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEnd {
    From,
    To,
}

impl fmt::Display for EdgeEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeEnd::From => write!(f, "from"),
            EdgeEnd::To => write!(f, "to"),
        }
    }
}

/// Violations of the model registry invariants
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelIntegrityError {
    /// An edge type names a node type the registry does not define
    #[error("edge type '{relationship}' has `{end}` = '{node_type}', which is not a registered node type")]
    DanglingEndpoint {
        relationship: String,
        end: EdgeEnd,
        node_type: String,
    },

    /// Two node types share a name
    #[error("node type '{0}' is defined more than once")]
    DuplicateNodeType(String),

    /// An edge type without a relationship label
    #[error("edge type {from} -> {to} has an empty relationship label")]
    EmptyRelationship { from: String, to: String },
}

/// Main error type for foodgraph
#[derive(Error, Debug)]
pub enum FoodGraphError {
    /// The model registry is inconsistent
    #[error("Model integrity error: {0}")]
    ModelIntegrity(#[from] ModelIntegrityError),

    /// A result table whose rows do not match its header
    #[error("Table error: {0}")]
    Table(String),

    /// Query example selection outside the showcase; `number` is 1-based
    #[error("Query {number} not found ({available} examples available)")]
    QueryNotFound { number: usize, available: usize },

    /// Unrecognised page selector
    #[error("Unknown page: {0}")]
    UnknownPage(String),

    /// Unrecognised implementation tab selector
    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    /// CSV encoding or decoding errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON encoding or decoding errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::IntoInnerError<csv::Writer<Vec<u8>>>> for FoodGraphError {
    fn from(e: csv::IntoInnerError<csv::Writer<Vec<u8>>>) -> Self {
        FoodGraphError::Io(e.into_error())
    }
}
