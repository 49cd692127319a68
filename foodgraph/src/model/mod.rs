// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Graph data model
//!
//! This module provides:
//! - Node type and edge type descriptors with display metadata
//! - A validated registry enforcing name uniqueness and edge endpoint integrity
//! - The built-in food delivery model
//! - Conversion to a directed graph for layout

mod catalog;
pub mod registry;
pub mod types;

pub use registry::{ModelGraph, ModelRegistry};
pub use types::{EdgeType, ModelStats, NodeType};
