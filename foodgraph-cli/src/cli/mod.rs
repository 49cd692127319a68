// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI module for foodgraph
//!
//! Provides one-shot page rendering, an interactive page navigator,
//! query result export and SVG rendering of the model graph.

pub mod commands;
pub mod handlers;
pub mod navigator;
pub mod output;
pub mod pages;

pub use commands::{Cli, Commands};
pub use handlers::{
    handle_browse, handle_export, handle_model, handle_page, handle_query, handle_render,
    handle_stats, handle_version,
};
