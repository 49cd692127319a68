// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI command definitions for foodgraph

use clap::{Parser, Subcommand, ValueEnum};
use foodgraph::{ExportFormat, ImplementationTab, Page};
use std::path::PathBuf;

/// Log level options
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only errors
    Error,
    /// Warnings and errors
    Warn,
    /// Info, warnings, and errors
    Info,
    /// Debug messages and above (verbose)
    Debug,
    /// All messages including trace (very verbose)
    Trace,
    /// Disable all logging
    Off,
}

impl LogLevel {
    /// Convert to log::LevelFilter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Off => log::LevelFilter::Off,
        }
    }
}

/// foodgraph CLI - Food delivery graph model demo
#[derive(Parser)]
#[command(name = "foodgraph")]
#[command(about = "foodgraph - Food delivery graph data model demo")]
#[command(version)]
pub struct Cli {
    /// JSON model file to use instead of the built-in food delivery model
    #[arg(short = 'm', long = "model", global = true)]
    pub model: Option<PathBuf>,

    /// Set log level (error, warn, info, debug, trace, off)
    #[arg(short = 'l', long = "log-level", global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Verbose mode (equivalent to --log-level debug)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Effective log level, if one was requested on the command line
    pub fn level_filter(&self) -> Option<log::LevelFilter> {
        if self.verbose {
            Some(log::LevelFilter::Debug)
        } else {
            self.log_level.map(LogLevel::to_level_filter)
        }
    }
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show detailed version information
    Version,

    /// Render one page (overview, nodes, edges, queries, visualization, implementation)
    Page {
        /// Page name or 1-based sidebar number
        page: Page,

        /// Query example to show on the queries page (1-based)
        #[arg(short, long, default_value_t = 1)]
        query: usize,

        /// Tab to show on the implementation page (setup, code, deployment)
        #[arg(short, long, default_value = "setup")]
        tab: ImplementationTab,

        /// Where the visualization page writes its SVG
        #[arg(long)]
        svg: Option<PathBuf>,
    },

    /// Interactive page navigator
    Browse {
        /// Where the visualization page writes its SVG
        #[arg(long, default_value = "foodgraph.svg")]
        svg: PathBuf,
    },

    /// Show one query example with its result table
    Query {
        /// Query example number (1-based)
        number: usize,

        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Download a query example's result table
    Export {
        /// Query example number (1-based)
        number: usize,

        /// Directory to write into
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Export format (csv, json)
        #[arg(short, long, default_value = "csv")]
        format: ExportFormat,
    },

    /// Lay out the model graph and write it as SVG
    Render {
        /// Output path
        #[arg(short, long, default_value = "foodgraph.svg")]
        output: PathBuf,

        /// Seed for the initial placement
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Layout iteration budget
        #[arg(long, default_value_t = 50)]
        iterations: usize,

        /// Optimal vertex distance (defaults to 2.0)
        #[arg(long)]
        k: Option<f64>,

        /// Canvas width in pixels
        #[arg(long, default_value_t = 1400.0)]
        width: f64,

        /// Canvas height in pixels
        #[arg(long, default_value_t = 1000.0)]
        height: f64,
    },

    /// Print the model registry
    Model {
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Print quick stats
    Stats,
}

/// Output format options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_command_parses() {
        let cli = Cli::try_parse_from(["foodgraph", "page", "queries", "--query", "2"]).unwrap();
        match cli.command {
            Commands::Page { page, query, tab, svg } => {
                assert_eq!(page, Page::Queries);
                assert_eq!(query, 2);
                assert_eq!(tab, ImplementationTab::Setup);
                assert!(svg.is_none());
            }
            _ => panic!("expected page command"),
        }
    }

    #[test]
    fn test_unknown_page_rejected() {
        assert!(Cli::try_parse_from(["foodgraph", "page", "settings"]).is_err());
    }

    #[test]
    fn test_export_defaults() {
        let cli = Cli::try_parse_from(["foodgraph", "export", "3"]).unwrap();
        match cli.command {
            Commands::Export { number, dir, format } => {
                assert_eq!(number, 3);
                assert_eq!(dir, PathBuf::from("."));
                assert_eq!(format, ExportFormat::Csv);
            }
            _ => panic!("expected export command"),
        }
    }

    #[test]
    fn test_verbose_wins_over_log_level() {
        let cli = Cli::try_parse_from(["foodgraph", "-l", "error", "-v", "stats"]).unwrap();
        assert_eq!(cli.level_filter(), Some(log::LevelFilter::Debug));
        let quiet = Cli::try_parse_from(["foodgraph", "stats"]).unwrap();
        assert_eq!(quiet.level_filter(), None);
    }

    #[test]
    fn test_global_model_flag() {
        let cli = Cli::try_parse_from(["foodgraph", "render", "--model", "m.json"]).unwrap();
        assert_eq!(cli.model, Some(PathBuf::from("m.json")));
    }
}
