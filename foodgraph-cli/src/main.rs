// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! foodgraph command-line entry point

mod cli;

use clap::Parser;
use colored::Colorize;
use foodgraph::{CanvasConfig, LayoutConfig};

use cli::{
    handle_browse, handle_export, handle_model, handle_page, handle_query, handle_render,
    handle_stats, handle_version, Cli, Commands,
};

fn init_logging(cli: &Cli) {
    let mut builder = match cli.level_filter() {
        Some(level) => {
            let mut builder = env_logger::Builder::new();
            builder.filter_level(level);
            builder
        }
        None => env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")),
    };
    builder.format_timestamp(None).init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let model = cli.model.as_deref();

    match cli.command {
        Commands::Version => {
            handle_version();
            Ok(())
        }
        Commands::Page {
            page,
            query,
            tab,
            svg,
        } => handle_page(model, page, query, tab, svg),
        Commands::Browse { svg } => handle_browse(model, svg),
        Commands::Query { number, format } => handle_query(number, format),
        Commands::Export {
            number,
            dir,
            format,
        } => handle_export(number, dir, format),
        Commands::Render {
            output,
            seed,
            iterations,
            k,
            width,
            height,
        } => {
            let mut layout = LayoutConfig {
                seed,
                iterations,
                ..LayoutConfig::default()
            };
            if k.is_some() {
                layout.k = k;
            }
            let canvas = CanvasConfig::with_size(width, height);
            handle_render(model, output, layout, canvas)
        }
        Commands::Model { format } => handle_model(model, format),
        Commands::Stats => handle_stats(model),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}
