// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Interactive page navigator (REPL)

use colored::Colorize;
use foodgraph::export::{self, ExportFormat};
use foodgraph::{content, ImplementationTab, ModelRegistry, Page, QueryShowcase, Session};
use rustyline::{error::ReadlineError, CompletionType, Config, EditMode, Editor};
use std::path::{Path, PathBuf};

use super::pages::PageRouter;

/// One line of navigator input
#[derive(Debug, Clone, PartialEq)]
pub enum NavCommand {
    Empty,
    Exit,
    Help,
    Clear,
    Stats,
    Show(Page),
    /// 0-based query index
    SelectQuery(usize),
    Tab(ImplementationTab),
    Download(Option<PathBuf>),
}

/// Parse a navigator line
pub fn parse_command(line: &str) -> Result<NavCommand, String> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(NavCommand::Empty);
    };
    let arg = words.next();

    match (head.to_lowercase().as_str(), arg) {
        ("exit" | "quit", _) => Ok(NavCommand::Exit),
        ("help" | "?", _) => Ok(NavCommand::Help),
        ("clear", _) => Ok(NavCommand::Clear),
        ("stats", _) => Ok(NavCommand::Stats),
        ("download" | "save", dir) => Ok(NavCommand::Download(dir.map(PathBuf::from))),
        ("query" | "q", Some(n)) => n
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .map(NavCommand::SelectQuery)
            .ok_or_else(|| format!("Invalid query number: {}", n)),
        ("tab", Some(name)) => name
            .parse::<ImplementationTab>()
            .map(NavCommand::Tab)
            .map_err(|e| e.to_string()),
        ("tab", None) => Ok(NavCommand::Show(Page::Implementation)),
        _ => line
            .trim()
            .parse::<Page>()
            .map(NavCommand::Show)
            .map_err(|_| format!("Unknown command: {}", line.trim())),
    }
}

/// Run the navigator until the user exits
pub fn run(registry: &ModelRegistry, svg_path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let router = PageRouter::new(registry).with_svg_path(Some(svg_path));
    let mut session = Session::new(QueryShowcase::food_delivery());

    print_banner(registry, &session);

    let config = Config::builder()
        .edit_mode(EditMode::Emacs)
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .auto_add_history(true)
        .build();

    let mut rl = Editor::<(), _>::with_config(config)?;

    let history_path = ".foodgraph/.nav_history.txt";
    if let Some(parent) = Path::new(&history_path).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let _ = rl.load_history(&history_path);

    loop {
        let prompt = format!("{}> ", session.page().title().to_lowercase().cyan());
        let line = match rl.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        };

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(msg) => {
                println!("{}", msg.yellow());
                println!("Type 'help' for commands");
                continue;
            }
        };

        match command {
            NavCommand::Empty => continue,
            NavCommand::Exit => {
                println!("{}", "Goodbye!".green());
                break;
            }
            NavCommand::Help => {
                print_help(&session);
                continue;
            }
            NavCommand::Clear => {
                print!("\x1B[2J\x1B[1;1H");
                std::io::Write::flush(&mut std::io::stdout())?;
                continue;
            }
            NavCommand::Stats => {
                print_stats(registry, &session);
                continue;
            }
            NavCommand::Download(dir) => {
                download(&session, dir.as_deref().unwrap_or(Path::new(".")));
                continue;
            }
            NavCommand::Show(page) => session.select_page(page),
            NavCommand::SelectQuery(index) => {
                if let Err(e) = session.select_query(index) {
                    println!("{}", e.to_string().yellow());
                    continue;
                }
                session.select_page(Page::Queries);
            }
            NavCommand::Tab(tab) => {
                session.select_tab(tab);
                session.select_page(Page::Implementation);
            }
        }

        match router.render(&session) {
            Ok(page) => println!("{}\n", page),
            Err(e) => eprintln!("{}", format!("Error: {}", e).red()),
        }
    }

    let _ = rl.save_history(&history_path);
    Ok(())
}

fn download(session: &Session, dir: &Path) {
    let Some(example) = session.selected_query() else {
        println!("{}", "No query selected".yellow());
        return;
    };
    match export::write_export(dir, session.selected_index(), &example.result, ExportFormat::Csv) {
        Ok(path) => println!("{}", format!("Saved {}", path.display()).green()),
        Err(e) => eprintln!("{}", format!("Export failed: {}", e).red()),
    }
}

fn print_banner(registry: &ModelRegistry, session: &Session) {
    println!("{}", format!("🍕 {}", content::APP_TITLE).bold().green());
    println!("{}", content::APP_SUBTITLE.dimmed());
    println!();
    println!("{}", "📊 Navigation".bold());
    for page in Page::ALL {
        println!("  {}. {}", page.number(), page);
    }
    println!();
    print_stats(registry, session);
    println!("Type a page name or number, 'help' for commands, 'exit' to quit");
}

fn print_stats(registry: &ModelRegistry, session: &Session) {
    let stats = registry.stats();
    println!("{}", "🎯 Quick Stats".bold());
    println!("  Node Types:     {}", stats.node_types.to_string().cyan());
    println!("  Edge Types:     {}", stats.edge_types.to_string().cyan());
    println!("  Sample Queries: {}", session.showcase().len().to_string().cyan());
    println!();
}

fn print_help(session: &Session) {
    println!("{}", "Available commands:".bold().green());
    println!("  {}  - Open a page", "<page name | 1-6>".cyan());
    println!("  {}  - Select a query example", "query <n>".cyan());
    println!("  {}  - Save the selected result as CSV", "download [dir]".cyan());
    println!("  {}  - Switch implementation tab (setup, code, deployment)", "tab <name>".cyan());
    println!("  {}  - Show quick stats", "stats".cyan());
    println!("  {}  - Clear the screen", "clear".cyan());
    println!("  {}  - Exit the navigator", "exit/quit".cyan());
    println!("\n{}", "Query examples:".bold().green());
    for label in session.showcase().selector_labels() {
        println!("  {}", label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pages() {
        assert_eq!(parse_command("nodes"), Ok(NavCommand::Show(Page::Nodes)));
        assert_eq!(parse_command(" 5 "), Ok(NavCommand::Show(Page::Visualization)));
        assert_eq!(parse_command("query"), Ok(NavCommand::Show(Page::Queries)));
    }

    #[test]
    fn test_parse_query_selection() {
        assert_eq!(parse_command("query 2"), Ok(NavCommand::SelectQuery(1)));
        assert_eq!(parse_command("Q 6"), Ok(NavCommand::SelectQuery(5)));
        assert!(parse_command("query 0").is_err());
        assert!(parse_command("query two").is_err());
    }

    #[test]
    fn test_out_of_range_query_reports_typed_number() {
        let mut session = Session::new(QueryShowcase::food_delivery());
        let Ok(NavCommand::SelectQuery(index)) = parse_command("query 7") else {
            panic!("expected a query selection");
        };
        let err = session.select_query(index).unwrap_err();
        assert!(err.to_string().starts_with("Query 7 not found"));
    }

    #[test]
    fn test_parse_download_and_tab() {
        assert_eq!(parse_command("download"), Ok(NavCommand::Download(None)));
        assert_eq!(
            parse_command("download out"),
            Ok(NavCommand::Download(Some(PathBuf::from("out"))))
        );
        assert_eq!(
            parse_command("tab deploy"),
            Ok(NavCommand::Tab(ImplementationTab::Deployment))
        );
        assert!(parse_command("tab ops").is_err());
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!(parse_command(""), Ok(NavCommand::Empty));
        assert_eq!(parse_command("QUIT"), Ok(NavCommand::Exit));
        assert!(parse_command("settings").is_err());
    }
}
