use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::catalog;
use crate::clipboard::copy_to_clipboard;
use crate::config::AppConfig;
use crate::history::{HistoryStore, format_time, generate_preview};
use crate::models::{AnalysisRequest, CodeExample, HistoryRecord, RecordId};
use crate::perf::{memory_info, visible_items};
use crate::storage::FileStore;
use crate::theme::{EnvAppearance, ThemeManager};
use crate::utils::{format_path_with_tilde, parse_capacity, strip_ansi_codes};

#[derive(Parser)]
#[command(name = "kc-analyzer")]
#[command(version = "0.1.0")]
#[command(about = "Keep a local history of code analysis runs", long_about = None)]
pub struct Cli {
    /// Directory for persisted data (default: platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Maximum number of history records kept
    #[arg(long, global = true, value_name = "N", value_parser = parse_capacity_arg)]
    pub capacity: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Save, list and remove analysis records
    History {
        #[command(subcommand)]
        command: HistoryCommand,
    },
    /// Print the one-line preview of a snippet
    Preview {
        /// Read code from this file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Browse the built-in sample snippets
    Examples {
        #[command(subcommand)]
        command: ExamplesCommand,
    },
    /// Show or change the display theme
    Theme {
        #[command(subcommand)]
        command: ThemeCommand,
    },
    /// Resource readouts for this process
    Perf {
        #[command(subcommand)]
        command: PerfCommand,
    },
}

#[derive(Subcommand)]
pub enum HistoryCommand {
    /// Save a new record (code from --file or stdin)
    Save {
        #[arg(long)]
        language: String,
        #[arg(long)]
        file: Option<PathBuf>,
        /// Analysis result as JSON
        #[arg(long, value_name = "JSON")]
        result: Option<String>,
    },
    /// List records, newest first
    List {
        #[arg(long, default_value_t = 0)]
        offset: usize,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print one record in full
    Show { id: RecordId },
    /// Delete one record
    Delete { id: RecordId },
    /// Delete every record
    Clear,
    /// Copy a record's code to the clipboard
    Copy { id: RecordId },
}

#[derive(Subcommand)]
pub enum ExamplesCommand {
    /// List examples, optionally filtered
    List {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        language: Option<String>,
    },
    /// List categories
    Categories,
    /// Print an example's code
    Show { id: String },
    /// Fuzzy-search examples by name
    Search { query: String },
    /// Save an example into history
    Save { id: String },
}

#[derive(Subcommand)]
pub enum ThemeCommand {
    /// Print the current theme
    Get,
    /// Persist a theme (light or dark)
    Set { theme: String },
    /// Switch between light and dark
    Toggle,
}

#[derive(Subcommand)]
pub enum PerfCommand {
    /// Peak memory of this process
    Memory,
}

fn parse_capacity_arg(raw: &str) -> Result<usize, String> {
    parse_capacity(raw).map_err(|e| e.to_string())
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    let config = AppConfig::resolve(cli.data_dir, cli.capacity)?;
    tracing::debug!(data_dir = %format_path_with_tilde(&config.data_dir), "resolved config");
    let storage = FileStore::new(&config.data_dir);

    match command {
        Commands::History { command } => {
            let store = HistoryStore::new(&storage, config.history.clone());
            run_history(&store, command)
        }
        Commands::Preview { file } => {
            let code = read_code(file.as_deref())?;
            println!("{}", strip_ansi_codes(&generate_preview(&code)));
            Ok(())
        }
        Commands::Examples { command } => {
            let store = HistoryStore::new(&storage, config.history.clone());
            run_examples(&store, command)
        }
        Commands::Theme { command } => {
            let manager = ThemeManager::with_key(&storage, EnvAppearance, config.theme_key);
            run_theme(&manager, command)
        }
        Commands::Perf { command: PerfCommand::Memory } => {
            match memory_info() {
                Some(info) => println!("Peak memory: {}", info),
                None => println!("Memory readout unavailable on this platform"),
            }
            Ok(())
        }
    }
}

fn run_history(store: &HistoryStore<&FileStore>, command: HistoryCommand) -> Result<()> {
    match command {
        HistoryCommand::Save { language, file, result } => {
            let code = read_code(file.as_deref())?;
            let result = match result {
                Some(raw) => serde_json::from_str(&raw).context("Invalid --result JSON")?,
                None => Value::Null,
            };
            let record = store.try_save(AnalysisRequest::new(code, language, result))?;
            println!("Saved record {}", record.id);
        }
        HistoryCommand::List { offset, limit } => {
            let records = store.get_all();
            if records.is_empty() {
                println!("No history records");
                return Ok(());
            }
            let end = limit.map_or(records.len(), |limit| offset.saturating_add(limit));
            for record in visible_items(&records, offset, end) {
                print_record_line(record);
            }
        }
        HistoryCommand::Show { id } => {
            let record = store.try_get_by_id(id)?;
            print_record(&record)?;
        }
        HistoryCommand::Delete { id } => {
            let removed = store.try_delete(id)?;
            if removed == 0 {
                println!("No record with id {}", id);
            } else {
                println!("Deleted record {}", id);
            }
        }
        HistoryCommand::Clear => {
            store.try_clear()?;
            println!("History cleared");
        }
        HistoryCommand::Copy { id } => {
            let record = store.try_get_by_id(id)?;
            copy_to_clipboard(&record.code)?;
            println!("Copied {} bytes to clipboard", record.code.len());
        }
    }
    Ok(())
}

fn run_examples(store: &HistoryStore<&FileStore>, command: ExamplesCommand) -> Result<()> {
    match command {
        ExamplesCommand::List { category, language } => {
            let examples = match category.as_deref() {
                Some(category) => catalog::by_category(category),
                None => catalog::all().iter().collect(),
            };
            examples
                .into_iter()
                .filter(|ex| {
                    language.as_deref().is_none_or(|l| ex.language.eq_ignore_ascii_case(l))
                })
                .for_each(print_example_line);
        }
        ExamplesCommand::Categories => {
            for category in catalog::categories() {
                println!("{}", category);
            }
        }
        ExamplesCommand::Show { id } => {
            let example = find_example(&id)?;
            println!("{}", example.code);
        }
        ExamplesCommand::Search { query } => {
            let results = catalog::search(&query);
            if results.is_empty() {
                println!("No examples match {:?}", query);
            }
            results.into_iter().for_each(print_example_line);
        }
        ExamplesCommand::Save { id } => {
            let example = find_example(&id)?;
            let request = AnalysisRequest::new(example.code, example.language, Value::Null);
            let record = store.try_save(request)?;
            println!("Saved record {}", record.id);
        }
    }
    Ok(())
}

fn run_theme(
    manager: &ThemeManager<&FileStore, EnvAppearance>,
    command: ThemeCommand,
) -> Result<()> {
    let theme = match command {
        ThemeCommand::Get => manager.current_theme(),
        ThemeCommand::Set { theme } => manager.set_theme_name(&theme)?,
        ThemeCommand::Toggle => manager.toggle()?,
    };
    println!("{}", theme);
    Ok(())
}

fn find_example(id: &str) -> Result<&'static CodeExample> {
    match catalog::find(id) {
        Some(example) => Ok(example),
        None => bail!("Unknown example: {}", id),
    }
}

fn read_code(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read code file: {}", path.display())),
        None => {
            let mut code = String::new();
            io::stdin().read_to_string(&mut code).context("Failed to read code from stdin")?;
            Ok(code)
        }
    }
}

fn print_record_line(record: &HistoryRecord) {
    println!(
        "{:<15} {:<16} {:<12} {}",
        record.id,
        format_time(&record.timestamp),
        strip_ansi_codes(&record.language),
        strip_ansi_codes(&record.preview)
    );
}

fn print_record(record: &HistoryRecord) -> Result<()> {
    let result = serde_json::to_string_pretty(&record.result)?;
    println!("ID:       {}", record.id);
    println!("Saved:    {} ({})", format_time(&record.timestamp), record.timestamp.to_rfc3339());
    println!("Language: {}", strip_ansi_codes(&record.language));
    println!("Result:   {}", strip_ansi_codes(&result));
    println!();
    println!("{}", strip_ansi_codes(&record.code));
    Ok(())
}

fn print_example_line(example: &CodeExample) {
    println!(
        "{:<16} {:<12} {:<20} {}",
        example.id, example.language, example.category, example.name
    );
}
