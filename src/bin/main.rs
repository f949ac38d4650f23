//! adhoc-filter CLI - classify selector options into adhoc filters
//!
//! Usage:
//!   adhoc-filter classify --selection <selection.json> [--context <context.json>] [--pretty]
//!   adhoc-filter validate <filters.json>
//!   adhoc-filter sql <filters.json>
//!
//! Examples:
//!   adhoc-filter classify --selection selection.json --context datasource.json
//!   adhoc-filter --config adhoc-filter.toml classify --selection selection.json
//!   adhoc-filter sql filters.json

use adhoc_filter::classify::{Classifier, ClassifyContext};
use adhoc_filter::config::Settings;
use adhoc_filter::filter::AdhocFilter;
use adhoc_filter::model::SelectableOption;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const ENV_LOG: &str = "ADHOC_FILTER_LOG";

#[derive(Parser)]
#[command(name = "adhoc-filter")]
#[command(about = "Classify selected columns and metrics into adhoc filters")]
#[command(version)]
struct Cli {
    /// Path to an adhoc-filter.toml settings file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a selection into filters and print them as JSON
    Classify {
        /// JSON array of selected options
        #[arg(short, long)]
        selection: PathBuf,

        /// JSON object with the datasource's columns and saved metrics
        #[arg(long)]
        context: Option<PathBuf>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Check that every filter in a file is complete
    Validate {
        /// JSON array of filters
        file: PathBuf,
    },

    /// Print each filter as SQL text
    Sql {
        /// JSON array of filters
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match Settings::load_or_default(cli.config.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings.logging.level);
    tracing::debug!(config = ?cli.config, "Settings loaded");

    match cli.command {
        Commands::Classify {
            selection,
            context,
            pretty,
        } => cmd_classify(&settings, selection, context, pretty),
        Commands::Validate { file } => cmd_validate(file),
        Commands::Sql { file } => cmd_sql(file),
    }
}

fn init_logging(level: &str) {
    let filter = std::env::var(ENV_LOG)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| level.to_string());

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .compact()
        .with_env_filter(EnvFilter::new(filter))
        .init();
}

fn read_json(path: &Path) -> Result<serde_json::Value, String> {
    let source = fs::read_to_string(path)
        .map_err(|e| format!("Error reading file '{}': {}", path.display(), e))?;
    serde_json::from_str(&source)
        .map_err(|e| format!("Invalid JSON in '{}': {}", path.display(), e))
}

fn read_filters(path: &Path) -> Result<Vec<AdhocFilter>, String> {
    let value = read_json(path)?;
    serde_json::from_value(value)
        .map_err(|e| format!("Invalid filters in '{}': {}", path.display(), e))
}

fn cmd_classify(
    settings: &Settings,
    selection: PathBuf,
    context: Option<PathBuf>,
    pretty: bool,
) -> ExitCode {
    let options = match read_json(&selection)
        .and_then(|v| SelectableOption::from_json_list(&v).map_err(|e| e.to_string()))
    {
        Ok(o) => o,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let ctx = match context {
        Some(path) => match read_json(&path).and_then(|v| {
            serde_json::from_value::<ClassifyContext>(v).map_err(|e| e.to_string())
        }) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => ClassifyContext::default(),
    };

    let classifier = Classifier::new(settings.classifier.clone());
    let filters = match classifier.classify(&options, &ctx) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Classification error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let output = if pretty {
        serde_json::to_string_pretty(&filters)
    } else {
        serde_json::to_string(&filters)
    };

    match output {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing filters: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_validate(file: PathBuf) -> ExitCode {
    let filters = match read_filters(&file) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let invalid: Vec<(usize, &AdhocFilter)> = filters
        .iter()
        .enumerate()
        .filter(|(_, f)| !f.is_valid())
        .collect();

    if invalid.is_empty() {
        println!("✓ {} filter(s) valid", filters.len());
        return ExitCode::SUCCESS;
    }

    eprintln!("Invalid filters:");
    for (index, filter) in invalid {
        eprintln!("  [{}] {}", index, filter);
    }
    ExitCode::FAILURE
}

fn cmd_sql(file: PathBuf) -> ExitCode {
    match read_filters(&file) {
        Ok(filters) => {
            for filter in &filters {
                println!("{}", filter.to_sql());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
