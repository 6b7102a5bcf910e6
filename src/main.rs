//! Wordsuggest - Main entrypoint.
//!
//! Loads configuration and the dictionary, then either runs the interactive
//! keystroke loop or answers a single query.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordsuggest_lib::config::{self, LogConfig, SuggestConfig};
use wordsuggest_lib::data_structures::PrefixIndex;
use wordsuggest_lib::dictionary;
use wordsuggest_lib::error::{
    ErrorContext, ErrorReporter, SuggestError, SuggestResult, TracingErrorReporter,
};
use wordsuggest_lib::session::{render_lines, Session};
use wordsuggest_lib::terminal;

/// Command line arguments for wordsuggest.
#[derive(Parser, Debug)]
#[clap(name = "wordsuggest", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Path to the dictionary, overriding the configured one
    #[clap(short, long, value_parser)]
    dictionary: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Suggest words interactively as you type
    Run,

    /// Print suggestions for a single prefix
    Query {
        /// Prefix to complete
        prefix: String,

        /// Print every match instead of the configured top suggestions
        #[clap(short, long)]
        all: bool,
    },

    /// Validate the configuration and dictionary
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr
/// so they never interleave with the redrawn suggestions.
fn init_logging(log: &LogConfig) -> SuggestResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(log.source_location)
        .with_file(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| SuggestError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Loads the configuration, exiting with a report on failure.
fn load_config(args: &Args, reporter: &dyn ErrorReporter) -> SuggestConfig {
    let loader = config::ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);
    match loader.load() {
        Ok(mut config) => {
            if let Some(path) = &args.dictionary {
                config.dictionary.path = path.clone();
            }
            config
        }
        Err(e) => {
            // Logging is not initialised yet, so the report goes to stderr as well
            let context = ErrorContext::new(e.into(), "config");
            eprintln!("{context}");
            reporter.report(&context);
            process::exit(1);
        }
    }
}

/// Builds the index from the configured dictionary, exiting with a report on failure.
fn load_index(config: &SuggestConfig, reporter: &dyn ErrorReporter) -> PrefixIndex {
    match dictionary::index_from_file(&config.dictionary.path) {
        Ok(index) => index,
        Err(e) => {
            let context = ErrorContext::new(e.into(), "dictionary")
                .with_details(format!("path: {}", config.dictionary.path.display()));
            reporter.report(&context);
            eprintln!("{context}");
            process::exit(1);
        }
    }
}

/// Main entry point for the application.
fn main() -> SuggestResult<()> {
    let args = <Args as clap::Parser>::parse();
    let reporter = TracingErrorReporter;

    let config = load_config(&args, &reporter);
    init_logging(&config.log)?;

    match args.command.unwrap_or(Command::Run) {
        Command::Run => {
            let index = load_index(&config, &reporter);
            info!(words = index.len(), "Starting interactive session");

            let mut session = Session::new(Arc::new(index), config.display.clone());
            let input = terminal::run(&mut session)?;
            info!(input = %input, "Session ended");
            Ok(())
        }
        Command::Query { prefix, all } => {
            let index = load_index(&config, &reporter);

            let mut suggestions = index.suggest(&prefix);
            if !all {
                suggestions.truncate(config.display.max_suggestions);
            }
            for line in render_lines(&prefix, &suggestions, &config.display) {
                println!("{line}");
            }
            Ok(())
        }
        Command::Validate => {
            info!("Validating configuration and dictionary");
            let index = load_index(&config, &reporter);
            println!(
                "Configuration valid; dictionary {} holds {} words",
                config.dictionary.path.display(),
                index.len()
            );
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = SuggestConfig::default();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent).map_err(SuggestError::Io)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| SuggestError::Custom(format!("Failed to serialize config: {e}")))?;

            std::fs::write(&output, toml).map_err(SuggestError::Io)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
