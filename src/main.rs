//! gosh - Main entrypoint.
//!
//! Loads configuration, initializes logging, reads the completion sources and
//! then either starts the interactive session or runs one of the one-shot
//! subcommands.

use clap::{Parser, Subcommand};
use gosh_lib::completion::{CompletionLoader, CompletionTable};
use gosh_lib::config::{ConfigLoader, GoshConfig, LogConfig, ENV_PREFIX};
use gosh_lib::error::{
    report_error, set_error_reporter, ErrorContext, GoshError, GoshResult, TracingErrorReporter,
};
use gosh_lib::shell::{CrosstermTerminal, Shell, SystemCommandRunner};
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::process;
use std::sync::{Arc, Mutex};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for gosh.
#[derive(Parser, Debug)]
#[clap(name = "gosh", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Start the interactive shell
    Start,

    /// Print the completions of a command for a prefix
    Complete {
        /// Command whose options are completed
        command: String,

        /// Prefix to complete; empty lists every option
        #[clap(default_value = "")]
        prefix: String,

        /// Print the suggestions as a JSON array
        #[clap(long)]
        json: bool,
    },

    /// Print the completion trie of a command
    Tree {
        /// Command whose trie is printed
        command: String,
    },

    /// Validate the configuration and completion sources
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Whether logging has to stay off stderr.
///
/// The interactive session draws on the same tty in raw mode, so it only
/// logs when a log file is configured.
fn silences_stderr(log: &LogConfig, interactive: bool) -> bool {
    interactive && log.file.is_none()
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig, interactive: bool) -> GoshResult<()> {
    let filter = if silences_stderr(log, interactive) {
        EnvFilter::new("off")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level))
    };
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = match &log.file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let builder = builder.with_ansi(false).with_writer(Mutex::new(file));
            if log.json {
                tracing::subscriber::set_global_default(builder.json().finish())
            } else {
                tracing::subscriber::set_global_default(builder.finish())
            }
        }
        None => {
            let builder = builder.with_writer(io::stderr);
            if log.json {
                tracing::subscriber::set_global_default(builder.json().finish())
            } else {
                tracing::subscriber::set_global_default(builder.finish())
            }
        }
    };

    result.map_err(|e| GoshError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Loads the completion table, exiting when the sources are unusable.
fn load_completions(config: &GoshConfig) -> CompletionTable {
    let loader = CompletionLoader::new(&config.completion.directory);
    match loader.load() {
        Ok(table) => table,
        Err(e) => {
            report_error(
                ErrorContext::new(GoshError::Completion(e), "completion")
                    .with_details(format!("directory: {}", loader.directory().display())),
            );
            process::exit(1);
        }
    }
}

/// Main entry point for the application.
fn main() -> GoshResult<()> {
    let args = Args::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let config = match config_loader.load() {
        Ok(config) => config,
        Err(e) => {
            report_error(ErrorContext::new(GoshError::Config(e), "config"));
            process::exit(1);
        }
    };

    let command = args.command.unwrap_or(Command::Start);
    init_logging(&config.log, matches!(command, Command::Start))?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    match command {
        Command::Start => {
            let table = load_completions(&config);
            info!(commands = table.len(), "Starting gosh");

            let terminal = CrosstermTerminal::new()?;
            let mut shell = Shell::new(
                terminal,
                SystemCommandRunner,
                &table,
                config.shell.clone(),
                &config.completion,
            );
            shell.run()
        }
        Command::Complete {
            command,
            prefix,
            json,
        } => {
            let table = load_completions(&config);
            let mut suggestions = table.suggest(&command, &prefix);
            suggestions.sort();

            if json {
                println!("{}", serde_json::to_string(&suggestions)?);
            } else {
                for suggestion in suggestions {
                    println!("{suggestion}");
                }
            }
            Ok(())
        }
        Command::Tree { command } => {
            let table = load_completions(&config);
            match table.get(&command) {
                Some(trie) => {
                    print!("{}", trie.debug_print(0));
                    Ok(())
                }
                None => Err(GoshError::Custom(format!(
                    "No completions loaded for command: {command}"
                ))),
            }
        }
        Command::Validate => {
            let table = load_completions(&config);
            info!(commands = table.len(), "Configuration validated successfully");
            println!(
                "Configuration OK, {} command(s) with completions",
                table.len()
            );
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = GoshConfig::default();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| GoshError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
