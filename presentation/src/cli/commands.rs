//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use trivia_domain::Category;

/// Output format for the run summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Summary,
    /// The full run report as JSON
    Json,
}

/// CLI arguments for trivia-generator
#[derive(Parser, Debug)]
#[command(name = "trivia-generator")]
#[command(author, version, about = "Generate trivia questions and forward them to storage")]
#[command(long_about = r#"
trivia-generator asks the generation service for N trivia questions in one
category, all at once, and sends every question it gets back to the storage
service.

A failed request (timeout, network error, bad status, malformed body) is
logged and skipped; it never stops the rest of the batch. The process exits
with status 0 once every request has finished, and with a non-zero status
only when configuration or startup fails.

Configuration files are loaded from (in priority order):
1. TRIVIA_<SECTION>__<FIELD> environment variables
2. --config <path>     Explicit config file
3. ./trivia.toml       Project-level config
4. ~/.config/trivia-generator/config.toml   Global config

Example:
  trivia-generator generate history
  trivia-generator generate "world geography" --question-number 25
  trivia-generator config set api_config host localhost
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files (environment still applies)
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate questions for a category and send them to storage
    Generate(GenerateArgs),

    /// Inspect or edit the configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Category for the trivia questions
    pub category: Category,

    /// Number of questions to generate [default: pipeline.question_number, or 10]
    #[arg(short = 'n', long, value_name = "N")]
    pub question_number: Option<usize>,

    /// Maximum number of requests in flight at once [default: unbounded]
    #[arg(long, value_name = "K")]
    pub max_concurrency: Option<NonZeroUsize>,

    /// Per-request timeout in seconds [default: pipeline.timeout_seconds, or 15]
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    pub output: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show configuration file locations
    Show,

    /// Set a single field, e.g. `config set api_config port 8000`
    Set {
        /// Section name (api_config, database_api_config, pipeline, logging)
        section: String,
        /// Field name within the section
        field: String,
        /// New value (cannot be empty)
        value: String,
    },
}
