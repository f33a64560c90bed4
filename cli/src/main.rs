//! CLI entrypoint for trivia-generator
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod logging;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use trivia_application::{
    GenerateQuestionsInput, GenerateQuestionsUseCase, OutcomeLogger, PipelineParams, Severity,
};
use trivia_infrastructure::{
    ConfigLoader, ConfigWriter, FileConfig, HttpQuestionGenerator, HttpQuestionStore,
    TracingOutcomeLogger, build_http_client,
};
use trivia_presentation::{
    Cli, Command, ConfigCommand, ConsoleFormatter, GenerateArgs, OutputFormat, ProgressReporter,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = if cli.no_config {
        ConfigLoader::load_without_files()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    }
    .map_err(|e| anyhow!("failed to load configuration: {}", e))?;

    match &cli.command {
        Command::Config(command) => {
            logging::init_console(cli.verbose);
            run_config_command(&cli, command, &config)
        }
        Command::Generate(args) => {
            let _guard = logging::init(cli.verbose, &config.logging)?;
            run_generate(&cli, args, &config).await
        }
    }
}

fn run_config_command(cli: &Cli, command: &ConfigCommand, config: &FileConfig) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            if !cli.no_config {
                ConfigLoader::print_config_sources(cli.config.as_deref());
                println!();
            }
            let rendered =
                toml::to_string_pretty(config).context("failed to render configuration")?;
            println!("{}", rendered);
        }
        ConfigCommand::Set {
            section,
            field,
            value,
        } => {
            let path = ConfigLoader::writable_config_path(cli.config.as_deref());
            ConfigWriter::set_field(&path, section, field, value)?;
            println!("Set {}.{} = {} in {}", section, field, value, path.display());
        }
    }
    Ok(())
}

type HttpUseCase = GenerateQuestionsUseCase<HttpQuestionGenerator, HttpQuestionStore>;

async fn run_generate(cli: &Cli, args: &GenerateArgs, config: &FileConfig) -> Result<()> {
    let outcome_logger: Arc<dyn OutcomeLogger> = Arc::new(TracingOutcomeLogger);
    outcome_logger.record(
        Severity::Info,
        &format!(
            "trivia-generator {} started (category '{}')",
            env!("CARGO_PKG_VERSION"),
            args.category
        ),
    );

    let (use_case, input) = prepare(args, config, &outcome_logger)?;

    let report = if cli.quiet {
        use_case.execute(input).await
    } else {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await
    };

    let output = match args.output {
        OutputFormat::Summary => ConsoleFormatter::format(&report),
        OutputFormat::Json => ConsoleFormatter::format_json(&report),
    };
    println!("{}", output);

    outcome_logger.record(Severity::Info, "trivia-generator exiting");

    Ok(())
}

/// Pre-flight: nothing is spawned unless configuration and setup succeed
///
/// A failure is recorded together with an exit marker before it is returned.
fn prepare(
    args: &GenerateArgs,
    config: &FileConfig,
    outcome_logger: &Arc<dyn OutcomeLogger>,
) -> Result<(HttpUseCase, GenerateQuestionsInput)> {
    let prepared = build_pipeline(args, config, Arc::clone(outcome_logger));
    if let Err(e) = &prepared {
        outcome_logger.record(
            Severity::Error,
            &format!("trivia-generator cannot start: {:#}", e),
        );
        outcome_logger.record(Severity::Info, "trivia-generator exiting with failure");
    }
    prepared
}

fn build_pipeline(
    args: &GenerateArgs,
    config: &FileConfig,
    outcome_logger: Arc<dyn OutcomeLogger>,
) -> Result<(HttpUseCase, GenerateQuestionsInput)> {
    let endpoints = config.validate()?;
    let timeout = request_timeout(args, config);
    let params = pipeline_params(args, config);
    let count = args.question_number.unwrap_or(config.pipeline.question_number);

    // === Dependency Injection ===
    let client = build_http_client(timeout)?;
    let generator = HttpQuestionGenerator::new(client.clone(), &endpoints.generation, timeout);
    let store = HttpQuestionStore::new(client, &endpoints.storage, timeout);

    debug!(
        "Generation service {}, storage service {}, timeout {:?}, concurrency {:?}",
        generator.url(),
        store.url(),
        timeout,
        params.max_concurrency
    );

    let use_case = GenerateQuestionsUseCase::new(Arc::new(generator), Arc::new(store))
        .with_logger(outcome_logger)
        .with_params(params);

    Ok((use_case, GenerateQuestionsInput::new(args.category.clone(), count)))
}

/// `--timeout` wins over `pipeline.timeout_seconds`
fn request_timeout(args: &GenerateArgs, config: &FileConfig) -> Duration {
    args.timeout
        .map(Duration::from_secs)
        .unwrap_or_else(|| config.request_timeout())
}

/// `--max-concurrency` wins over `pipeline.max_concurrency`
fn pipeline_params(args: &GenerateArgs, config: &FileConfig) -> PipelineParams {
    let params = config.pipeline_params();
    match args.max_concurrency {
        Some(limit) => params.with_max_concurrency(Some(limit)),
        None => params,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroUsize;
    use std::sync::Mutex;
    use trivia_infrastructure::FileEndpointConfig;

    #[derive(Default)]
    struct RecordingLogger {
        entries: Mutex<Vec<(Severity, String)>>,
    }

    impl OutcomeLogger for RecordingLogger {
        fn record(&self, severity: Severity, message: &str) {
            self.entries
                .lock()
                .unwrap()
                .push((severity, message.to_string()));
        }
    }

    fn valid_config() -> FileConfig {
        let mut config = FileConfig::default();
        config.api_config = FileEndpointConfig::new("localhost", "8000");
        config.database_api_config = FileEndpointConfig::new("localhost", "8080");
        config
    }

    fn generate_args(argv: &[&str]) -> GenerateArgs {
        let mut full = vec!["trivia-generator", "generate", "history"];
        full.extend_from_slice(argv);
        match Cli::try_parse_from(full).unwrap().command {
            Command::Generate(args) => args,
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_timeout_defaults_to_config() {
        let config = FileConfig::default();
        assert_eq!(
            request_timeout(&generate_args(&[]), &config),
            Duration::from_secs(15)
        );
        assert_eq!(
            request_timeout(&generate_args(&["--timeout", "3"]), &config),
            Duration::from_secs(3)
        );
    }

    #[test]
    fn test_concurrency_override() {
        let mut config = FileConfig::default();
        config.pipeline.max_concurrency = Some(8);

        let from_config = pipeline_params(&generate_args(&[]), &config);
        assert_eq!(from_config.max_concurrency, NonZeroUsize::new(8));

        let from_cli = pipeline_params(&generate_args(&["--max-concurrency", "2"]), &config);
        assert_eq!(from_cli.max_concurrency, NonZeroUsize::new(2));
    }

    #[test]
    fn test_unbounded_by_default() {
        let params = pipeline_params(&generate_args(&[]), &FileConfig::default());
        assert!(!params.is_bounded());
    }

    #[test]
    fn test_invalid_config_is_logged_before_exit() {
        let recorder = Arc::new(RecordingLogger::default());
        let logger: Arc<dyn OutcomeLogger> = recorder.clone();

        let result = prepare(&generate_args(&[]), &FileConfig::default(), &logger);

        let error = result.err().expect("missing host must fail pre-flight");
        assert!(error.to_string().contains("api_config.host"));

        let entries = recorder.entries.lock().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, Severity::Error);
        assert!(entries[0].1.contains("cannot start"));
        assert!(entries[0].1.contains("api_config.host"));
        assert_eq!(
            entries[1],
            (
                Severity::Info,
                "trivia-generator exiting with failure".to_string()
            )
        );
    }

    #[test]
    fn test_valid_config_builds_pipeline_without_logging() {
        let recorder = Arc::new(RecordingLogger::default());
        let logger: Arc<dyn OutcomeLogger> = recorder.clone();

        let (_, input) = prepare(&generate_args(&["-n", "3"]), &valid_config(), &logger).unwrap();

        assert_eq!(input.count, 3);
        assert_eq!(input.category.as_str(), "history");
        assert!(recorder.entries.lock().unwrap().is_empty());
    }

    #[test]
    fn test_question_number_defaults_to_config() {
        let recorder = Arc::new(RecordingLogger::default());
        let logger: Arc<dyn OutcomeLogger> = recorder.clone();

        let (_, input) = prepare(&generate_args(&[]), &valid_config(), &logger).unwrap();
        assert_eq!(input.count, 10);
    }
}
