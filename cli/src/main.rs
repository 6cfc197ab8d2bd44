//! CLI entrypoint for docqa
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use docqa_application::{Completion, DispatchOutcome, SessionController};
use docqa_domain::{OutputFormat, QueryMode};
use docqa_infrastructure::{ConfigLoader, HttpQaBackend};
use docqa_presentation::{
    ChatRepl, Cli, ConsoleFormatter, OutputConfig, ProgressReporter, ReplConfig,
};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting docqa");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    if let Some(base_url) = &cli.base_url {
        config.backend.base_url = base_url.clone();
    }
    config.validate().context("Invalid configuration")?;

    let output = OutputConfig {
        format: cli.output.or(config.output.format).unwrap_or_default(),
        color: config.output.color,
    };
    output.apply_color();
    let show_progress = !cli.quiet && config.repl.show_progress;

    // === Dependency Injection ===
    let backend = Arc::new(HttpQaBackend::new(&config.backend)?);
    info!("Using backend at {}", backend.base_url());

    let reporter = ProgressReporter::new()
        .with_progress(show_progress)
        .with_session_notices(cli.chat);
    let mut controller = SessionController::new(backend, config.session.to_session_params())
        .with_observer(Arc::new(reporter));

    if cli.list_documents {
        let documents = controller.documents().await?;
        match output.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&documents)?),
            _ => println!(
                "{}",
                ConsoleFormatter::documents(&documents, controller.session())
            ),
        }
        return Ok(ExitCode::SUCCESS);
    }

    apply_selection(&mut controller, &cli);

    // Chat mode
    if cli.chat {
        let repl_config = ReplConfig {
            history_file: config.repl.history_path(),
        };
        ChatRepl::new(controller)
            .with_config(repl_config)
            .run()
            .await?;
        return Ok(ExitCode::SUCCESS);
    }

    // Single question mode - question is required
    let question = match cli.question {
        Some(q) => q,
        None => bail!("Question is required. Use --chat for interactive mode."),
    };

    Ok(run_one_shot(&mut controller, &question, output.format).await)
}

fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    // Initialize logging based on verbosity level; RUST_LOG wins when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

/// Apply `--mode`, `--document` and `--compare` to a fresh session
fn apply_selection(controller: &mut SessionController, cli: &Cli) {
    match cli.mode {
        Some(mode) => controller.set_mode(mode),
        // A compare set on its own implies compare mode
        None if !cli.compare.is_empty() => controller.set_mode(QueryMode::Compare),
        None => {}
    }
    if cli.document.is_some() {
        controller.select_document(cli.document);
    }
    if !cli.compare.is_empty() {
        controller.set_compare_documents(cli.compare.iter().copied());
    }
}

/// Submit one question and print the result.
///
/// Validation and arena failures have already been reported by the
/// observer; they only affect the exit code here.
async fn run_one_shot(
    controller: &mut SessionController,
    question: &str,
    format: OutputFormat,
) -> ExitCode {
    let completion = match controller.submit(question).await {
        Ok(completion) => completion,
        Err(e) => {
            warn!("Question not submitted: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match completion {
        Completion::Recorded { turn, outcome } => {
            match format {
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&outcome)),
                OutputFormat::Text => println!("{}", ConsoleFormatter::content(turn.content())),
                OutputFormat::Full => {
                    println!("{}", ConsoleFormatter::content(turn.content()));
                    if let DispatchOutcome::Comparison(report) = &outcome {
                        println!("{}", ConsoleFormatter::comparison_details(report));
                    }
                }
            }
            ExitCode::SUCCESS
        }
        Completion::ArenaReplaced(answers) => {
            match format {
                OutputFormat::Json => println!(
                    "{}",
                    ConsoleFormatter::format_json(&DispatchOutcome::Arena(answers))
                ),
                _ => println!("{}", ConsoleFormatter::arena(controller.session().arena())),
            }
            ExitCode::SUCCESS
        }
        Completion::FailureRecorded { turn, error } => {
            match format {
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::json!({ "error": error.to_string() })
                ),
                _ => println!("{}", ConsoleFormatter::content(turn.content())),
            }
            ExitCode::FAILURE
        }
        Completion::FailureNotified(_) | Completion::Discarded => ExitCode::FAILURE,
    }
}
