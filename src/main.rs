//! Clarifi - AI writing feedback in the terminal

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser, Subcommand};
use clarifi::analysis::SimulatedAnalyzer;
use clarifi::editor::EditorState;
use clarifi::submission::{Completion, SubmissionController, SubmitError};
use clarifi::{App, Config, ModelCatalog, Route, paths};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Improve your writing with AI
#[derive(Parser)]
#[command(name = "clarifi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON model catalog to use instead of the built-in one
    #[arg(long, global = true, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// View to open on start (/, /input, /feedback/<id>, /rewrite/<id>)
    #[arg(long, default_value = "/")]
    route: Route,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available models, grouped by provider
    Models {
        /// Only show models matching this text
        #[arg(long)]
        search: Option<String>,

        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Analyze text without opening the TUI
    Analyze {
        /// Id of the model to analyze with
        #[arg(long)]
        model: String,

        /// Read the text from this file instead of stdin
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let log_path = paths::log_path();
    // Clear the log file on startup
    if let Err(e) = std::fs::write(&log_path, "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    // Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level > 0 {
        let level = match debug_level {
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        };

        let dir = log_path.parent().unwrap_or_else(|| Path::new("."));
        let file_appender = tracing_appender::rolling::never(dir, "clarifi.log");
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    let mut config = Config::load()?;
    if let Some(path) = cli.catalog {
        config.catalog_path = Some(path);
    }
    let catalog = config.catalog()?;

    match cli.command {
        Some(Commands::Models { search, json }) => {
            cmd_models(&catalog, search.as_deref().unwrap_or_default(), json)
        }
        Some(Commands::Analyze { model, file }) => {
            cmd_analyze(&config, &catalog, &model, file.as_deref())
        }
        None => {
            let mut app = App::new(config, catalog);
            if cli.route != Route::Home {
                app.navigate(cli.route);
            }
            clarifi::tui::run(app)
        }
    }
}

fn cmd_models(catalog: &ModelCatalog, search: &str, json: bool) -> Result<()> {
    let models = catalog.search(search);

    if json {
        let out = serde_json::to_string_pretty(&models).context("Failed to serialize models")?;
        println!("{out}");
        return Ok(());
    }

    if models.is_empty() {
        println!("No models match `{search}`.");
        return Ok(());
    }

    let mut provider = None;
    for model in models {
        if provider != Some(model.provider.as_str()) {
            if provider.is_some() {
                println!();
            }
            println!("{}", model.provider);
            provider = Some(model.provider.as_str());
        }
        println!(
            "  {:<16} {:<16} {:>7}/1k  speed {}  quality {}",
            model.id,
            model.name,
            model.cost_label(),
            model.performance.speed.stars(),
            model.performance.quality.stars(),
        );
        if !model.strengths.is_empty() {
            println!("  {:<16} Best for: {}", "", model.strengths.join(", "));
        }
    }
    Ok(())
}

fn cmd_analyze(
    config: &Config,
    catalog: &ModelCatalog,
    model: &str,
    file: Option<&Path>,
) -> Result<()> {
    let text = if let Some(path) = file {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    } else {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read text from stdin")?;
        text
    };

    let mut editor = EditorState::new(config.max_length);
    if !editor.set_text(text).is_accepted() {
        bail!("Text exceeds the {} character limit", config.max_length);
    }
    // Blank text is reported ahead of any problem with the model
    if !editor.is_blank() && !model.is_empty() && catalog.get(model).is_none() {
        bail!("Unknown model `{model}`; run `clarifi models` to list them");
    }

    let analyzer = Arc::new(SimulatedAnalyzer::new(config.analysis_delay()));
    let mut submission = SubmissionController::new(analyzer);
    submission.select_model(model);

    if let Err(e) = submission.submit(editor.text()) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match submission.wait() {
        Some(Completion::Succeeded(session)) => {
            println!("{session}");
            Ok(())
        }
        Some(Completion::Failed(_)) | None => {
            eprintln!("{}", SubmitError::AnalysisFailed);
            std::process::exit(1);
        }
    }
}
