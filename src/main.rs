use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tfcomment::config::AppConfig;
use tfcomment::error::AppError;
use tfcomment::{CommandName, CommandOutcome, MarkdownRenderer, ServerLockUrlBuilder};

#[derive(Parser)]
#[command(name = "tfcomment", about = "Render plan/apply outcomes as pull request comment markdown")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Command whose outcome is rendered
    #[arg(long, value_enum)]
    command: CommandName,

    /// Outcome JSON file; reads stdin when omitted or `-`
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// File holding the raw command log
    #[arg(long)]
    log: Option<PathBuf>,

    /// Attach the log as a collapsible section
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the comment body
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    let verbose = cli.verbose || config.render.verbose;

    let outcome = CommandOutcome::load(cli.input.as_deref())?;
    let log = match &cli.log {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| AppError::Input(format!("Cannot read log {}: {e}", path.display())))?,
        None => String::new(),
    };

    tracing::info!(
        command = %cli.command,
        projects = outcome.project_count(),
        verbose = verbose,
        "Rendering comment"
    );

    let renderer = MarkdownRenderer::new(ServerLockUrlBuilder::new(&config.server.url));
    let body = renderer.render(&outcome, cli.command, &log, verbose);

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(body.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
