use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use landing_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "landing")]
#[command(author, version, about = "The CORE / OS landing page, in your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file (defaults to ~/.config/landing/config.toml)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    /// Suppress positional animation; opacity still fades
    #[arg(long = "reduced-motion", global = true)]
    reduced_motion: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive page
    Run,
    /// Render one frame headlessly and print it
    Snapshot {
        /// Terminal width in columns
        #[arg(long, default_value_t = 120)]
        width: u16,
        /// Terminal height in rows
        #[arg(long, default_value_t = 40)]
        height: u16,
        /// Page rows scrolled past the top
        #[arg(long, default_value_t = 0)]
        scroll: u16,
        /// Milliseconds elapsed since mount
        #[arg(long = "at-ms", default_value_t = 1000)]
        at_ms: u64,
        /// Print the view tree as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration
    Config,
}

fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.general.log_level.as_str()));

    if to_file {
        // The terminal belongs to the UI; keep log lines out of it
        let path = config.log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Arc::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    if cli.reduced_motion {
        config.motion.reduced_motion = true;
    }

    let interactive = matches!(cli.command, Some(Commands::Run) | None);
    init_logging(&config, interactive)?;
    tracing::info!(
        reduced_motion = config.motion.reduced_motion,
        theme = %config.ui.theme.name,
        "starting landing"
    );

    let config = Arc::new(config);

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config).await,
        Some(Commands::Snapshot {
            width,
            height,
            scroll,
            at_ms,
            json,
        }) => {
            let options = commands::snapshot::SnapshotOptions {
                width,
                height,
                scroll,
                at_ms,
                json,
            };
            commands::snapshot::run(config, options)
        }
        Some(Commands::Config) => commands::config::run(&config),
    }
}
