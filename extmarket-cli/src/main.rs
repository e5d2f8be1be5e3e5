//! extmarket - browse the TTS extension catalog from the terminal
//!
//! Loads the base and external dataset files once, then answers one
//! command against the merged catalog.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use extmarket_core::catalog::{load_catalog, CatalogIndex};
use extmarket_core::config::MarketplaceConfig;

mod catalog_cli;
mod view_cli;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Log output formats
#[derive(Debug, Clone, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[clap(
    name = "extmarket",
    about = "Search and browse the TTS extension marketplace catalog",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Base dataset file (overrides config)
    #[clap(long, global = true)]
    base: Option<PathBuf>,

    /// External dataset file merged after the base (overrides config)
    #[clap(long, global = true)]
    external: Option<PathBuf>,

    /// Configuration file (defaults to the platform config directory)
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    /// Set log level
    #[clap(long, default_value = "warn", global = true)]
    log_level: LogLevel,

    /// Log output format
    #[clap(long, default_value = "text", global = true)]
    log_format: LogFormat,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search extensions by name, description, class or author
    Search {
        /// Search text (lists everything when omitted)
        query: Option<String>,

        /// Restrict to a category key (e.g. tools, text-to-speech, decorators)
        #[clap(long, default_value = "all")]
        category: String,

        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },

    /// Show details for one extension
    Show {
        /// Package name
        package: String,

        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// List categories with extension counts
    Categories {
        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// List featured (recommended) extensions
    Featured {
        /// Number of extensions to show (defaults to config)
        #[clap(long)]
        limit: Option<usize>,

        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// Render the view described by a shareable URL or query string
    View {
        /// URL or query string, e.g. "?search=voice&category=text-to-speech"
        #[clap(default_value = "")]
        url: String,

        /// Output the snapshot as JSON
        #[clap(long)]
        json: bool,
    },

    /// Replay UI actions (one per line) and print the URL after each
    Session {
        /// Script file; reads stdin when omitted
        script: Option<PathBuf>,

        /// Starting URL or query string
        #[clap(long, default_value = "")]
        start: String,
    },
}

/// Initialize tracing with CLI flags
///
/// Logs always go to stderr so stdout stays parseable.
fn initialize_tracing(log_level: &LogLevel, log_format: &LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    match log_format {
        LogFormat::Json => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

/// Resolve configuration, applying CLI overrides
fn resolve_config(cli: &Cli) -> Result<MarketplaceConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            if !path.exists() {
                bail!("Config file does not exist: {}", path.display());
            }
            MarketplaceConfig::load_from_path(path)?
        }
        None => MarketplaceConfig::load()?,
    };

    if let Some(base) = &cli.base {
        config.datasets.base = base.clone();
    }
    if let Some(external) = &cli.external {
        // An explicitly named file must exist
        config.datasets.external = Some(external.clone());
        config.datasets.external_optional = false;
    }

    debug!(
        base = %config.datasets.base.display(),
        external = ?config.datasets.external,
        "Resolved dataset paths"
    );
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level, &cli.log_format);

    let config = resolve_config(&cli)?;
    let index: Arc<CatalogIndex> = Arc::new(
        load_catalog(&config.datasets).context("Failed to load extension catalog")?,
    );

    match cli.command {
        Command::Search {
            query,
            category,
            json,
        } => catalog_cli::execute_search(&index, query.as_deref(), &category, json),
        Command::Show { package, json } => catalog_cli::execute_show(&index, &package, json),
        Command::Categories { json } => catalog_cli::execute_categories(&index, json),
        Command::Featured { limit, json } => {
            catalog_cli::execute_featured(&index, limit.unwrap_or(config.featured.limit), json)
        }
        Command::View { url, json } => view_cli::execute_view(index, &config, &url, json),
        Command::Session { script, start } => {
            view_cli::execute_session(index, &config, script.as_deref(), &start)
        }
    }
}
