//! GitHub Explorer CLI - bookmark repositories from the command line.

use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use explorer_core::ExplorerConfig;

mod commands;

/// GitHub Explorer - look up and bookmark GitHub repositories
#[derive(Parser, Debug)]
#[command(name = "explorer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// GitHub API base URL (overrides the config file)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Path of the bookmark store file (overrides the config file)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up a repository and add it to the bookmarks
    Add {
        /// Repository identifier (owner/name)
        identifier: String,
    },

    /// List bookmarked repositories
    List,

    /// Show a bookmarked repository
    Show {
        /// Repository full name (owner/name)
        full_name: String,
    },

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("explorer={log_level},explorer_core={log_level}").into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = ExplorerConfig::load();
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }
    if let Some(store) = cli.store {
        config.storage_path = Some(store);
    }

    let mut out = std::io::stdout().lock();
    let result = run(cli.command, &config, &mut out).await;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(
    command: Commands,
    config: &ExplorerConfig,
    out: &mut impl Write,
) -> commands::Result<()> {
    if let Commands::Version = command {
        writeln!(out, "explorer {}", env!("CARGO_PKG_VERSION"))?;
        return Ok(());
    }

    let dashboard = commands::open_dashboard(config)?;

    match command {
        Commands::Add { identifier } => commands::add(&dashboard, &identifier, out).await,
        Commands::List => commands::list(&dashboard, out),
        Commands::Show { full_name } => commands::show(&dashboard, &full_name, out),
        Commands::Version => Ok(()),
    }
}
