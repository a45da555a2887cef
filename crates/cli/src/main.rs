//! Team builder command line.
//!
//! Loads the character and equipment catalogs, plans a build and prints the
//! resulting stat analysis, equipment candidates or character lists.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Characters, EquipmentCmd, Stats, Tags};
use config::CliConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Plan team builds and inspect equipment bonuses
#[derive(Parser)]
#[command(name = "team-builder")]
#[command(about = "Plan team builds and inspect equipment bonuses", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Equip items and print the aggregated stat sheet
    Stats(Stats),

    /// List equipment eligible for a character and facets
    Equipment(EquipmentCmd),

    /// List characters matching a search and tags
    Characters(Characters),

    /// Print the character tag vocabulary
    Tags(Tags),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let _guard = setup_logging(cli.verbose)?;
    let config = CliConfig::from_env();

    match cli.command {
        Command::Stats(cmd) => cmd.execute(&config),
        Command::Equipment(cmd) => cmd.execute(&config),
        Command::Characters(cmd) => cmd.execute(&config),
        Command::Tags(cmd) => cmd.execute(&config),
    }
}

/// Setup logging to stderr through a non-blocking writer.
///
/// The returned guard flushes pending records when dropped.
fn setup_logging(verbose: bool) -> Result<WorkerGuard> {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());

    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init()?;

    Ok(guard)
}
