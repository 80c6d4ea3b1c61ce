//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod batch;
pub mod config;
pub mod reverse;
pub mod search;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::{available_formats, get_formatter, GeocodeOutput};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// French address geocoder (api-adresse.data.gouv.fr)
#[derive(Parser)]
#[command(name = "adresse")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find coordinates for an address
    Search(search::SearchArgs),

    /// Find the nearest address to a point
    Reverse(reverse::ReverseArgs),

    /// Geocode a CSV file
    Batch(batch::BatchArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Run the CLI
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search(args) => search::run(args, &setup()?).await,
        Commands::Reverse(args) => reverse::run(args, &setup()?).await,
        Commands::Batch(args) => batch::run(args, &setup()?).await,
        Commands::Config(args) => config::run(args),
    }
}

/// Load configuration and start logging for the geocoding commands
fn setup() -> Result<Config> {
    let config = Config::load()?;
    init_logging(&config);
    Ok(config)
}

/// Install the tracing subscriber; RUST_LOG wins over the configured level
fn init_logging(config: &Config) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log.level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Print a result with the requested (or configured) formatter
pub(crate) fn print_output(output: &GeocodeOutput, format: Option<&str>, config: &Config) -> Result<()> {
    let name = format.unwrap_or(config.defaults.format.as_str());
    let formatter = get_formatter(name).ok_or_else(|| {
        let known: Vec<String> = available_formats().into_iter().map(|f| f.name).collect();
        Error::Config(format!(
            "Unknown format: {} (available: {})",
            name,
            known.join(", ")
        ))
    })?;

    print!("{}", formatter.format(output)?);
    Ok(())
}
