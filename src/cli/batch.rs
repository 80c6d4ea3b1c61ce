//! Batch command handler
//!
//! Uploads a CSV file to the batch endpoints and prints the returned CSV.

use crate::config::Config;
use crate::error::Result;
use crate::geo::get_geocoder;
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Batch command arguments
#[derive(Args)]
pub struct BatchArgs {
    /// CSV file to geocode
    pub file: PathBuf,

    /// Reverse geocode (file needs `lat` and `lon` columns)
    #[arg(long)]
    pub reverse: bool,

    /// Columns to build the address from (repeatable)
    #[arg(long = "column", short = 'c')]
    pub columns: Vec<String>,
}

/// Run the batch command
pub async fn run(args: BatchArgs, config: &Config) -> Result<()> {
    let csv = fs::read_to_string(&args.file)?;
    info!(file = %args.file.display(), bytes = csv.len(), "uploading CSV");

    let geocoder = get_geocoder(config)?.csv_columns(args.columns);

    let result = if args.reverse {
        geocoder.reverse_csv(csv).await?
    } else {
        geocoder.search_csv(csv).await?
    };

    print!("{}", result);
    Ok(())
}
