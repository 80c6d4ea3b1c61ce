//! Search command handler
//!
//! Forward geocoding: free text to coordinates.

use crate::cli::print_output;
use crate::config::Config;
use crate::error::Result;
use crate::format::GeocodeOutput;
use crate::geo::{get_geocoder, ResultType};
use clap::Args;

/// Search command arguments
#[derive(Args)]
pub struct SearchArgs {
    /// Address or place to look up
    pub query: String,

    /// Restrict to a postal code
    #[arg(long)]
    pub postcode: Option<String>,

    /// Restrict to an INSEE city code
    #[arg(long)]
    pub citycode: Option<String>,

    /// Maximum number of results
    #[arg(long, short = 'n')]
    pub limit: Option<u32>,

    /// Result type (housenumber, street, locality, municipality)
    #[arg(long = "type")]
    pub kind: Option<ResultType>,

    /// Disable prefix matching
    #[arg(long)]
    pub no_autocomplete: bool,

    /// Fail when a result is missing data
    #[arg(long)]
    pub strict: bool,

    /// Print the address record of one result instead of positions
    #[arg(long)]
    pub location: bool,

    /// Result index used with --location
    #[arg(long, default_value = "0")]
    pub index: usize,

    /// Output format (json, text)
    #[arg(long, short = 'f')]
    pub format: Option<String>,
}

/// Run the search command
pub async fn run(args: SearchArgs, config: &Config) -> Result<()> {
    let mut geocoder = get_geocoder(config)?.search(args.query);

    if args.strict {
        geocoder = geocoder.strict(true);
    }
    if let Some(postcode) = args.postcode {
        geocoder = geocoder.postcode(postcode);
    }
    if let Some(citycode) = args.citycode {
        geocoder = geocoder.citycode(citycode);
    }
    if let Some(limit) = args.limit {
        geocoder = geocoder.limit(limit);
    }
    if let Some(kind) = args.kind {
        geocoder = geocoder.kind(kind);
    }
    if args.no_autocomplete {
        geocoder = geocoder.autocomplete(false);
    }

    let output = if args.location {
        GeocodeOutput::Location(geocoder.location(args.index).await?)
    } else {
        GeocodeOutput::Positions(geocoder.positions().await?)
    };

    print_output(&output, args.format.as_deref(), config)
}
