//! Reverse command handler
//!
//! Coordinates to the nearest address. Input that is not a number falls back
//! to the configured coordinates unless --strict is given.

use crate::cli::print_output;
use crate::config::Config;
use crate::error::Result;
use crate::format::GeocodeOutput;
use crate::geo::{get_geocoder, ResultType};
use clap::Args;

/// Reverse command arguments
#[derive(Args)]
pub struct ReverseArgs {
    /// Latitude
    #[arg(allow_hyphen_values = true)]
    pub lat: String,

    /// Longitude
    #[arg(allow_hyphen_values = true)]
    pub lng: String,

    /// Maximum number of results
    #[arg(long, short = 'n')]
    pub limit: Option<u32>,

    /// Result type (housenumber, street, locality, municipality)
    #[arg(long = "type")]
    pub kind: Option<ResultType>,

    /// Reject invalid coordinates and fail when a result is missing data
    #[arg(long)]
    pub strict: bool,

    /// Print the address record of the nearest result
    #[arg(long)]
    pub location: bool,

    /// Output format (json, text)
    #[arg(long, short = 'f')]
    pub format: Option<String>,
}

/// Run the reverse command
pub async fn run(args: ReverseArgs, config: &Config) -> Result<()> {
    let mut geocoder = get_geocoder(config)?;

    if args.strict {
        geocoder = geocoder.strict(true);
    }
    geocoder = geocoder.reverse(args.lat, args.lng)?;
    if let Some(limit) = args.limit {
        geocoder = geocoder.limit(limit);
    }
    if let Some(kind) = args.kind {
        geocoder = geocoder.kind(kind);
    }

    let output = if args.location {
        GeocodeOutput::Location(geocoder.location(0).await?)
    } else {
        GeocodeOutput::Positions(geocoder.positions().await?)
    };

    print_output(&output, args.format.as_deref(), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_strict_fails_on_empty_results() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/reverse/");
            then.status(200)
                .json_body(json!({"type": "FeatureCollection", "features": []}));
        });

        let mut config = Config::default();
        config.api.base_url = server.base_url();

        let args = ReverseArgs {
            lat: "49.9".to_string(),
            lng: "2.3".to_string(),
            limit: None,
            kind: None,
            strict: true,
            location: false,
            format: Some("json".to_string()),
        };
        assert!(matches!(run(args, &config).await, Err(Error::MissingResults)));
    }
}
