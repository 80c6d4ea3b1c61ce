//! adresse CLI entry point
//!
//! Forward, reverse and batch geocoding against api-adresse.data.gouv.fr

use adresse_geocoder::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
