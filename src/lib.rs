//! adresse-geocoder: client for the French national address API
//!
//! Forward and reverse geocoding against
//! [api-adresse.data.gouv.fr](https://adresse.data.gouv.fr/api-doc/adresse),
//! with the response decoded into typed values.
//!
//! ## Features
//!
//! - Fluent per-request builder (`search`, `reverse`, `postcode`, `citycode`, `limit`)
//! - Typed views: [`Coordinates`], [`Location`], [`Position`]
//! - Per-request strict mode for missing data
//! - Batch CSV geocoding
//! - `adresse` CLI
//!
//! ## Quick Start
//!
//! ```no_run
//! use adresse_geocoder::Geocoder;
//!
//! # async fn demo() -> adresse_geocoder::Result<()> {
//! let mut geocoder = Geocoder::new()?.search("8 bd du port").postcode(80000);
//! if let Some(coords) = geocoder.coordinates(0).await? {
//!     println!("{}, {}", coords.lat, coords.lng);
//! }
//!
//! let mut nearest = Geocoder::new()?.reverse(49.897, 2.290)?;
//! println!("{}", nearest.location(0).await?.address);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod coord;
pub mod error;
pub mod format;
pub mod geo;

// Re-export commonly used types
pub use config::Config;
pub use coord::{CoordinateValue, Coordinates};
pub use error::{Error, Result};
pub use geo::{FeatureCollection, Geocoder, Location, Position, ResultType};
