//! Geocoding module
//!
//! Forward and reverse geocoding against the national address API
//! (https://adresse.data.gouv.fr/api-doc/adresse), with typed views over the
//! geocodejson response.

pub mod geocoder;
pub mod location;
pub mod position;
pub mod query;
pub mod response;


use crate::config::Config;
use crate::error::Result;

pub use geocoder::{Geocoder, RequestOptions};
pub use location::Location;
pub use position::{Position, PositionProperties};
pub use query::{Endpoint, ResultType, SearchQuery};
pub use response::FeatureCollection;

/// Get a geocoder configured from `config`
pub fn get_geocoder(config: &Config) -> Result<Geocoder> {
    Geocoder::from_config(config)
}
