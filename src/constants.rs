//! Centralized constants for the adresse-geocoder crate

/// Address API endpoints
pub mod api {
    /// Base URL of the national address API
    pub const BASE_URL: &str = "https://api-adresse.data.gouv.fr/";

    /// Forward search (free text to coordinates)
    pub const ENDPOINT_SEARCH: &str = "search/";

    /// Reverse search (coordinates to nearest address)
    pub const ENDPOINT_REVERSE: &str = "reverse/";

    /// Batch forward geocoding of a CSV file
    pub const ENDPOINT_SEARCH_CSV: &str = "search/csv/";

    /// Batch reverse geocoding of a CSV file
    pub const ENDPOINT_REVERSE_CSV: &str = "reverse/csv/";

    /// User-Agent sent with every request
    pub const USER_AGENT: &str = concat!("adresse-geocoder/", env!("CARGO_PKG_VERSION"));
}

/// Postal code formatting
pub mod postcode {
    /// French postal codes always have five digits
    pub const WIDTH: usize = 5;
}
