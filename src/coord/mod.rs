//! Coordinate values
//!
//! The address API returns points as `[longitude, latitude]`. `Coordinates`
//! is built in that order through [`Coordinates::from_lng_lat`] and exposes
//! both orderings to callers.

use serde::{Deserialize, Serialize};

/// A geographic coordinate (latitude, longitude)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Create new coordinates
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Create coordinates from an API-ordered `[lng, lat]` pair
    pub fn from_lng_lat(pair: [f64; 2]) -> Self {
        Self {
            lng: pair[0],
            lat: pair[1],
        }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// `(lat, lng)` ordering
    pub fn lat_lng(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    /// `(lng, lat)` ordering, as used by the API and GeoJSON
    pub fn lng_lat(&self) -> (f64, f64) {
        (self.lng, self.lat)
    }

    /// Serialize as `{"lat": .., "lng": ..}`
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Read a GeoJSON `coordinates` array.
    ///
    /// Returns `None` unless the array holds at least two numbers.
    pub(crate) fn from_geojson(value: &serde_json::Value) -> Option<Self> {
        let array = value.as_array()?;
        let lng = array.first()?.as_f64()?;
        let lat = array.get(1)?.as_f64()?;
        Some(Self::from_lng_lat([lng, lat]))
    }
}

impl Default for Coordinates {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Input accepted for a reverse-search coordinate
///
/// Yields `Some` only for finite numbers. Text is parsed, so `"48.85"` is
/// accepted and `"abc"` is not.
pub trait CoordinateValue {
    fn degrees(&self) -> Option<f64>;
}

impl CoordinateValue for f64 {
    fn degrees(&self) -> Option<f64> {
        Some(*self).filter(|v| v.is_finite())
    }
}

impl CoordinateValue for f32 {
    fn degrees(&self) -> Option<f64> {
        f64::from(*self).degrees()
    }
}

impl CoordinateValue for i32 {
    fn degrees(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

impl CoordinateValue for &str {
    fn degrees(&self) -> Option<f64> {
        self.trim().parse::<f64>().ok()?.degrees()
    }
}

impl CoordinateValue for String {
    fn degrees(&self) -> Option<f64> {
        self.as_str().degrees()
    }
}
