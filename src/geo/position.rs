//! Coordinates plus a subset of address properties
//!
//! Building a `Position` never fails: any property that is missing, or has an
//! unexpected type, is kept as `None`.

use crate::coord::Coordinates;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The address properties kept on a [`Position`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionProperties {
    pub score: Option<f64>,
    pub label: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub citycode: Option<String>,
    pub postcode: Option<String>,
}

impl PositionProperties {
    /// Pick the known keys out of a feature's properties
    pub fn from_properties(properties: &Map<String, Value>) -> Self {
        let text = |key: &str| {
            properties
                .get(key)
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        Self {
            score: properties.get("score").and_then(Value::as_f64),
            label: text("label"),
            street: text("street"),
            city: text("city"),
            citycode: text("citycode"),
            postcode: text("postcode"),
        }
    }
}

/// A geocoded point with its address properties
///
/// Serializes to one flat map:
/// `lat, lng, score, label, street, city, citycode, postcode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    #[serde(flatten)]
    pub coordinates: Coordinates,
    #[serde(flatten)]
    pub properties: PositionProperties,
}

impl Position {
    pub fn new(coordinates: Coordinates, properties: &Map<String, Value>) -> Self {
        Self {
            coordinates,
            properties: PositionProperties::from_properties(properties),
        }
    }

    /// Build from an API-ordered `[lng, lat]` pair
    pub fn from_lng_lat(pair: [f64; 2], properties: &Map<String, Value>) -> Self {
        Self::new(Coordinates::from_lng_lat(pair), properties)
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn properties(&self) -> &PositionProperties {
        &self.properties
    }

    pub fn city(&self) -> Option<&str> {
        self.properties.city.as_deref()
    }

    pub fn street(&self) -> Option<&str> {
        self.properties.street.as_deref()
    }

    pub fn postcode(&self) -> Option<&str> {
        self.properties.postcode.as_deref()
    }

    pub fn citycode(&self) -> Option<&str> {
        self.properties.citycode.as_deref()
    }

    pub fn score(&self) -> Option<f64> {
        self.properties.score
    }

    pub fn label(&self) -> Option<&str> {
        self.properties.label.as_deref()
    }

    pub fn lat(&self) -> f64 {
        self.coordinates.lat
    }

    pub fn lng(&self) -> f64 {
        self.coordinates.lng
    }

    pub fn lat_lng(&self) -> (f64, f64) {
        self.coordinates.lat_lng()
    }

    pub fn lng_lat(&self) -> (f64, f64) {
        self.coordinates.lng_lat()
    }

    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
