//! Decoded API response
//!
//! The API answers with a GeoJSON `FeatureCollection`. The raw document is
//! kept as-is and each view is read lazily from the `features` array, so a
//! malformed feature only affects lookups at its own index.
//!
//! Missing data policy:
//! - `coordinates`, `position`, `properties`: `None`, or an error when `strict`
//! - `positions`: incomplete features skipped, or an error when `strict`
//! - `location`: always an error

use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::geo::location::Location;
use crate::geo::position::Position;
use serde_json::{Map, Value};

/// A decoded geocoding response
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureCollection {
    raw: Value,
}

impl FeatureCollection {
    pub fn from_value(raw: Value) -> Self {
        Self { raw }
    }

    /// The full response document
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Result features; empty when the response has no `features` array
    pub fn features(&self) -> &[Value] {
        self.raw
            .get("features")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.features().len()
    }

    pub fn is_empty(&self) -> bool {
        self.features().is_empty()
    }

    fn geometry(&self, index: usize) -> Option<Coordinates> {
        self.features()
            .get(index)?
            .pointer("/geometry/coordinates")
            .and_then(Coordinates::from_geojson)
    }

    fn feature_properties(&self, index: usize) -> Option<&Map<String, Value>> {
        self.features().get(index)?.get("properties")?.as_object()
    }

    /// Coordinates of the feature at `index`
    pub fn coordinates(&self, index: usize, strict: bool) -> Result<Option<Coordinates>> {
        if self.is_empty() {
            return missing(strict, Error::MissingResults);
        }
        match self.geometry(index) {
            Some(coords) => Ok(Some(coords)),
            None => missing(strict, Error::MissingCoordinates(index)),
        }
    }

    /// Coordinates and properties of the feature at `index`
    pub fn position(&self, index: usize, strict: bool) -> Result<Option<Position>> {
        if self.is_empty() {
            return missing(strict, Error::MissingResults);
        }
        match (self.geometry(index), self.feature_properties(index)) {
            (Some(coords), Some(properties)) => Ok(Some(Position::new(coords, properties))),
            _ => missing(strict, Error::MissingCoordinates(index)),
        }
    }

    /// Address record of the feature at `index`
    ///
    /// Fails regardless of strictness when there are no results or the
    /// feature has no properties.
    pub fn location(&self, index: usize) -> Result<Location> {
        if self.is_empty() {
            return Err(Error::MissingResults);
        }
        let properties = self
            .feature_properties(index)
            .ok_or(Error::MissingCoordinates(index))?;
        Location::from_properties(properties)
    }

    /// Raw properties of the feature at `index`
    pub fn properties(&self, index: usize, strict: bool) -> Result<Option<&Map<String, Value>>> {
        match self.feature_properties(index) {
            Some(properties) => Ok(Some(properties)),
            None => missing(strict, Error::MissingProperties(index)),
        }
    }

    /// Every feature that carries both geometry and properties
    ///
    /// Lenient mode skips incomplete features. Strict mode fails on an empty
    /// list and on the first incomplete feature.
    pub fn positions(&self, strict: bool) -> Result<Vec<Position>> {
        if strict && self.is_empty() {
            return Err(Error::MissingResults);
        }
        let mut positions = Vec::with_capacity(self.len());
        for index in 0..self.len() {
            if let Some(position) = self.position(index, strict)? {
                positions.push(position);
            }
        }
        Ok(positions)
    }
}

fn missing<T>(strict: bool, err: Error) -> Result<Option<T>> {
    if strict {
        Err(err)
    } else {
        Ok(None)
    }
}
