//! Decoded address record
//!
//! A `Location` is read from the `properties` block of a feature (geocodejson
//! format). Unlike [`Position`](crate::geo::position::Position), every field is
//! required.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Address, postal code, city and department of a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Full address label (`label`)
    pub address: String,
    pub postcode: String,
    pub city: String,
    /// Administrative context, e.g. `"80, Somme, Hauts-de-France"` (`context`)
    pub department: String,
}

impl Location {
    /// Build a location from a feature's properties.
    ///
    /// Fails with [`Error::Decode`] when `label`, `postcode`, `city` or
    /// `context` is absent or not a string.
    pub fn from_properties(properties: &Map<String, Value>) -> Result<Self> {
        Ok(Self {
            address: required(properties, "label")?,
            postcode: required(properties, "postcode")?,
            city: required(properties, "city")?,
            department: required(properties, "context")?,
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn postcode(&self) -> &str {
        &self.postcode
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    /// Serialize as `{"address", "postcode", "city", "department"}`
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

fn required(properties: &Map<String, Value>, key: &str) -> Result<String> {
    match properties.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(Error::Decode(format!(
            "property `{}` is not a string: {}",
            key, other
        ))),
        None => Err(Error::Decode(format!("missing property `{}`", key))),
    }
}
