//! Output formatters
//!
//! Provides trait-based output formatting for geocoding results.

pub mod json;
pub mod text;

use crate::error::Result;
use crate::geo::location::Location;
use crate::geo::position::Position;
use serde::{Deserialize, Serialize};

/// What a CLI command prints
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GeocodeOutput {
    /// Every result with its coordinates
    Positions(Vec<Position>),
    /// A single address record
    Location(Location),
}

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format a geocoding result
    fn format(&self, output: &GeocodeOutput) -> Result<String>;
}

const FORMAT_NAMES: &[&str] = &["json", "text"];

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "json" => Some(Box::new(json::JsonFormatter)),
        "text" => Some(Box::new(text::TextFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    FORMAT_NAMES
        .iter()
        .filter_map(|name| get_formatter(name))
        .map(|formatter| FormatInfo {
            name: formatter.name().to_string(),
            description: formatter.description().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_formatter() {
        assert!(get_formatter("json").is_some());
        assert!(get_formatter("text").is_some());
        assert!(get_formatter("gpx").is_none());
    }

    #[test]
    fn test_get_formatter_case_insensitive() {
        assert!(get_formatter("JSON").is_some());
        assert!(get_formatter("Text").is_some());
    }

    #[test]
    fn test_available_formats() {
        let formats = available_formats();
        assert_eq!(formats.len(), 2);
        for info in formats {
            let formatter = get_formatter(&info.name).unwrap();
            assert_eq!(formatter.name(), info.name);
            assert_eq!(formatter.description(), info.description);
        }
    }
}
