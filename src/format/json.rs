//! JSON output formatter

use crate::error::Result;
use crate::format::{GeocodeOutput, OutputFormatter};

/// JSON formatter - positions as an array of flat maps, a location as one map
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON"
    }

    fn format(&self, output: &GeocodeOutput) -> Result<String> {
        Ok(serde_json::to_string_pretty(output)?)
    }
}
