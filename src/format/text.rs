//! Human-readable text output formatter

use crate::error::Result;
use crate::format::{GeocodeOutput, OutputFormatter};

/// Text formatter - one line per result
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable text"
    }

    fn format(&self, output: &GeocodeOutput) -> Result<String> {
        let mut text = String::new();

        match output {
            GeocodeOutput::Positions(positions) if positions.is_empty() => {
                text.push_str("No results\n");
            }
            GeocodeOutput::Positions(positions) => {
                for (index, position) in positions.iter().enumerate() {
                    text.push_str(&format!(
                        "{}. {} ({:.6}, {:.6})",
                        index + 1,
                        position.label().unwrap_or("<no label>"),
                        position.lat(),
                        position.lng()
                    ));
                    if let Some(score) = position.score() {
                        text.push_str(&format!(" score={:.2}", score));
                    }
                    text.push('\n');
                }
            }
            GeocodeOutput::Location(location) => {
                text.push_str(&format!("Address:    {}\n", location.address));
                text.push_str(&format!("Postcode:   {}\n", location.postcode));
                text.push_str(&format!("City:       {}\n", location.city));
                text.push_str(&format!("Department: {}\n", location.department));
            }
        }

        Ok(text)
    }
}
