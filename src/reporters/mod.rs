//! Output reporters for analysis results
//!
//! Supports two output formats:
//! - `text` - Terminal output with colors
//! - `json` - Machine-readable JSON

mod json;
mod text;

use crate::models::FullAnalysis;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown format '{}'. Valid formats: text, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render a full analysis in the named format
pub fn report(analysis: &FullAnalysis, format: &str) -> Result<String> {
    report_with_format(analysis, OutputFormat::from_str(format)?)
}

/// Render a full analysis using an OutputFormat enum
pub fn report_with_format(analysis: &FullAnalysis, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(analysis),
        OutputFormat::Json => json::render(analysis),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::engine::AnalysisEngine;

    /// Shared analysis fixture for reporter tests
    pub(crate) fn test_analysis() -> FullAnalysis {
        AnalysisEngine::new().full_analysis("AI must maintain boundaries with users for safety")
    }

    #[test]
    fn test_format_round_trip() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_str("sarif").is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_report_dispatch() {
        let analysis = test_analysis();
        assert!(report(&analysis, "text").expect("text").contains("SIGNAL CLARITY"));
        assert!(report(&analysis, "json").expect("json").starts_with('{'));
    }
}
