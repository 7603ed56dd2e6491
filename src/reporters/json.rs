//! JSON reporter
//!
//! Outputs the full analysis as pretty-printed JSON. Useful for machine
//! consumption, piping to jq, or further processing.

use crate::models::FullAnalysis;
use anyhow::Result;

/// Render an analysis as JSON
pub fn render(analysis: &FullAnalysis) -> Result<String> {
    Ok(serde_json::to_string_pretty(analysis)?)
}

/// Render an analysis as compact JSON (single line)
#[allow(dead_code)] // Public API helper
pub fn render_compact(analysis: &FullAnalysis) -> Result<String> {
    Ok(serde_json::to_string(analysis)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_analysis;

    #[test]
    fn test_json_render_valid() {
        let analysis = test_analysis();
        let json_str = render(&analysis).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["entropy"]["metaphor_count"], 2);
        assert_eq!(parsed["matches"][0]["term"], "boundaries");
        assert_eq!(
            parsed["locked_variables"]["safety"]["type"],
            "signal clarity metric"
        );
    }

    #[test]
    fn test_json_render_compact() {
        let analysis = test_analysis();
        let json_str = render_compact(&analysis).expect("render compact JSON");
        assert!(!json_str.contains('\n'));
        let _: serde_json::Value = serde_json::from_str(&json_str).expect("parse compact JSON");
    }
}
