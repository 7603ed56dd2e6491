//! Project-level configuration support
//!
//! Loads per-project configuration from a `reframe.toml` file in the
//! working directory.
//!
//! # Configuration Format
//!
//! ```toml
//! # reframe.toml
//!
//! [analysis]
//! clarity_threshold = 0.6
//!
//! [[metaphors]]
//! term = "alignment"
//! reified_as = "solved property"
//! functional_form = "ongoing negotiation process"
//! value_range = ["adversarial", "supervised", "participatory"]
//! depends_on = ["stakeholders", "timeframe"]
//! institutional_function = "lets a lab declare the problem closed"
//! detection_patterns = ['\balignment\b', '\baligned\b']
//!
//! [chains]
//! alignment = ["safety", "objective"]
//! ```

use crate::catalog::{CatalogBuilder, CatalogError, MetaphorCatalog, MetaphorEntry};
use crate::scoring::DEFAULT_CLARITY_THRESHOLD;
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// Config file name looked up in the working directory
pub const CONFIG_FILE: &str = "reframe.toml";

/// Per-project configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    /// Custom metaphor entries, added after the built-in library
    /// (same-term entries overwrite the built-ins)
    #[serde(default)]
    pub metaphors: Vec<MetaphorEntry>,
    /// Extra dependency chains, term -> forced terms
    #[serde(default)]
    pub chains: IndexMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Clarity below this flags a statement for re-normalization
    #[serde(default = "default_clarity_threshold")]
    pub clarity_threshold: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            clarity_threshold: DEFAULT_CLARITY_THRESHOLD,
        }
    }
}

fn default_clarity_threshold() -> f64 {
    DEFAULT_CLARITY_THRESHOLD
}

impl ProjectConfig {
    /// Build the session catalog: built-in library plus this config's
    /// custom entries and chains.
    pub fn build_catalog(&self) -> Result<MetaphorCatalog, CatalogError> {
        let mut builder = CatalogBuilder::with_defaults();
        for entry in &self.metaphors {
            builder = builder.metaphor(entry.clone());
        }
        for (term, forces) in &self.chains {
            builder = builder.chain(term.clone(), forces.iter().cloned());
        }
        builder.build()
    }
}

/// Load project configuration from a directory.
///
/// A missing file yields the defaults; an unreadable or invalid file is
/// logged and ignored rather than failing the run.
pub fn load_project_config(dir: &Path) -> ProjectConfig {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return ProjectConfig::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(raw) => match toml::from_str::<ProjectConfig>(&raw) {
            Ok(config) => {
                debug!("loaded project config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("failed to parse {}: {}", path.display(), e);
                ProjectConfig::default()
            }
        },
        Err(e) => {
            warn!("failed to read {}: {}", path.display(), e);
            ProjectConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &Path, contents: &str) {
        std::fs::write(dir.join(CONFIG_FILE), contents).expect("write config");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = load_project_config(dir.path());
        assert_eq!(config.analysis.clarity_threshold, DEFAULT_CLARITY_THRESHOLD);
        assert!(config.metaphors.is_empty());
        assert!(config.chains.is_empty());
    }

    #[test]
    fn test_invalid_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_config(dir.path(), "analysis = not valid toml [");
        let config = load_project_config(dir.path());
        assert_eq!(config.analysis.clarity_threshold, DEFAULT_CLARITY_THRESHOLD);
    }

    #[test]
    fn test_threshold_override() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_config(dir.path(), "[analysis]\nclarity_threshold = 0.5\n");
        let config = load_project_config(dir.path());
        assert_eq!(config.analysis.clarity_threshold, 0.5);
    }

    #[test]
    fn test_custom_metaphor_and_chain() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_config(
            dir.path(),
            r#"
[[metaphors]]
term = "alignment"
reified_as = "solved property"
functional_form = "ongoing negotiation process"
value_range = ["adversarial", "supervised", "participatory"]
depends_on = ["stakeholders"]
institutional_function = "lets a lab declare the problem closed"
detection_patterns = ['\balignment\b']

[chains]
alignment = ["safety", "objective"]
"#,
        );
        let config = load_project_config(dir.path());
        let catalog = config.build_catalog().expect("catalog");

        assert_eq!(catalog.len(), 14);
        assert_eq!(
            catalog.get("alignment").expect("entry").functional_form,
            "ongoing negotiation process"
        );
        assert_eq!(catalog.forces("alignment"), ["safety", "objective"]);
        // built-ins are untouched
        assert_eq!(catalog.forces("boundaries"), ["consciousness", "safety", "individual"]);
    }

    #[test]
    fn test_custom_entry_with_bad_pattern_fails_catalog_build() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_config(
            dir.path(),
            r#"
[[metaphors]]
term = "broken"
reified_as = "x"
functional_form = "y"
value_range = ["a"]
detection_patterns = ['(unclosed']
"#,
        );
        let config = load_project_config(dir.path());
        assert!(config.build_catalog().is_err());
    }
}
