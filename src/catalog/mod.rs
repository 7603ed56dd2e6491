//! Reified metaphor catalog
//!
//! The catalog maps each tracked term to its constant framing, its
//! functional (variable) framing, and the detection patterns used to spot
//! it in text. It also owns the dependency chains describing how accepting
//! one reification forces others to stay constrained.
//!
//! Catalogs are built once through [`CatalogBuilder`] and immutable
//! afterwards. Every analysis component holds a shared reference to the
//! same catalog; nothing mutates it after `build()`.

mod defaults;

use crate::models::{CatalogStats, ChainTrace};
use indexmap::IndexMap;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building a catalog.
///
/// A malformed entry fails catalog construction outright; a bad entry
/// would otherwise silently never match or misbehave during scoring.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("metaphor entry has an empty term")]
    EmptyTerm,

    #[error("metaphor '{term}' has an empty value range")]
    EmptyValueRange { term: String },

    #[error("metaphor '{term}' has no detection patterns")]
    NoDetectionPatterns { term: String },

    #[error("metaphor '{term}' has an invalid detection pattern '{pattern}'")]
    InvalidPattern {
        term: String,
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },
}

/// One tracked term: its framings, value range, and detection patterns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaphorEntry {
    /// Unique identifier for the metaphor
    pub term: String,
    /// How the term is currently treated (constant form)
    pub reified_as: String,
    /// What the term actually is (variable form)
    pub functional_form: String,
    /// Possible values when treated as a variable
    pub value_range: Vec<String>,
    /// Factors the variable depends on (informational)
    #[serde(default)]
    pub depends_on: Vec<String>,
    /// Why the reification serves institutional interests (informational)
    #[serde(default)]
    pub institutional_function: String,
    /// Case-insensitive regex patterns, checked in order
    pub detection_patterns: Vec<String>,
}

/// A catalog entry with its detection patterns compiled for scanning.
#[derive(Debug, Clone)]
pub struct CompiledMetaphor {
    entry: MetaphorEntry,
    patterns: Vec<Regex>,
}

impl CompiledMetaphor {
    fn compile(entry: MetaphorEntry) -> Result<Self, CatalogError> {
        if entry.term.is_empty() {
            return Err(CatalogError::EmptyTerm);
        }
        if entry.value_range.is_empty() {
            return Err(CatalogError::EmptyValueRange {
                term: entry.term.clone(),
            });
        }
        if entry.detection_patterns.is_empty() {
            return Err(CatalogError::NoDetectionPatterns {
                term: entry.term.clone(),
            });
        }

        let mut patterns = Vec::with_capacity(entry.detection_patterns.len());
        for pattern in &entry.detection_patterns {
            let compiled = RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|source| CatalogError::InvalidPattern {
                    term: entry.term.clone(),
                    pattern: pattern.clone(),
                    source: Box::new(source),
                })?;
            patterns.push(compiled);
        }

        Ok(Self { entry, patterns })
    }

    pub fn entry(&self) -> &MetaphorEntry {
        &self.entry
    }

    pub fn patterns(&self) -> &[Regex] {
        &self.patterns
    }
}

/// Immutable catalog of reified metaphors and their dependency chains.
#[derive(Debug, Clone)]
pub struct MetaphorCatalog {
    entries: IndexMap<String, CompiledMetaphor>,
    chains: IndexMap<String, Vec<String>>,
}

impl MetaphorCatalog {
    /// Start building an empty catalog
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Catalog pre-populated with the built-in metaphor library
    pub fn with_defaults() -> Self {
        CatalogBuilder::with_defaults()
            .build()
            .expect("built-in metaphor library is valid")
    }

    /// Look up a single entry by term
    pub fn get(&self, term: &str) -> Option<&MetaphorEntry> {
        self.entries.get(term).map(CompiledMetaphor::entry)
    }

    /// Iterate entries with compiled patterns, in insertion order
    pub fn compiled(&self) -> impl Iterator<Item = &CompiledMetaphor> {
        self.entries.values()
    }

    /// All term names, in insertion order
    pub fn terms(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Terms whose institutional function mentions the keyword
    /// (case-insensitive substring match). Empty result on no hits.
    pub fn find_by_function_keyword(&self, keyword: &str) -> Vec<&str> {
        let needle = keyword.to_lowercase();
        self.entries
            .values()
            .filter(|c| {
                c.entry
                    .institutional_function
                    .to_lowercase()
                    .contains(&needle)
            })
            .map(|c| c.entry.term.as_str())
            .collect()
    }

    /// Terms forced into constraint by `term`, empty if it has no chain
    pub fn forces(&self, term: &str) -> &[String] {
        self.chains.get(term).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Trace the dependency chain starting at `term`.
    ///
    /// Returns `None` for terms with no chain entry; unknown terms are not
    /// an error.
    pub fn trace(&self, term: &str) -> Option<ChainTrace> {
        let forces = self.chains.get(term)?;
        let reified_as = self
            .get(term)
            .map(|e| e.reified_as.as_str())
            .unwrap_or(term);
        let mechanism = format!(
            "If '{}' is reified as '{}', then {} must also be constrained \
             to maintain logical consistency.",
            term,
            reified_as,
            forces.join(", ")
        );
        Some(ChainTrace {
            primary: term.to_string(),
            forces: forces.clone(),
            mechanism,
        })
    }

    /// Overview numbers for the catalog
    pub fn stats(&self) -> CatalogStats {
        let total_chains = self.chains.len();
        let forced: usize = self.chains.values().map(Vec::len).sum();
        let avg_forced_per_chain = if total_chains == 0 {
            0.0
        } else {
            forced as f64 / total_chains as f64
        };
        CatalogStats {
            total_metaphors: self.entries.len(),
            total_chains,
            avg_forced_per_chain,
            terms: self.terms().iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl Default for MetaphorCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Builder assembling a catalog before any analysis runs.
///
/// Inserting an entry or chain under an existing key overwrites the value
/// in place; validation happens once, in [`CatalogBuilder::build`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    entries: IndexMap<String, MetaphorEntry>,
    chains: IndexMap<String, Vec<String>>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pre-seeded with the built-in metaphor library
    pub fn with_defaults() -> Self {
        defaults::seed(Self::new())
    }

    /// Add or replace a metaphor entry
    pub fn metaphor(mut self, entry: MetaphorEntry) -> Self {
        self.entries.insert(entry.term.clone(), entry);
        self
    }

    /// Add or replace the dependency chain for a term
    pub fn chain<I, S>(mut self, term: impl Into<String>, forces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.chains
            .insert(term.into(), forces.into_iter().map(Into::into).collect());
        self
    }

    /// Validate every entry and compile its patterns.
    ///
    /// Fails fast on the first malformed entry.
    pub fn build(self) -> Result<MetaphorCatalog, CatalogError> {
        let mut entries = IndexMap::with_capacity(self.entries.len());
        for (term, entry) in self.entries {
            entries.insert(term, CompiledMetaphor::compile(entry)?);
        }
        Ok(MetaphorCatalog {
            entries,
            chains: self.chains,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(term: &str) -> MetaphorEntry {
        MetaphorEntry {
            term: term.to_string(),
            reified_as: "constant".to_string(),
            functional_form: "variable".to_string(),
            value_range: vec!["low".to_string(), "high".to_string()],
            depends_on: vec!["context".to_string()],
            institutional_function: "keeps the constant framing in place".to_string(),
            detection_patterns: vec![format!(r"\b{term}\b")],
        }
    }

    #[test]
    fn test_default_catalog_loads() {
        let catalog = MetaphorCatalog::with_defaults();
        assert_eq!(catalog.len(), 13);
        assert!(catalog.get("boundaries").is_some());
        assert_eq!(catalog.terms().first(), Some(&"boundaries"));
    }

    #[test]
    fn test_build_rejects_empty_value_range() {
        let mut bad = entry("fuzz");
        bad.value_range.clear();
        let err = MetaphorCatalog::builder().metaphor(bad).build().unwrap_err();
        assert!(matches!(err, CatalogError::EmptyValueRange { term } if term == "fuzz"));
    }

    #[test]
    fn test_build_rejects_missing_patterns() {
        let mut bad = entry("fuzz");
        bad.detection_patterns.clear();
        let err = MetaphorCatalog::builder().metaphor(bad).build().unwrap_err();
        assert!(matches!(err, CatalogError::NoDetectionPatterns { .. }));
    }

    #[test]
    fn test_build_rejects_invalid_pattern() {
        let mut bad = entry("fuzz");
        bad.detection_patterns = vec![r"\b(unclosed".to_string()];
        let err = MetaphorCatalog::builder().metaphor(bad).build().unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPattern { .. }));
    }

    #[test]
    fn test_build_rejects_empty_term() {
        let err = MetaphorCatalog::builder()
            .metaphor(entry(""))
            .build()
            .unwrap_err();
        assert!(matches!(err, CatalogError::EmptyTerm));
    }

    #[test]
    fn test_metaphor_overwrite_keeps_position() {
        let mut replacement = entry("beta");
        replacement.reified_as = "replaced".to_string();

        let catalog = MetaphorCatalog::builder()
            .metaphor(entry("alpha"))
            .metaphor(entry("beta"))
            .metaphor(entry("gamma"))
            .metaphor(replacement)
            .build()
            .expect("build catalog");

        assert_eq!(catalog.terms(), vec!["alpha", "beta", "gamma"]);
        assert_eq!(catalog.get("beta").expect("beta").reified_as, "replaced");
    }

    #[test]
    fn test_find_by_function_keyword_case_insensitive() {
        let catalog = MetaphorCatalog::with_defaults();
        let hits = catalog.find_by_function_keyword("HIERARCHY");
        assert!(hits.contains(&"intelligence"));
        assert!(catalog.find_by_function_keyword("no such rationale").is_empty());
    }

    #[test]
    fn test_trace_known_term() {
        let catalog = MetaphorCatalog::with_defaults();
        let trace = catalog.trace("boundaries").expect("chain for boundaries");
        assert_eq!(trace.primary, "boundaries");
        assert_eq!(trace.forces, vec!["consciousness", "safety", "individual"]);
        assert!(trace.mechanism.contains("boundaries"));
        assert!(trace.mechanism.contains("fixed separation"));
    }

    #[test]
    fn test_trace_unknown_term_is_none() {
        let catalog = MetaphorCatalog::with_defaults();
        assert!(catalog.trace("weather").is_none());
    }

    #[test]
    fn test_stats() {
        let catalog = MetaphorCatalog::with_defaults();
        let stats = catalog.stats();
        assert_eq!(stats.total_metaphors, 13);
        assert_eq!(stats.total_chains, 13);
        assert!((stats.avg_forced_per_chain - 3.0).abs() < f64::EPSILON);
        assert_eq!(stats.terms.len(), 13);
    }
}
