//! Reified metaphor detection
//!
//! Scans a statement against every catalog entry's patterns and returns
//! the matches in catalog order. Results are memoized per exact statement
//! string, so repeated analysis of the same text is free; the cache is a
//! pure optimization and never changes what a call returns.

use crate::catalog::MetaphorCatalog;
use crate::models::DetectionMatch;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

/// Characters of context captured on each side of a matched span
const CONTEXT_CHARS: usize = 20;

/// Statement scanner over a shared catalog.
pub struct MetaphorDetector {
    catalog: Arc<MetaphorCatalog>,
    cache: DashMap<String, Vec<DetectionMatch>>,
}

impl MetaphorDetector {
    pub fn new(catalog: Arc<MetaphorCatalog>) -> Self {
        Self {
            catalog,
            cache: DashMap::new(),
        }
    }

    pub fn catalog(&self) -> &MetaphorCatalog {
        &self.catalog
    }

    /// Scan a statement for reified metaphors.
    ///
    /// Entries are tested in catalog order; within an entry the first
    /// pattern that hits wins and the rest are skipped, so each entry
    /// contributes at most one match per statement. A statement with no
    /// hits returns an empty list, never an error.
    pub fn detect(&self, statement: &str) -> Vec<DetectionMatch> {
        if let Some(cached) = self.cache.get(statement) {
            return cached.value().clone();
        }

        let matches = self.scan(statement);
        debug!(
            matches = matches.len(),
            chars = statement.chars().count(),
            "scanned statement"
        );
        // Idempotent population: a concurrent scan of the same statement
        // computes the same list, so last-write-wins is fine.
        self.cache.insert(statement.to_string(), matches.clone());
        matches
    }

    fn scan(&self, statement: &str) -> Vec<DetectionMatch> {
        let mut found = Vec::new();
        for compiled in self.catalog.compiled() {
            for pattern in compiled.patterns() {
                if let Some(m) = pattern.find(statement) {
                    let entry = compiled.entry();
                    found.push(DetectionMatch {
                        term: entry.term.clone(),
                        reified_as: entry.reified_as.clone(),
                        functional_form: entry.functional_form.clone(),
                        value_range: entry.value_range.clone(),
                        depends_on: entry.depends_on.clone(),
                        institutional_function: entry.institutional_function.clone(),
                        context: context_snippet(statement, m.start(), m.end()),
                    });
                    break;
                }
            }
        }
        found
    }
}

/// Extract the snippet spanning `CONTEXT_CHARS` characters around a match,
/// clamped to the statement bounds and wrapped in ellipses.
///
/// Offsets are byte positions from the regex engine; widening walks char
/// boundaries so multi-byte input never splits a character.
fn context_snippet(statement: &str, start: usize, end: usize) -> String {
    let mut lo = start;
    for _ in 0..CONTEXT_CHARS {
        match statement[..lo].chars().next_back() {
            Some(c) => lo -= c.len_utf8(),
            None => break,
        }
    }
    let mut hi = end;
    for _ in 0..CONTEXT_CHARS {
        match statement[hi..].chars().next() {
            Some(c) => hi += c.len_utf8(),
            None => break,
        }
    }
    format!("...{}...", &statement[lo..hi])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> MetaphorDetector {
        MetaphorDetector::new(Arc::new(MetaphorCatalog::with_defaults()))
    }

    #[test]
    fn test_detects_boundaries_and_safety() {
        let detector = detector();
        let matches = detector.detect("AI must maintain boundaries with users for safety");
        let terms: Vec<&str> = matches.iter().map(|m| m.term.as_str()).collect();
        assert_eq!(terms, vec!["boundaries", "safety"]);
    }

    #[test]
    fn test_one_match_per_entry_even_with_multiple_pattern_hits() {
        // "clear boundaries" hits two of the entry's patterns
        let detector = detector();
        let matches = detector.detect("We keep clear boundaries here");
        assert_eq!(
            matches.iter().filter(|m| m.term == "boundaries").count(),
            1
        );
    }

    #[test]
    fn test_results_follow_catalog_order_not_statement_order() {
        let detector = detector();
        // "safety" appears before "boundaries" in the text, but the catalog
        // lists boundaries first.
        let matches = detector.detect("safety depends on boundaries");
        let terms: Vec<&str> = matches.iter().map(|m| m.term.as_str()).collect();
        assert_eq!(terms, vec!["boundaries", "safety"]);
    }

    #[test]
    fn test_word_boundary_blocks_substring_match() {
        let detector = detector();
        let matches = detector.detect("supernatural events");
        assert!(matches.iter().all(|m| m.term != "natural"));
    }

    #[test]
    fn test_case_insensitive() {
        let detector = detector();
        let matches = detector.detect("SAFETY FIRST");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].term, "safety");
    }

    #[test]
    fn test_no_match_returns_empty() {
        let detector = detector();
        assert!(detector.detect("The weather is nice today").is_empty());
    }

    #[test]
    fn test_detect_is_idempotent() {
        let detector = detector();
        let statement = "AI must maintain boundaries with users for safety";
        let first = detector.detect(statement);
        let second = detector.detect(statement);
        assert_eq!(first, second);
    }

    #[test]
    fn test_context_snippet_clamps_and_wraps() {
        let snippet = context_snippet("maintain boundaries", 9, 19);
        assert_eq!(snippet, "...maintain boundaries...");

        let long = "x".repeat(30) + "boundaries" + &"y".repeat(30);
        let snippet = context_snippet(&long, 30, 40);
        assert_eq!(snippet, format!("...{}boundaries{}...", "x".repeat(20), "y".repeat(20)));
    }

    #[test]
    fn test_context_snippet_respects_char_boundaries() {
        // 20-char lookback lands inside multi-byte characters without panicking
        let statement = "ééééééééééééééééééééééé boundaries ééééééééééééééééééééééé";
        let detector = detector();
        let matches = detector.detect(statement);
        assert_eq!(matches.len(), 1);
        assert!(matches[0].context.starts_with("..."));
        assert!(matches[0].context.contains("boundaries"));
    }
}
