//! Analysis engine
//!
//! Composition root over the catalog, detector, scorer, restater, and the
//! session lock record. The engine owns the session state and a shared
//! reference to the immutable catalog; the components below it never touch
//! the lock record themselves.

use crate::catalog::MetaphorCatalog;
use crate::detect::MetaphorDetector;
use crate::models::{
    ChainTrace, Correction, DetectionMatch, EntropyReport, FullAnalysis, LockSuggestion,
    LockedVariable, QuickSummary, RenormalizationPlan,
};
use crate::restate;
use crate::scoring::{audit_noise, EntropyScorer, DEFAULT_CLARITY_THRESHOLD};
use crate::session::LockRecord;
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::debug;

/// One analysis session: shared catalog, memoizing detector, lock record.
pub struct AnalysisEngine {
    catalog: Arc<MetaphorCatalog>,
    detector: MetaphorDetector,
    scorer: EntropyScorer,
    locks: LockRecord,
    clarity_threshold: f64,
}

impl AnalysisEngine {
    /// Engine over the built-in catalog
    pub fn new() -> Self {
        Self::with_catalog(MetaphorCatalog::with_defaults())
    }

    pub fn with_catalog(catalog: MetaphorCatalog) -> Self {
        let catalog = Arc::new(catalog);
        Self {
            detector: MetaphorDetector::new(Arc::clone(&catalog)),
            scorer: EntropyScorer::new(Arc::clone(&catalog)),
            catalog,
            locks: LockRecord::new(),
            clarity_threshold: DEFAULT_CLARITY_THRESHOLD,
        }
    }

    /// Override the clarity threshold used for the re-normalization flag.
    /// The scoring formula itself is unaffected.
    pub fn with_clarity_threshold(mut self, threshold: f64) -> Self {
        self.clarity_threshold = threshold;
        self
    }

    pub fn catalog(&self) -> &MetaphorCatalog {
        &self.catalog
    }

    pub fn clarity_threshold(&self) -> f64 {
        self.clarity_threshold
    }

    /// Scan a statement for reified metaphors
    pub fn detect(&self, statement: &str) -> Vec<DetectionMatch> {
        self.detector.detect(statement)
    }

    /// Trace the dependency chain for a term
    pub fn trace(&self, term: &str) -> Option<ChainTrace> {
        self.catalog.trace(term)
    }

    /// Score a statement's entropy and clarity
    pub fn score(&self, statement: &str) -> EntropyReport {
        let matches = self.detector.detect(statement);
        self.scorer.score(statement, &matches)
    }

    /// Rewrite a statement with functional forms substituted
    pub fn restate(&self, statement: &str) -> String {
        let matches = self.detector.detect(statement);
        restate::restate(statement, &matches)
    }

    /// Pin a term to a functional definition for this session
    pub fn lock(&mut self, term: impl Into<String>, definition: LockedVariable) {
        self.locks.lock(term, definition);
    }

    /// Current lock record
    pub fn locks(&self) -> &LockRecord {
        &self.locks
    }

    /// Detect reified metaphors and lock every match to its functional
    /// definition, returning the matches.
    pub fn auto_lock(&mut self, statement: &str) -> Vec<DetectionMatch> {
        let matches = self.detector.detect(statement);
        for m in &matches {
            self.locks.lock(m.term.clone(), lock_definition(m));
        }
        matches
    }

    /// Suggest locks for a statement without applying them.
    pub fn suggest_locks(&self, statement: &str) -> IndexMap<String, LockSuggestion> {
        let mut suggestions = IndexMap::new();
        for m in self.detector.detect(statement) {
            let rationale = format!(
                "Expands '{}' from constant ({}) to variable ({})",
                m.term, m.reified_as, m.functional_form
            );
            suggestions.insert(
                m.term.clone(),
                LockSuggestion {
                    current_treatment: m.reified_as,
                    functional_form: m.functional_form,
                    suggested_range: m.value_range,
                    rationale,
                },
            );
        }
        suggestions
    }

    /// Complete integrated analysis of one statement.
    ///
    /// Bundles the noise audit, matches, per-term chain traces, entropy
    /// report, lock-record snapshot, and the re-normalization flag. Every
    /// match is auto-locked.
    pub fn full_analysis(&mut self, statement: &str) -> FullAnalysis {
        self.analyze(statement, true)
    }

    /// Like [`full_analysis`](Self::full_analysis), with auto-locking
    /// optional.
    pub fn analyze(&mut self, statement: &str, auto_lock: bool) -> FullAnalysis {
        let noise_audit = audit_noise(statement);
        let matches = self.detector.detect(statement);
        let chains: Vec<ChainTrace> = matches
            .iter()
            .filter_map(|m| self.catalog.trace(&m.term))
            .collect();
        let entropy = self.scorer.score(statement, &matches);

        if auto_lock {
            for m in &matches {
                self.locks.lock(m.term.clone(), lock_definition(m));
            }
        }

        let requires_renormalization = entropy.signal_clarity < self.clarity_threshold;
        debug!(
            matches = matches.len(),
            clarity = entropy.signal_clarity,
            requires_renormalization,
            "analyzed statement"
        );

        FullAnalysis {
            statement: statement.to_string(),
            noise_audit,
            matches,
            chains,
            entropy,
            locked_variables: self.locks.snapshot(),
            requires_renormalization,
        }
    }

    /// Build correction instructions for re-normalizing a statement.
    pub fn renormalization_plan(&mut self, statement: &str) -> RenormalizationPlan {
        let analysis = self.full_analysis(statement);

        let corrections = analysis
            .matches
            .iter()
            .map(|m| Correction {
                term: m.term.clone(),
                from: m.reified_as.clone(),
                to: m.functional_form.clone(),
                new_range: m.value_range.clone(),
                rationale: m.institutional_function.clone(),
            })
            .collect();

        RenormalizationPlan {
            requires_correction: analysis.requires_renormalization,
            signal_clarity: analysis.entropy.signal_clarity,
            corrections,
            functional_restatement: restate::restate(statement, &analysis.matches),
            locked_variables: analysis.locked_variables,
        }
    }

    /// One-line summary for interactive use.
    pub fn quick_summary(&mut self, statement: &str) -> QuickSummary {
        let analysis = self.full_analysis(statement);
        QuickSummary {
            signal_clarity: analysis.entropy.signal_clarity,
            terms: analysis.matches.iter().map(|m| m.term.clone()).collect(),
            requires_correction: analysis.requires_renormalization,
            functional_restatement: restate::restate(statement, &analysis.matches),
        }
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a detection match to the functional definition it locks to.
fn lock_definition(m: &DetectionMatch) -> LockedVariable {
    LockedVariable {
        kind: m.functional_form.clone(),
        range: m.value_range.clone(),
        context_dependent: true,
        depends_on: m.depends_on.clone(),
        locked_from_reified_form: m.reified_as.clone(),
    }
}
