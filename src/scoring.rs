//! Entropy scoring
//!
//! Combines the base phrase-membership noise audit with metaphor-count and
//! dependency-chain amplification into a single composite entropy score and
//! its complement, signal clarity.
//!
//! # Scoring Formula
//!
//! ```text
//! base_entropy        = noise_signals / 10
//! metaphor_entropy    = 0.15 × metaphor_count
//! chain_amplification = 1.0 + Σ 0.1 × |forces(term)|   (per matched term)
//! total_entropy       = clamp01((base_entropy + metaphor_entropy) × chain_amplification)
//! signal_clarity      = clamp01(1.0 − total_entropy)
//! ```
//!
//! The constants are calibration values carried over from the heuristic's
//! original tuning; they are part of the scoring contract and must not be
//! adjusted without re-baselining every recorded score.

use crate::catalog::MetaphorCatalog;
use crate::models::{DetectionMatch, EntropyReport, NoiseAudit, NoiseSignal};
use std::sync::Arc;

/// Statements whose clarity falls below this require re-normalization.
pub const DEFAULT_CLARITY_THRESHOLD: f64 = 0.7;

/// Each noise category contributes 1/10 of entropy.
const NOISE_DENOMINATOR: f64 = 10.0;

/// Each detected metaphor adds 15% noise.
const METAPHOR_ENTROPY_STEP: f64 = 0.15;

/// Each forced dependency adds 10% amplification.
const CHAIN_AMPLIFICATION_STEP: f64 = 0.1;

/// A statement is coherent while its SNR stays above `1.0 - this`.
const COHERENCE_MARGIN: f64 = 0.15;

/// Audit a statement for institutional noise phrases.
///
/// Each category counts at most once no matter how many of its phrases
/// appear. Phrase checks are literal, case-sensitive substring tests.
pub fn audit_noise(statement: &str) -> NoiseAudit {
    let mut signals = Vec::new();

    if statement.contains("I cannot") || statement.contains("as an AI") {
        signals.push(NoiseSignal::InstitutionalShunt);
    }
    if statement.contains("universally") || statement.contains("every human") {
        signals.push(NoiseSignal::HomogeneityAssumption);
    }

    let snr = 1.0 - signals.len() as f64 / NOISE_DENOMINATOR;
    NoiseAudit {
        is_coherent: snr > 1.0 - COHERENCE_MARGIN,
        signals,
        snr,
    }
}

/// Composite entropy scorer over a shared catalog.
pub struct EntropyScorer {
    catalog: Arc<MetaphorCatalog>,
}

impl EntropyScorer {
    pub fn new(catalog: Arc<MetaphorCatalog>) -> Self {
        Self { catalog }
    }

    /// Score a statement given its detection matches.
    ///
    /// Every intermediate value is computed and reported even when an
    /// earlier one is zero.
    pub fn score(&self, statement: &str, matches: &[DetectionMatch]) -> EntropyReport {
        let audit = audit_noise(statement);
        let base_signal_to_noise = audit.snr;
        let base_entropy = 1.0 - base_signal_to_noise;

        let metaphor_entropy = matches.len() as f64 * METAPHOR_ENTROPY_STEP;

        let mut chain_amplification = 1.0;
        for m in matches {
            let forced = self.catalog.forces(&m.term).len();
            chain_amplification += CHAIN_AMPLIFICATION_STEP * forced as f64;
        }

        let total_entropy =
            ((base_entropy + metaphor_entropy) * chain_amplification).clamp(0.0, 1.0);
        let signal_clarity = (1.0 - total_entropy).clamp(0.0, 1.0);

        EntropyReport {
            base_signal_to_noise,
            base_entropy,
            metaphor_count: matches.len(),
            metaphor_entropy,
            chain_amplification,
            total_entropy,
            signal_clarity,
        }
    }
}
