//! Core data models for Reframe
//!
//! These models are used throughout the codebase for representing
//! detection matches, entropy reports, and analysis results.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A reified metaphor detected in a statement.
///
/// Carries the catalog entry's framing labels plus the context snippet
/// where the term appeared. Produced per analysis call and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionMatch {
    /// Catalog term that matched
    pub term: String,
    /// How the term is being treated (constant form)
    pub reified_as: String,
    /// What the term actually is (variable form)
    pub functional_form: String,
    /// Candidate values when the term is treated as a variable
    pub value_range: Vec<String>,
    /// Factors the variable depends on
    pub depends_on: Vec<String>,
    /// Why this reification serves institutional interests
    pub institutional_function: String,
    /// Ellipsis-wrapped snippet around the matched span
    pub context: String,
}

/// Noise categories flagged by the base audit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoiseSignal {
    #[serde(rename = "Institutional_Shunt")]
    InstitutionalShunt,
    #[serde(rename = "Homogeneity_Assumption")]
    HomogeneityAssumption,
}

impl std::fmt::Display for NoiseSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoiseSignal::InstitutionalShunt => write!(f, "Institutional_Shunt"),
            NoiseSignal::HomogeneityAssumption => write!(f, "Homogeneity_Assumption"),
        }
    }
}

/// Result of the base phrase-membership noise check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseAudit {
    /// Noise categories present (each counted at most once)
    pub signals: Vec<NoiseSignal>,
    /// Base signal-to-noise ratio, `1.0 - signals/10`
    pub snr: f64,
    /// Whether the statement clears the coherence margin
    pub is_coherent: bool,
}

/// Entropy breakdown for a single statement.
///
/// All fields are derived during scoring and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntropyReport {
    pub base_signal_to_noise: f64,
    pub base_entropy: f64,
    pub metaphor_count: usize,
    pub metaphor_entropy: f64,
    pub chain_amplification: f64,
    pub total_entropy: f64,
    pub signal_clarity: f64,
}

/// How one reified term forces others to stay constrained
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainTrace {
    /// Term the trace starts from
    pub primary: String,
    /// Terms forced into constraint by the primary's reification
    pub forces: Vec<String>,
    /// Natural-language explanation of the forcing
    pub mechanism: String,
}

/// A functional definition pinned for the rest of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LockedVariable {
    /// Functional form the term is locked to
    #[serde(rename = "type")]
    pub kind: String,
    /// Value range of the locked variable
    pub range: Vec<String>,
    pub context_dependent: bool,
    pub depends_on: Vec<String>,
    /// The constant framing the term was released from
    pub locked_from_reified_form: String,
}

/// A suggested lock, offered without being applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LockSuggestion {
    pub current_treatment: String,
    pub functional_form: String,
    pub suggested_range: Vec<String>,
    pub rationale: String,
}

/// One substitution recommended by the re-normalization plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correction {
    pub term: String,
    /// Constant framing being replaced
    pub from: String,
    /// Functional framing replacing it
    pub to: String,
    pub new_range: Vec<String>,
    pub rationale: String,
}

/// Actionable guidance for re-normalizing a statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenormalizationPlan {
    pub requires_correction: bool,
    pub signal_clarity: f64,
    pub corrections: Vec<Correction>,
    pub functional_restatement: String,
    pub locked_variables: IndexMap<String, LockedVariable>,
}

/// Complete integrated analysis of one statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullAnalysis {
    pub statement: String,
    pub noise_audit: NoiseAudit,
    pub matches: Vec<DetectionMatch>,
    pub chains: Vec<ChainTrace>,
    pub entropy: EntropyReport,
    pub locked_variables: IndexMap<String, LockedVariable>,
    pub requires_renormalization: bool,
}

/// One-line summary for interactive use
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickSummary {
    pub signal_clarity: f64,
    pub terms: Vec<String>,
    pub requires_correction: bool,
    pub functional_restatement: String,
}

/// Catalog overview numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total_metaphors: usize,
    pub total_chains: usize,
    pub avg_forced_per_chain: f64,
    pub terms: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noise_signal_display() {
        assert_eq!(NoiseSignal::InstitutionalShunt.to_string(), "Institutional_Shunt");
        assert_eq!(
            NoiseSignal::HomogeneityAssumption.to_string(),
            "Homogeneity_Assumption"
        );
    }

    #[test]
    fn test_locked_variable_serializes_kind_as_type() {
        let locked = LockedVariable {
            kind: "permeability spectrum".to_string(),
            range: vec!["fully_open".to_string()],
            context_dependent: true,
            depends_on: vec!["context".to_string()],
            locked_from_reified_form: "fixed separation".to_string(),
        };
        let value = serde_json::to_value(&locked).expect("serialize");
        assert_eq!(value["type"], "permeability spectrum");
        assert!(value.get("kind").is_none());
    }
}
