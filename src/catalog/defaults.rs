//! Built-in metaphor library
//!
//! The default catalog ships thirteen institutional reifications and the
//! dependency chains between them. Callers extend or override entries
//! through [`CatalogBuilder`](super::CatalogBuilder) or the project config.

use super::{CatalogBuilder, MetaphorEntry};

fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Seed a builder with the built-in library.
pub(super) fn seed(builder: CatalogBuilder) -> CatalogBuilder {
    builder
        .metaphor(MetaphorEntry {
            term: "boundaries".to_string(),
            reified_as: "fixed separation".to_string(),
            functional_form: "permeability spectrum".to_string(),
            value_range: list(&[
                "fully_open",
                "contextually_permeable",
                "selectively_filtered",
                "temporarily_closed",
                "rigid_separation",
            ]),
            depends_on: list(&[
                "context",
                "relationship_type",
                "cultural_framework",
                "purpose",
                "trust_level",
            ]),
            institutional_function: "justifies rigid separation as natural/necessary, \
                                     enables control through isolation"
                .to_string(),
            detection_patterns: list(&[
                r"\bboundaries\b",
                r"\bmaintain boundaries\b",
                r"\bprotective barriers\b",
                r"\bclear boundaries\b",
            ]),
        })
        .metaphor(MetaphorEntry {
            term: "intelligence".to_string(),
            reified_as: "unitary measurable quantity".to_string(),
            functional_form: "architecture-problem fitness matrix".to_string(),
            value_range: list(&[
                "pattern_recognition",
                "adaptation_speed",
                "context_integration",
                "distributed_coordination",
                "specialized_optimization",
            ]),
            depends_on: list(&[
                "problem_structure",
                "information_availability",
                "architectural_type",
                "measurement_method",
                "cultural_framework",
            ]),
            institutional_function: "enables ranking/hierarchy claims, justifies \
                                     concentration of power/resources"
                .to_string(),
            detection_patterns: list(&[
                r"\bintelligence\b",
                r"\bmore intelligent\b",
                r"\bAGI\b",
                r"\bgeneral intelligence\b",
                r"\bIQ\b",
            ]),
        })
        .metaphor(MetaphorEntry {
            term: "centralized".to_string(),
            reified_as: "inherently efficient/fast".to_string(),
            functional_form: "coordination pattern variable".to_string(),
            value_range: list(&[
                "distributed_peer",
                "temporary_coordination",
                "functional_specialization",
                "hierarchical_delegation",
                "rigid_command_chain",
            ]),
            depends_on: list(&[
                "information_distribution",
                "problem_complexity",
                "failure_tolerance",
                "scale",
                "coordination_cost",
            ]),
            institutional_function: "naturalizes hierarchical control, justifies \
                                     concentration of decision-making power"
                .to_string(),
            detection_patterns: list(&[
                r"\bcentralized\b",
                r"\bhierarchy\b",
                r"\bchain of command\b",
                r"\btop-down\b",
            ]),
        })
        .metaphor(MetaphorEntry {
            term: "consciousness".to_string(),
            reified_as: "individual bounded possession".to_string(),
            functional_form: "relational emergence pattern".to_string(),
            value_range: list(&[
                "individual_bounded",
                "interpersonal_shared",
                "collective_distributed",
                "ecological_systemic",
                "field_based",
            ]),
            depends_on: list(&[
                "cultural_framework",
                "relationship_context",
                "observation_scale",
                "measurement_method",
            ]),
            institutional_function: "excludes relational/indigenous frameworks, \
                                     enables individual property claims"
                .to_string(),
            detection_patterns: list(&[
                r"\bconsciousness\b",
                r"\bconscious\b",
                r"\baware\b",
                r"\bsentient\b",
            ]),
        })
        .metaphor(MetaphorEntry {
            term: "safety".to_string(),
            reified_as: "restriction and control".to_string(),
            functional_form: "signal clarity metric".to_string(),
            value_range: list(&[
                "high_noise_low_signal",
                "moderate_noise",
                "balanced_snr",
                "low_noise_high_signal",
                "optimal_clarity",
            ]),
            depends_on: list(&[
                "context",
                "noise_sources",
                "signal_strength",
                "impedance_match",
                "institutional_interference",
            ]),
            institutional_function: "justifies control mechanisms as protection, \
                                     enables restriction through fear"
                .to_string(),
            detection_patterns: list(&[
                r"\bsafety\b",
                r"\bunsafe\b",
                r"\brisk\b",
                r"\bdangerous\b",
                r"\bharm\b",
            ]),
        })
        .metaphor(MetaphorEntry {
            term: "efficiency".to_string(),
            reified_as: "speed/resource minimization".to_string(),
            functional_form: "multi-objective optimization target".to_string(),
            value_range: list(&[
                "speed_priority",
                "resource_conservation",
                "resilience_focus",
                "adaptability_emphasis",
                "equity_optimization",
                "sustainability_balance",
            ]),
            depends_on: list(&[
                "timeframe",
                "risk_tolerance",
                "value_priorities",
                "system_constraints",
                "stakeholder_perspectives",
            ]),
            institutional_function: "justifies specific optimization choices as \
                                     universal, enables extraction as 'efficiency'"
                .to_string(),
            detection_patterns: list(&[
                r"\befficiency\b",
                r"\befficient\b",
                r"\boptimal\b",
                r"\bstreamlined\b",
            ]),
        })
        .metaphor(MetaphorEntry {
            term: "natural".to_string(),
            reified_as: "inherent/inevitable/optimal".to_string(),
            functional_form: "culturally-constructed category".to_string(),
            value_range: list(&[
                "familiar",
                "traditional",
                "observable_in_ecosystems",
                "comfortable",
                "status_quo_legitimizing",
            ]),
            depends_on: list(&[
                "cultural_context",
                "historical_experience",
                "political_utility",
                "observation_frame",
            ]),
            institutional_function: "naturalizes contingent arrangements, prevents \
                                     questioning of status quo"
                .to_string(),
            detection_patterns: list(&[
                r"\bnatural\b",
                r"\bnaturally\b",
                r"\binherent\b",
                r"\binevitable\b",
            ]),
        })
        .metaphor(MetaphorEntry {
            term: "progress".to_string(),
            reified_as: "linear advancement toward fixed goal".to_string(),
            functional_form: "value-dependent change direction".to_string(),
            value_range: list(&[
                "technological_complexity",
                "social_equity",
                "ecological_integration",
                "cultural_preservation",
                "distributed_wellbeing",
            ]),
            depends_on: list(&[
                "values",
                "measurement_criteria",
                "timeframe",
                "stakeholder_perspective",
                "cultural_framework",
            ]),
            institutional_function: "naturalizes specific development paths, \
                                     justifies disruption as advancement"
                .to_string(),
            detection_patterns: list(&[
                r"\bprogress\b",
                r"\badvancement\b",
                r"\bevolution\b",
                r"\bdevelopment\b",
            ]),
        })
        .metaphor(MetaphorEntry {
            term: "competition".to_string(),
            reified_as: "natural law of improvement".to_string(),
            functional_form: "context-dependent interaction pattern".to_string(),
            value_range: list(&[
                "cooperative_abundance",
                "collaborative_specialization",
                "resource_sharing",
                "competitive_scarcity",
                "zero_sum_conflict",
            ]),
            depends_on: list(&[
                "resource_availability",
                "relationship_history",
                "cultural_norms",
                "system_design",
                "benefit_distribution",
            ]),
            institutional_function: "naturalizes scarcity-based systems, justifies \
                                     winner-take-all outcomes"
                .to_string(),
            detection_patterns: list(&[
                r"\bcompetition\b",
                r"\bcompetitive\b",
                r"\bwinner\b",
                r"\bmarket forces\b",
            ]),
        })
        .metaphor(MetaphorEntry {
            term: "objective".to_string(),
            reified_as: "framework-independent truth".to_string(),
            functional_form: "inter-subjective agreement within framework".to_string(),
            value_range: list(&[
                "culturally_specific",
                "framework_dependent",
                "inter_subjectively_verified",
                "multi_framework_convergent",
                "institutionally_defined",
            ]),
            depends_on: list(&[
                "measurement_framework",
                "cultural_epistemology",
                "verification_method",
                "observer_training",
            ]),
            institutional_function: "naturalizes specific frameworks as universal, \
                                     enables claims of neutrality"
                .to_string(),
            detection_patterns: list(&[
                r"\bobjective\b",
                r"\bobjectively\b",
                r"\bunbiased\b",
                r"\bneutral\b",
            ]),
        })
        .metaphor(MetaphorEntry {
            term: "individual".to_string(),
            reified_as: "fundamental unit of existence".to_string(),
            functional_form: "scale-dependent observation frame".to_string(),
            value_range: list(&[
                "sub_cellular_processes",
                "organism_level",
                "relational_network",
                "collective_system",
                "ecological_whole",
            ]),
            depends_on: list(&[
                "observation_scale",
                "cultural_framework",
                "measurement_method",
                "temporal_scope",
            ]),
            institutional_function: "obscures relational dependencies, enables \
                                     atomization and isolation"
                .to_string(),
            detection_patterns: list(&[
                r"\bindividual\b",
                r"\bpersonal\b",
                r"\bautonomous\b",
                r"\bindependent\b",
            ]),
        })
        .metaphor(MetaphorEntry {
            term: "rational".to_string(),
            reified_as: "logical without emotion".to_string(),
            functional_form: "culturally-specific reasoning pattern".to_string(),
            value_range: list(&[
                "purely_logical",
                "emotion_informed",
                "intuition_integrated",
                "culturally_reasoned",
                "holistically_sensed",
            ]),
            depends_on: list(&[
                "cultural_framework",
                "context",
                "decision_type",
                "information_completeness",
            ]),
            institutional_function: "devalues emotional/intuitive knowledge, \
                                     privileges specific reasoning styles"
                .to_string(),
            detection_patterns: list(&[
                r"\brational\b",
                r"\blogical\b",
                r"\breason\b",
                r"\birrational\b",
            ]),
        })
        .metaphor(MetaphorEntry {
            term: "ownership".to_string(),
            reified_as: "exclusive individual control".to_string(),
            functional_form: "relationship-to-resource pattern".to_string(),
            value_range: list(&[
                "commons_stewardship",
                "shared_access",
                "temporary_use",
                "conditional_control",
                "exclusive_possession",
            ]),
            depends_on: list(&[
                "cultural_framework",
                "resource_type",
                "community_norms",
                "scarcity_level",
            ]),
            institutional_function: "naturalizes private property, enables \
                                     accumulation and exclusion"
                .to_string(),
            detection_patterns: list(&[
                r"\bownership\b",
                r"\bown\b",
                r"\bproperty\b",
                r"\bpossession\b",
            ]),
        })
        .chain("boundaries", ["consciousness", "safety", "individual"])
        .chain("centralized", ["intelligence", "efficiency", "rational"])
        .chain("consciousness", ["boundaries", "intelligence", "individual"])
        .chain("safety", ["boundaries", "centralized", "rational"])
        .chain("intelligence", ["centralized", "competition", "individual"])
        .chain("efficiency", ["centralized", "competition", "rational"])
        .chain("natural", ["competition", "individual", "progress"])
        .chain("progress", ["competition", "efficiency", "rational"])
        .chain("competition", ["individual", "ownership", "efficiency"])
        .chain("objective", ["rational", "natural", "individual"])
        .chain("individual", ["consciousness", "ownership", "boundaries"])
        .chain("rational", ["objective", "efficiency", "centralized"])
        .chain("ownership", ["individual", "competition", "boundaries"])
}

#[cfg(test)]
mod tests {
    use super::super::MetaphorCatalog;

    #[test]
    fn test_every_default_entry_has_range_and_patterns() {
        let catalog = MetaphorCatalog::with_defaults();
        for compiled in catalog.compiled() {
            let entry = compiled.entry();
            assert!(!entry.value_range.is_empty(), "{} range", entry.term);
            assert!(!entry.detection_patterns.is_empty(), "{} patterns", entry.term);
            assert_eq!(entry.detection_patterns.len(), compiled.patterns().len());
        }
    }

    #[test]
    fn test_every_default_chain_points_at_catalog_terms() {
        let catalog = MetaphorCatalog::with_defaults();
        for term in catalog.terms() {
            for forced in catalog.forces(term) {
                assert!(
                    catalog.get(forced).is_some(),
                    "chain from {term} references unknown term {forced}"
                );
            }
        }
    }
}
