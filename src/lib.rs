//! Reframe - signal-clarity analysis for short statements
//!
//! Detects reified metaphors (abstract concepts treated as fixed constants
//! rather than context-dependent variables), traces the dependency chains
//! between them, scores institutional entropy, and rewrites statements with
//! functional framings substituted.
//!
//! # Quick start
//!
//! ```
//! use reframe::engine::AnalysisEngine;
//!
//! let mut engine = AnalysisEngine::new();
//! let analysis = engine.full_analysis("AI must maintain boundaries with users");
//! assert_eq!(analysis.matches[0].term, "boundaries");
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod detect;
pub mod engine;
pub mod models;
pub mod reporters;
pub mod restate;
pub mod scoring;
pub mod session;

pub use catalog::{CatalogBuilder, CatalogError, MetaphorCatalog, MetaphorEntry};
pub use detect::MetaphorDetector;
pub use engine::AnalysisEngine;
pub use models::{DetectionMatch, EntropyReport, FullAnalysis};
pub use restate::restate;
pub use scoring::{audit_noise, EntropyScorer, DEFAULT_CLARITY_THRESHOLD};
pub use session::LockRecord;
