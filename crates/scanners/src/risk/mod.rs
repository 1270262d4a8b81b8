//! Risk analysis: rule enrichment, scoring, and result assembly.

pub mod engine;
pub mod rules;
pub mod scoring;

pub use engine::RiskEngine;
pub use rules::{Rule, RuleDef, RuleTable};
pub use scoring::{MAX_SCORE, ScoringEngine};
