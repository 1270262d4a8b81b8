use crate::core::{Finding, Severity};
use std::collections::HashMap;

pub const MAX_SCORE: f64 = 100.0;

/// Maps post-enrichment severities to weights and sums them into the
/// composite score.
///
/// The score saturates at [`MAX_SCORE`] rather than normalizing: two scans
/// with very different finding counts can both report 100.0, and that is
/// the intended reading ("at or past the ceiling"), so no rescaling by
/// finding count happens here.
pub struct ScoringEngine {
    weights: HashMap<Severity, f64>,
}

impl ScoringEngine {
    pub fn new() -> Self {
        let weights = HashMap::from([
            (Severity::Critical, 10.0),
            (Severity::High, 7.0),
            (Severity::Medium, 4.0),
            (Severity::Low, 1.0),
            (Severity::Unknown, 0.0),
        ]);
        Self { weights }
    }

    pub fn weight(&self, severity: Severity) -> f64 {
        // A severity missing from the table counts 1.0, not 0.0, so an
        // unmapped level can never silently vanish from the score.
        self.weights.get(&severity).copied().unwrap_or(1.0)
    }

    pub fn score(&self, findings: &[Finding]) -> f64 {
        let total: f64 = findings
            .iter()
            .map(|finding| self.weight(finding.severity))
            .sum();
        total.min(MAX_SCORE)
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}
