use crate::core::{Finding, Severity};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Aggregate output of one full scan: composite score, findings in
/// dispatch order, and the per-severity tally.
///
/// Finding order is an observable contract (scanner registration order,
/// then within-scanner emission order); callers display it as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    /// Severity-weighted composite score, clamped to `[0, 100]`.
    pub score: f64,

    pub findings: Vec<Finding>,

    /// Occurrence counts per severity label. All five keys are always
    /// present, zero included.
    pub counts: BTreeMap<Severity, usize>,

    /// Scan-run provenance; the core pipeline leaves it empty.
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
}

impl ScanResult {
    pub fn total_findings(&self) -> usize {
        self.findings.len()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.counts.get(&severity).copied().unwrap_or(0)
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Tallies findings per severity, pre-seeding every bucket so a label that
/// never occurs still shows up as zero.
pub fn count_severities(findings: &[Finding]) -> BTreeMap<Severity, usize> {
    let mut counts: BTreeMap<Severity, usize> =
        Severity::ALL.iter().map(|&sev| (sev, 0)).collect();
    for finding in findings {
        if let Some(slot) = counts.get_mut(&finding.severity) {
            *slot += 1;
        }
    }
    counts
}
