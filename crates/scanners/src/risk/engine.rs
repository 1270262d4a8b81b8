use crate::core::{Finding, ScanResult, count_severities};
use crate::risk::{RuleTable, ScoringEngine};
use std::collections::HashMap;
use std::path::Path;

/// Composition root of the analysis stage: rule enrichment, scoring, and
/// the severity tally. The sole producer of `score` and `counts`.
pub struct RiskEngine {
    rules: RuleTable,
    scorer: ScoringEngine,
}

impl RiskEngine {
    pub fn new(rules: RuleTable) -> Self {
        Self {
            rules,
            scorer: ScoringEngine::new(),
        }
    }

    /// Builds an engine from a rules file path; load faults degrade to an
    /// empty table (enrichment becomes a no-op) rather than failing.
    pub fn from_rules_file(path: &Path) -> Self {
        Self::new(RuleTable::load(path))
    }

    /// Enriches every finding against the rule table, scores the enriched
    /// list, and tallies severities. Data-quality problems never surface
    /// here; the result is always valid, even when empty.
    pub fn analyze(&self, findings: Vec<Finding>) -> ScanResult {
        let findings: Vec<Finding> = findings
            .into_iter()
            .map(|finding| self.enrich(finding))
            .collect();

        let score = self.scorer.score(&findings);
        let counts = count_severities(&findings);

        ScanResult {
            score,
            findings,
            counts,
            metadata: HashMap::new(),
        }
    }

    /// Applies the rule table's overrides to one finding. A lookup miss
    /// leaves the scanner-assigned defaults untouched; a hit overwrites
    /// severity and category only. Pure overwrite, so applying it twice
    /// changes nothing.
    fn enrich(&self, mut finding: Finding) -> Finding {
        if let Some(rule) = self.rules.get(&finding.rule_id) {
            if let Some(severity) = rule.severity {
                finding.severity = severity;
            }
            if let Some(category) = &rule.category {
                finding.category = category.clone();
            }
        }
        finding
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ResourceType, Severity};

    fn engine_with(json: &str) -> RiskEngine {
        RiskEngine::new(RuleTable::from_json(json).unwrap())
    }

    fn finding(rule_id: &str, severity: Severity) -> Finding {
        Finding::new(rule_id, "res:x", ResourceType::User, "details", severity)
    }

    #[test]
    fn enrichment_overrides_severity_and_category() {
        let engine = engine_with(
            r#"[{"id": "CHAT_NO_MFA", "severity": "HIGH", "category": "identity"}]"#,
        );
        let result = engine.analyze(vec![finding("CHAT_NO_MFA", Severity::Unknown)]);

        assert_eq!(result.findings[0].severity, Severity::High);
        assert_eq!(result.findings[0].category, "identity");
        assert_eq!(result.score, 7.0);
        assert_eq!(result.count(Severity::High), 1);
    }

    #[test]
    fn unmatched_rule_keeps_scanner_defaults() {
        let engine = engine_with(r#"[{"id": "OTHER_RULE", "severity": "CRITICAL"}]"#);
        let result = engine.analyze(vec![finding("UNLISTED", Severity::Low)]);

        assert_eq!(result.findings[0].severity, Severity::Low);
        assert_eq!(result.findings[0].category, "general");
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn rule_without_severity_overrides_category_only() {
        let engine = engine_with(r#"[{"id": "X", "category": "custom"}]"#);
        let result = engine.analyze(vec![finding("X", Severity::Medium)]);

        assert_eq!(result.findings[0].severity, Severity::Medium);
        assert_eq!(result.findings[0].category, "custom");
    }

    #[test]
    fn empty_input_yields_zero_score_and_full_buckets() {
        let engine = RiskEngine::new(RuleTable::empty());
        let result = engine.analyze(Vec::new());

        assert_eq!(result.score, 0.0);
        assert!(result.findings.is_empty());
        assert_eq!(result.counts.len(), 5);
        assert!(result.counts.values().all(|&count| count == 0));
    }

    #[test]
    fn counts_cover_every_finding() {
        let engine = RiskEngine::new(RuleTable::empty());
        let result = engine.analyze(vec![
            finding("A", Severity::Critical),
            finding("B", Severity::Critical),
            finding("C", Severity::Medium),
        ]);

        assert_eq!(result.counts.values().sum::<usize>(), result.findings.len());
        assert_eq!(result.count(Severity::Critical), 2);
        assert_eq!(result.count(Severity::Medium), 1);
    }

    #[test]
    fn enrichment_is_idempotent() {
        let engine = engine_with(r#"[{"id": "X", "severity": "HIGH", "category": "identity"}]"#);
        let once = engine.analyze(vec![finding("X", Severity::Unknown)]);
        let twice = engine.analyze(once.findings.clone());

        assert_eq!(once.findings, twice.findings);
        assert_eq!(once.score, twice.score);
        assert_eq!(once.counts, twice.counts);
    }
}
