use crate::core::{Finding, Scanner, Snapshot};
use crate::external_access::ExternalAccessScanner;
use crate::misconfig::MisconfigurationScanner;
use crate::permissions::PermissionsScanner;
use crate::secret_leakage::SecretLeakageScanner;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::warn;

/// Runs every registered scanner over one shared snapshot and concatenates
/// their findings in registration order.
///
/// Finding order is part of the output contract, so registration is an
/// ordered list rather than a keyed registry, and the parallel path
/// collects per-scanner batches by index before flattening. A scanner that
/// fails is contained: it contributes zero findings and the rest of the
/// scan proceeds.
pub struct ScanningEngine {
    scanners: Vec<Arc<dyn Scanner>>,
    parallel: bool,
}

impl ScanningEngine {
    pub fn new() -> Self {
        Self {
            scanners: Vec::new(),
            parallel: true,
        }
    }

    /// The canonical scanner set, in dispatch order.
    pub fn with_defaults() -> Self {
        Self::new()
            .add_scanner(PermissionsScanner::new())
            .add_scanner(ExternalAccessScanner::new())
            .add_scanner(MisconfigurationScanner::new())
            .add_scanner(SecretLeakageScanner::new())
    }

    pub fn add_scanner<S: Scanner + 'static>(mut self, scanner: S) -> Self {
        self.scanners.push(Arc::new(scanner));
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn scanner_ids(&self) -> Vec<&'static str> {
        self.scanners.iter().map(|scanner| scanner.id()).collect()
    }

    pub fn run(&self, snapshot: &Snapshot) -> Vec<Finding> {
        let batches: Vec<Vec<Finding>> = if self.parallel {
            self.scanners
                .par_iter()
                .map(|scanner| Self::run_one(scanner.as_ref(), snapshot))
                .collect()
        } else {
            self.scanners
                .iter()
                .map(|scanner| Self::run_one(scanner.as_ref(), snapshot))
                .collect()
        };

        batches.into_iter().flatten().collect()
    }

    fn run_one(scanner: &dyn Scanner, snapshot: &Snapshot) -> Vec<Finding> {
        match scanner.scan(snapshot) {
            Ok(findings) => findings,
            Err(err) => {
                warn!(scanner = scanner.id(), error = %err, "scanner failed; skipping its findings");
                Vec::new()
            }
        }
    }
}

impl Default for ScanningEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ResourceType, Severity, collections};
    use anyhow::anyhow;
    use serde_json::json;

    struct FailingScanner;

    impl Scanner for FailingScanner {
        fn id(&self) -> &'static str {
            "failing"
        }

        fn name(&self) -> &'static str {
            "Always Fails"
        }

        fn scan(&self, _snapshot: &Snapshot) -> anyhow::Result<Vec<Finding>> {
            Err(anyhow!("malformed input"))
        }
    }

    struct FixedScanner {
        rule_id: &'static str,
    }

    impl Scanner for FixedScanner {
        fn id(&self) -> &'static str {
            "fixed"
        }

        fn name(&self) -> &'static str {
            "Fixed Output"
        }

        fn scan(&self, _snapshot: &Snapshot) -> anyhow::Result<Vec<Finding>> {
            Ok(vec![Finding::new(
                self.rule_id,
                "res:x",
                ResourceType::Unknown,
                "fixed",
                Severity::Low,
            )])
        }
    }

    #[test]
    fn concatenates_in_registration_order() {
        let engine = ScanningEngine::new()
            .add_scanner(FixedScanner { rule_id: "FIRST" })
            .add_scanner(FixedScanner { rule_id: "SECOND" })
            .add_scanner(FixedScanner { rule_id: "THIRD" });

        let findings = engine.run(&Snapshot::new());
        let rule_ids: Vec<&str> = findings.iter().map(|f| f.rule_id.as_str()).collect();
        assert_eq!(rule_ids, vec!["FIRST", "SECOND", "THIRD"]);
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let snapshot = Snapshot::new()
            .with_collection(
                collections::CHAT_USERS,
                vec![json!({"name": "admin", "is_admin": true, "has_2fa": false})],
            )
            .with_collection(
                collections::SOURCE_CONTROL_REPOS,
                vec![json!({"name": "website", "private": false, "branch_protection": false})],
            );

        let parallel = ScanningEngine::with_defaults().run(&snapshot);
        let sequential = ScanningEngine::with_defaults().parallel(false).run(&snapshot);
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn failed_scanner_is_contained() {
        let engine = ScanningEngine::new()
            .add_scanner(FixedScanner { rule_id: "BEFORE" })
            .add_scanner(FailingScanner)
            .add_scanner(FixedScanner { rule_id: "AFTER" });

        let findings = engine.run(&Snapshot::new());
        let rule_ids: Vec<&str> = findings.iter().map(|f| f.rule_id.as_str()).collect();
        assert_eq!(rule_ids, vec!["BEFORE", "AFTER"]);
    }

    #[test]
    fn default_set_runs_in_canonical_order() {
        let engine = ScanningEngine::with_defaults();
        assert_eq!(
            engine.scanner_ids(),
            vec!["permissions", "external-access", "misconfig", "secret-leakage"]
        );
    }
}
