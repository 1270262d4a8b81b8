//! Externally configured risk rules.
//!
//! A rules file is a JSON array of rule definitions keyed by `id`. Only the
//! `severity` and `category` fields participate in enrichment; the rest is
//! descriptive metadata kept for operators. The table is built once and
//! read-only afterwards.

use crate::core::Severity;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::warn;

/// One entry as it appears in the rules file. `severity` stays a string
/// here so one typo cannot fail deserialization of the whole file; it is
/// validated when the table is indexed.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleDef {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Validated override set for one rule id.
#[derive(Debug, Clone, Default)]
pub struct Rule {
    pub severity: Option<Severity>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: HashMap<String, Rule>,
}

impl RuleTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads the rules file, degrading to an empty table on any fault.
    /// A missing or malformed rules file downgrades enrichment to a no-op;
    /// it never fails the scan.
    pub fn load(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to read rules file; using empty rule table");
                return Self::empty();
            }
        };
        match Self::from_json(&text) {
            Ok(table) => table,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to parse rules file; using empty rule table");
                Self::empty()
            }
        }
    }

    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let defs: Vec<RuleDef> = serde_json::from_str(text)?;
        Ok(Self::from_defs(defs))
    }

    /// Indexes definitions by id. Duplicates resolve last-wins in file
    /// order; an unrecognized severity label rejects that override alone.
    pub fn from_defs(defs: Vec<RuleDef>) -> Self {
        let mut rules = HashMap::new();
        for def in defs {
            let severity = match def.severity.as_deref() {
                Some(label) => {
                    let parsed = Severity::from_label(label);
                    if parsed.is_none() {
                        warn!(
                            rule = %def.id,
                            label,
                            "invalid severity label in rule table; keeping scanner default"
                        );
                    }
                    parsed
                }
                None => None,
            };
            rules.insert(
                def.id,
                Rule {
                    severity,
                    category: def.category,
                },
            );
        }
        Self { rules }
    }

    pub fn get(&self, rule_id: &str) -> Option<&Rule> {
        self.rules.get(rule_id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
