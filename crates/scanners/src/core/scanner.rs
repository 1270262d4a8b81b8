//! Scanner trait for pluggable posture checks.
//!
//! Scanners are independent, stateless rule evaluators over one shared
//! inventory snapshot. They never write to the snapshot and never observe
//! each other's output, which is what makes the orchestrator's parallel
//! fan-out safe. A scanner that cannot evaluate its slice returns an error
//! and is contained by the orchestrator; it must never panic over a
//! malformed record.

use crate::core::{Finding, Snapshot};
use anyhow::Result;

pub trait Scanner: Send + Sync {
    fn id(&self) -> &'static str;

    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str {
        "No description provided"
    }

    fn scan(&self, snapshot: &Snapshot) -> Result<Vec<Finding>>;
}
