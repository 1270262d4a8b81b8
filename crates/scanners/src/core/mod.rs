//! Core data contract for the posture pipeline.
//!
//! The record model (`Severity`, `ResourceType`, `Finding`, `ScanResult`)
//! is the shared vocabulary between scanners, the risk engine, and the
//! report/CLI layers. `Snapshot` carries the normalized provider inventory
//! every scanner reads, and the `Scanner` trait is the interface all
//! evaluators implement.

pub mod finding;
pub mod result;
pub mod scanner;
pub mod severity;
pub mod snapshot;

pub use finding::Finding;
pub use result::{ScanResult, count_severities};
pub use scanner::Scanner;
pub use severity::{ResourceType, Severity};
pub use snapshot::{Snapshot, collections, explicit_false, str_field, truthy};
