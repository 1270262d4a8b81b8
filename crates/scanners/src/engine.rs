//! Composition root: providers → snapshot → scanners → risk analysis.

use crate::config::EngineConfig;
use crate::core::{ScanResult, Snapshot};
use crate::providers::{FixtureProvider, Provider, ProviderKind};
use crate::report::{ReportFormat, write_report};
use crate::risk::RiskEngine;
use crate::runner::ScanningEngine;
use anyhow::Result;
use serde_json::Value;
use std::path::Path;
use tracing::{info, warn};

/// Which providers a scan covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderFilter {
    #[default]
    All,
    Chat,
    SourceControl,
    Office,
}

impl ProviderFilter {
    pub fn includes(&self, kind: ProviderKind) -> bool {
        match self {
            Self::All => true,
            Self::Chat => kind == ProviderKind::Chat,
            Self::SourceControl => kind == ProviderKind::SourceControl,
            Self::Office => kind == ProviderKind::Office,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Chat => "chat",
            Self::SourceControl => "source_control",
            Self::Office => "office",
        }
    }
}

/// Owns the provider set, the scanner set, and the risk engine for the
/// lifetime of the process; each `run_scan` call takes a fresh snapshot
/// through the whole pipeline.
pub struct AuditEngine {
    providers: Vec<Box<dyn Provider>>,
    scanning: ScanningEngine,
    risk: RiskEngine,
}

impl AuditEngine {
    pub fn from_config(config: &EngineConfig) -> Self {
        let providers: Vec<Box<dyn Provider>> = vec![
            Box::new(FixtureProvider::chat(&config.providers.chat)),
            Box::new(FixtureProvider::source_control(&config.providers.source_control)),
            Box::new(FixtureProvider::office(&config.providers.office)),
        ];
        Self {
            providers,
            scanning: ScanningEngine::with_defaults().parallel(config.parallel_execution),
            risk: RiskEngine::from_rules_file(&config.rules_file),
        }
    }

    /// Custom wiring for embedders and tests.
    pub fn new(
        providers: Vec<Box<dyn Provider>>,
        scanning: ScanningEngine,
        risk: RiskEngine,
    ) -> Self {
        Self {
            providers,
            scanning,
            risk,
        }
    }

    /// Runs a full scan over the selected providers. Provider faults are
    /// absorbed (their collections stay empty); the result is always a
    /// valid `ScanResult`.
    pub fn run_scan(&mut self, filter: ProviderFilter) -> Result<ScanResult> {
        let mut snapshot = Snapshot::new();

        for provider in &mut self.providers {
            let kind = provider.kind();
            if !filter.includes(kind) {
                continue;
            }

            info!(provider = kind.as_str(), "fetching provider data");
            if let Err(err) = provider.connect() {
                warn!(provider = kind.as_str(), error = %err, "provider connect failed; skipping");
                continue;
            }

            let data = match provider.fetch_data() {
                Ok(data) => data,
                Err(err) => {
                    warn!(provider = kind.as_str(), error = %err, "provider fetch failed; treating as empty");
                    continue;
                }
            };

            for (native, snapshot_name) in kind.collection_map() {
                let records = data.get(*native).cloned().unwrap_or_default();
                snapshot.insert(*snapshot_name, records);
            }
        }

        info!(records = snapshot.record_count(), "running scanners");
        let findings = self.scanning.run(&snapshot);

        info!(findings = findings.len(), "analyzing risks");
        let mut result = self.risk.analyze(findings);
        result
            .metadata
            .insert("provider".to_string(), Value::String(filter.as_str().to_string()));

        Ok(result)
    }

    pub fn generate_report(
        &self,
        result: &ScanResult,
        format: ReportFormat,
        destination: &Path,
    ) -> Result<()> {
        write_report(result, format, destination)
    }
}
