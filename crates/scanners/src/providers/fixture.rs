use crate::providers::{Provider, ProviderKind};
use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Provider backed by a single JSON document of exported inventory, the
/// offline stand-in for a live API client. The document is an object whose
/// keys are the provider's native collection names.
pub struct FixtureProvider {
    kind: ProviderKind,
    path: PathBuf,
}

impl FixtureProvider {
    pub fn new(kind: ProviderKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }

    pub fn chat(path: impl Into<PathBuf>) -> Self {
        Self::new(ProviderKind::Chat, path)
    }

    pub fn source_control(path: impl Into<PathBuf>) -> Self {
        Self::new(ProviderKind::SourceControl, path)
    }

    pub fn office(path: impl Into<PathBuf>) -> Self {
        Self::new(ProviderKind::Office, path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Provider for FixtureProvider {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    fn connect(&mut self) -> Result<()> {
        if !self.path.is_file() {
            anyhow::bail!(
                "{} fixture not found: {}",
                self.kind.as_str(),
                self.path.display()
            );
        }
        Ok(())
    }

    fn fetch_data(&self) -> Result<HashMap<String, Vec<Value>>> {
        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read fixture: {}", self.path.display()))?;
        let document: Value = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse fixture: {}", self.path.display()))?;

        let mut data = HashMap::new();
        for (native, _) in self.kind.collection_map() {
            let records = document
                .get(native)
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default();
            data.insert((*native).to_string(), records);
        }
        Ok(data)
    }
}
