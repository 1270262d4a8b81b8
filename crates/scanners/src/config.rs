//! Engine settings.
//!
//! Loaded from a TOML file; every field has a default so a partial file is
//! fine, and a missing or broken file degrades to the defaults with a
//! warning at the composition root.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Fan scanners out across threads; safe because scanners share the
    /// snapshot read-only.
    pub parallel_execution: bool,

    /// Path to the JSON risk-rules file.
    pub rules_file: PathBuf,

    pub providers: ProviderPaths,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProviderPaths {
    pub chat: PathBuf,
    pub source_control: PathBuf,
    pub office: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            parallel_execution: true,
            rules_file: PathBuf::from("config/risk_rules.json"),
            providers: ProviderPaths::default(),
        }
    }
}

impl Default for ProviderPaths {
    fn default() -> Self {
        Self {
            chat: PathBuf::from("fixtures/mock_chat.json"),
            source_control: PathBuf::from("fixtures/mock_source_control.json"),
            office: PathBuf::from("fixtures/mock_office.json"),
        }
    }
}

impl EngineConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Settings are a convenience, not a requirement: any load fault is
    /// logged and the defaults stand.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                warn!(error = %err, "using default settings");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: EngineConfig = toml::from_str("parallel_execution = false").unwrap();
        assert!(!config.parallel_execution);
        assert_eq!(config.rules_file, PathBuf::from("config/risk_rules.json"));
        assert_eq!(
            config.providers.chat,
            PathBuf::from("fixtures/mock_chat.json")
        );
    }

    #[test]
    fn full_file_parses() {
        let config: EngineConfig = toml::from_str(
            r#"
            parallel_execution = true
            rules_file = "custom/rules.json"

            [providers]
            chat = "data/chat.json"
            source_control = "data/vcs.json"
            office = "data/office.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.rules_file, PathBuf::from("custom/rules.json"));
        assert_eq!(config.providers.office, PathBuf::from("data/office.json"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<EngineConfig>("paralel_execution = true").is_err());
    }

    #[test]
    fn missing_file_degrades_to_defaults() {
        let config = EngineConfig::load_or_default(Path::new("/nonexistent/settings.toml"));
        assert!(config.parallel_execution);
    }
}
