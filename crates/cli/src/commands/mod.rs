pub mod report;
pub mod risk;
pub mod scan;

use clap::ValueEnum;
use kamae_scanners::{AuditEngine, EngineConfig, ProviderFilter};
use std::path::{Path, PathBuf};

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug, Default)]
pub enum ProviderArg {
    #[default]
    All,
    Chat,
    SourceControl,
    Office,
}

impl From<ProviderArg> for ProviderFilter {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::All => ProviderFilter::All,
            ProviderArg::Chat => ProviderFilter::Chat,
            ProviderArg::SourceControl => ProviderFilter::SourceControl,
            ProviderArg::Office => ProviderFilter::Office,
        }
    }
}

/// Builds the engine from the settings file, honoring a rules-file
/// override from the command line.
pub fn build_engine(config_path: &Path, rules_override: Option<&PathBuf>) -> AuditEngine {
    let mut config = EngineConfig::load_or_default(config_path);
    if let Some(rules) = rules_override {
        config.rules_file = rules.clone();
    }
    AuditEngine::from_config(&config)
}
