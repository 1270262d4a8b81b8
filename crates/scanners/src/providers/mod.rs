//! Provider connectors.
//!
//! A provider exposes two capabilities: `connect` and `fetch_data`, the
//! latter returning provider-native record collections (`users`, `repos`,
//! `files`, ...). Whether the data comes from a live API or a fixture file
//! is invisible to the scan pipeline; this repo ships the fixture-backed
//! variant, and live clients plug in behind the same trait.

pub mod fixture;

pub use fixture::FixtureProvider;

use anyhow::Result;
use serde_json::Value;
use std::collections::HashMap;

/// Which slice of the SaaS estate a provider covers, and how its native
/// collection names map onto the snapshot's well-known names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Chat,
    SourceControl,
    Office,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::SourceControl => "source_control",
            Self::Office => "office",
        }
    }

    /// `(provider-native collection, snapshot collection)` pairs.
    pub fn collection_map(&self) -> &'static [(&'static str, &'static str)] {
        use crate::core::collections as snap;
        match self {
            Self::Chat => &[("users", snap::CHAT_USERS), ("channels", snap::CHAT_CHANNELS)],
            Self::SourceControl => &[
                ("repos", snap::SOURCE_CONTROL_REPOS),
                ("members", snap::SOURCE_CONTROL_MEMBERS),
            ],
            Self::Office => &[("users", snap::OFFICE_USERS), ("files", snap::OFFICE_FILES)],
        }
    }
}

pub trait Provider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    fn connect(&mut self) -> Result<()>;

    /// Fetches all relevant record collections, keyed by the provider's
    /// native collection names.
    fn fetch_data(&self) -> Result<HashMap<String, Vec<Value>>>;
}
