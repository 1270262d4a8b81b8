use serde_json::Value;
use std::collections::HashMap;

/// Well-known collection names providers publish into a snapshot.
pub mod collections {
    pub const CHAT_USERS: &str = "chatUsers";
    pub const CHAT_CHANNELS: &str = "chatChannels";
    pub const SOURCE_CONTROL_REPOS: &str = "sourceControlRepos";
    pub const SOURCE_CONTROL_MEMBERS: &str = "sourceControlMembers";
    pub const OFFICE_USERS: &str = "officeUsers";
    pub const OFFICE_FILES: &str = "officeFiles";
}

/// Immutable per-scan view of the providers' normalized inventory: a mapping
/// from well-known collection names to lists of loosely-typed records.
///
/// Every scanner reads the same shared snapshot; an absent collection is an
/// empty list, never an error.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    collections: HashMap<String, Vec<Value>>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, records: Vec<Value>) {
        self.collections.insert(name.into(), records);
    }

    pub fn with_collection(mut self, name: impl Into<String>, records: Vec<Value>) -> Self {
        self.insert(name, records);
        self
    }

    pub fn collection(&self, name: &str) -> &[Value] {
        self.collections.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.collections.values().all(Vec::is_empty)
    }

    pub fn record_count(&self) -> usize {
        self.collections.values().map(Vec::len).sum()
    }
}

/// Loose truthiness over record fields: a missing or malformed field reads
/// as absent, never as a scan failure.
pub fn truthy(record: &Value, field: &str) -> bool {
    match record.get(field) {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(map)) => !map.is_empty(),
        Some(Value::Null) | None => false,
    }
}

/// True only when the field is present and is the JSON boolean `false`.
/// Distinguishes "explicitly not private" from "privacy unknown".
pub fn explicit_false(record: &Value, field: &str) -> bool {
    record.get(field) == Some(&Value::Bool(false))
}

/// String field access with an empty-string fallback for display purposes.
pub fn str_field<'a>(record: &'a Value, field: &str) -> &'a str {
    record.get(field).and_then(Value::as_str).unwrap_or("")
}
