use crate::core::{ResourceType, Severity};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One detected security issue tied to a rule and a resource.
///
/// Scanners construct findings with their built-in default severity and
/// category; the risk engine may later override both from the configured
/// rule table. Findings are never merged or deleted once emitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Finding {
    /// Stable identifier correlated against the external rule table.
    pub rule_id: String,

    /// Human-addressable target, conventionally `"<provider>_<kind>:<name>"`.
    pub resource_id: String,

    #[serde(default)]
    pub resource_type: ResourceType,

    pub details: String,

    #[serde(default)]
    pub severity: Severity,

    #[serde(default = "default_category")]
    pub category: String,

    /// Raw record snapshot for audit/debugging.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub data: Option<Value>,

    /// Reserved for future rule metadata; nothing populates it today.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub remediation: Option<String>,
}

fn default_category() -> String {
    "general".to_string()
}

impl Finding {
    pub fn new(
        rule_id: impl Into<String>,
        resource_id: impl Into<String>,
        resource_type: ResourceType,
        details: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            resource_id: resource_id.into(),
            resource_type,
            details: details.into(),
            severity,
            category: default_category(),
            data: None,
            remediation: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_remediation(mut self, remediation: impl Into<String>) -> Self {
        self.remediation = Some(remediation.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_are_unknown_and_general() {
        let finding = Finding::new(
            "VCS_PUBLIC_REPO",
            "vcs_repo:web",
            ResourceType::Repo,
            "Public repository found: web",
            Severity::default(),
        );
        assert_eq!(finding.severity, Severity::Unknown);
        assert_eq!(finding.category, "general");
        assert!(finding.data.is_none());
        assert!(finding.remediation.is_none());
    }

    #[test]
    fn optional_fields_are_omitted_from_json() {
        let finding = Finding::new(
            "CHAT_NO_MFA",
            "chat_user:ada",
            ResourceType::User,
            "no MFA",
            Severity::High,
        );
        let json = serde_json::to_value(&finding).unwrap();
        assert!(json.get("data").is_none());
        assert!(json.get("remediation").is_none());
        assert_eq!(json["severity"], "HIGH");
        assert_eq!(json["resource_type"], "user");
    }

    #[test]
    fn data_snapshot_round_trips() {
        let finding = Finding::new(
            "VCS_SECRET_LEAK",
            "vcs_repo:keys",
            ResourceType::Repo,
            "leak",
            Severity::Critical,
        )
        .with_category("secret_scanner")
        .with_data(json!({"pattern": "AWS_ACCESS_KEY_ID"}));

        let text = serde_json::to_string(&finding).unwrap();
        let back: Finding = serde_json::from_str(&text).unwrap();
        assert_eq!(back, finding);
    }
}
