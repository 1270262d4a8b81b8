//! Administrator accounts without a second factor.
//!
//! Checks chat users and source-control members: anyone flagged as an
//! administrator who has not enabled two-factor authentication is a
//! finding. Non-admins without MFA are deliberately not flagged.

use crate::core::{Finding, ResourceType, Scanner, Severity, Snapshot, collections, str_field, truthy};
use anyhow::Result;

pub struct PermissionsScanner;

impl PermissionsScanner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PermissionsScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner for PermissionsScanner {
    fn id(&self) -> &'static str {
        "permissions"
    }

    fn name(&self) -> &'static str {
        "Privileged Accounts Without MFA"
    }

    fn description(&self) -> &'static str {
        "Flags chat and source-control administrators lacking two-factor authentication"
    }

    fn scan(&self, snapshot: &Snapshot) -> Result<Vec<Finding>> {
        let mut findings = Vec::new();

        for user in snapshot.collection(collections::CHAT_USERS) {
            if truthy(user, "is_admin") && !truthy(user, "has_2fa") {
                let name = str_field(user, "name");
                findings.push(
                    Finding::new(
                        "CHAT_NO_MFA",
                        format!("chat_user:{name}"),
                        ResourceType::User,
                        format!("Chat admin {name} does not have 2FA enabled."),
                        Severity::High,
                    )
                    .with_category("misconfig")
                    .with_data(user.clone()),
                );
            }
        }

        for member in snapshot.collection(collections::SOURCE_CONTROL_MEMBERS) {
            if str_field(member, "role") == "admin" && !truthy(member, "mfa_enabled") {
                let login = str_field(member, "login");
                findings.push(
                    Finding::new(
                        "VCS_NO_MFA",
                        format!("vcs_user:{login}"),
                        ResourceType::User,
                        format!("Source-control admin {login} does not have 2FA enabled."),
                        Severity::High,
                    )
                    .with_category("misconfig")
                    .with_data(member.clone()),
                );
            }
        }

        Ok(findings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flags_admins_without_mfa_only() {
        let snapshot = Snapshot::new()
            .with_collection(
                collections::CHAT_USERS,
                vec![
                    json!({"name": "admin", "is_admin": true, "has_2fa": false}),
                    json!({"name": "user", "is_admin": false, "has_2fa": false}),
                ],
            )
            .with_collection(
                collections::SOURCE_CONTROL_MEMBERS,
                vec![json!({"login": "admin_vcs", "role": "admin", "mfa_enabled": false})],
            );

        let findings = PermissionsScanner::new().scan(&snapshot).unwrap();

        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].rule_id, "CHAT_NO_MFA");
        assert_eq!(findings[0].resource_id, "chat_user:admin");
        assert_eq!(findings[0].severity, Severity::High);
        assert_eq!(findings[1].rule_id, "VCS_NO_MFA");
        assert_eq!(findings[1].severity, Severity::High);
    }

    #[test]
    fn admin_with_mfa_is_clean() {
        let snapshot = Snapshot::new().with_collection(
            collections::CHAT_USERS,
            vec![json!({"name": "careful", "is_admin": true, "has_2fa": true})],
        );
        let findings = PermissionsScanner::new().scan(&snapshot).unwrap();
        assert!(findings.is_empty());
    }

    #[test]
    fn missing_fields_do_not_fault() {
        let snapshot = Snapshot::new()
            .with_collection(collections::CHAT_USERS, vec![json!({})])
            .with_collection(
                collections::SOURCE_CONTROL_MEMBERS,
                vec![json!({"login": "ghost"})],
            );
        let findings = PermissionsScanner::new().scan(&snapshot).unwrap();
        assert!(findings.is_empty());
    }
}
