//! Resources exposed outside the organization.
//!
//! Three angles on the same question: guest accounts inside the chat
//! workspace, repositories visible to the world, and office documents with
//! an "anyone" share grant.

use crate::core::{Finding, ResourceType, Scanner, Severity, Snapshot, collections, str_field, truthy};
use anyhow::Result;
use serde_json::Value;

pub struct ExternalAccessScanner;

impl ExternalAccessScanner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ExternalAccessScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner for ExternalAccessScanner {
    fn id(&self) -> &'static str {
        "external-access"
    }

    fn name(&self) -> &'static str {
        "External Access Exposure"
    }

    fn description(&self) -> &'static str {
        "Flags guest chat accounts, public repositories, and publicly shared documents"
    }

    fn scan(&self, snapshot: &Snapshot) -> Result<Vec<Finding>> {
        let mut findings = Vec::new();

        for user in snapshot.collection(collections::CHAT_USERS) {
            if truthy(user, "is_stranger")
                || truthy(user, "is_restricted")
                || truthy(user, "is_ultra_restricted")
            {
                let name = str_field(user, "name");
                findings.push(
                    Finding::new(
                        "CHAT_EXT_GUEST",
                        format!("chat_user:{name}"),
                        ResourceType::User,
                        format!("External guest {name} found in chat workspace."),
                        Severity::Medium,
                    )
                    .with_category("external_access")
                    .with_data(user.clone()),
                );
            }
        }

        for repo in snapshot.collection(collections::SOURCE_CONTROL_REPOS) {
            if !truthy(repo, "private") {
                let name = str_field(repo, "name");
                findings.push(
                    Finding::new(
                        "VCS_PUBLIC_REPO",
                        format!("vcs_repo:{name}"),
                        ResourceType::Repo,
                        format!("Public repository found: {name}"),
                        Severity::High,
                    )
                    .with_category("external_access")
                    .with_data(repo.clone()),
                );
            }
        }

        for file in snapshot.collection(collections::OFFICE_FILES) {
            let permissions = file
                .get("permissions")
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            for permission in permissions {
                if str_field(permission, "type") == "anyone" {
                    let name = str_field(file, "name");
                    findings.push(
                        Finding::new(
                            "OFFICE_PUBLIC_DOC",
                            format!("office_file:{name}"),
                            ResourceType::File,
                            format!("File '{name}' is publicly shared."),
                            Severity::High,
                        )
                        .with_category("external_access")
                        .with_data(file.clone()),
                    );
                }
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
    fn flags_guests_public_repos_and_shared_files() {
        let snapshot = Snapshot::new()
            .with_collection(
                collections::CHAT_USERS,
                vec![
                    json!({"name": "contractor", "is_restricted": true}),
                    json!({"name": "staff", "is_admin": true}),
                ],
            )
            .with_collection(
                collections::SOURCE_CONTROL_REPOS,
                vec![
                    json!({"name": "website", "private": false}),
                    json!({"name": "internal", "private": true}),
                ],
            )
            .with_collection(
                collections::OFFICE_FILES,
                vec![json!({
                    "name": "roadmap.doc",
                    "permissions": [{"type": "anyone"}, {"type": "domain"}],
                })],
            );

        let findings = ExternalAccessScanner::new().scan(&snapshot).unwrap();

        let rule_ids: Vec<&str> = findings.iter().map(|f| f.rule_id.as_str()).collect();
        assert_eq!(
            rule_ids,
            vec!["CHAT_EXT_GUEST", "VCS_PUBLIC_REPO", "OFFICE_PUBLIC_DOC"]
        );
        assert_eq!(findings[0].severity, Severity::Medium);
        assert_eq!(findings[1].severity, Severity::High);
        assert_eq!(findings[2].category, "external_access");
    }

    #[test]
    fn repo_with_no_private_field_reads_as_public() {
        let snapshot = Snapshot::new().with_collection(
            collections::SOURCE_CONTROL_REPOS,
            vec![json!({"name": "legacy"})],
        );
        let findings = ExternalAccessScanner::new().scan(&snapshot).unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].rule_id, "VCS_PUBLIC_REPO");
    }

    #[test]
    fn one_finding_per_anyone_grant() {
        let snapshot = Snapshot::new().with_collection(
            collections::OFFICE_FILES,
            vec![json!({
                "name": "leaky.doc",
                "permissions": [{"type": "anyone"}, {"type": "anyone"}],
            })],
        );
        let findings = ExternalAccessScanner::new().scan(&snapshot).unwrap();
        assert_eq!(findings.len(), 2);
    }

    #[test]
    fn malformed_permissions_are_ignored() {
        let snapshot = Snapshot::new().with_collection(
            collections::OFFICE_FILES,
            vec![
                json!({"name": "odd.doc", "permissions": "not-a-list"}),
                json!({"name": "bare.doc"}),
            ],
        );
        let findings = ExternalAccessScanner::new().scan(&snapshot).unwrap();
        assert!(findings.is_empty());
    }
}
