//! Provider-side configuration drift.
//!
//! Public repositories without branch protection, and office super-admins
//! not enrolled in two-step verification.

use crate::core::{
    Finding, ResourceType, Scanner, Severity, Snapshot, collections, explicit_false, str_field,
    truthy,
};
use anyhow::Result;

pub struct MisconfigurationScanner;

impl MisconfigurationScanner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MisconfigurationScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner for MisconfigurationScanner {
    fn id(&self) -> &'static str {
        "misconfig"
    }

    fn name(&self) -> &'static str {
        "Provider Misconfiguration"
    }

    fn description(&self) -> &'static str {
        "Flags unprotected public repositories and super-admins without 2SV"
    }

    fn scan(&self, snapshot: &Snapshot) -> Result<Vec<Finding>> {
        let mut findings = Vec::new();

        for repo in snapshot.collection(collections::SOURCE_CONTROL_REPOS) {
            // Fires only for repos explicitly marked non-private. A record
            // with no `private` field at all stays silent here; the
            // external-access scanner still reports it as public.
            if !truthy(repo, "branch_protection") && explicit_false(repo, "private") {
                let name = str_field(repo, "name");
                findings.push(
                    Finding::new(
                        "VCS_NO_BRANCH_PROTECTION",
                        format!("vcs_repo:{name}"),
                        ResourceType::Repo,
                        format!("Repository {name} does not have branch protection enabled."),
                        Severity::Medium,
                    )
                    .with_category("misconfig")
                    .with_data(repo.clone()),
                );
            }
        }

        for user in snapshot.collection(collections::OFFICE_USERS) {
            if truthy(user, "is_super_admin") && !truthy(user, "is_enrolled_in_2sv") {
                let email = str_field(user, "email");
                findings.push(
                    Finding::new(
                        "OFFICE_ADMIN_NO_2SV",
                        format!("office_user:{email}"),
                        ResourceType::User,
                        format!("Super admin {email} is not enrolled in 2SV."),
                        Severity::High,
                    )
                    .with_category("misconfig")
                    .with_data(user.clone()),
                );
            }
        }

        Ok(findings)
    }
}
