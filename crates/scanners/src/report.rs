//! Report rendering over a finished `ScanResult`.
//!
//! Direct string building, no template engine. Findings render in result
//! order; the summary table lists every severity bucket, zeros included.

use crate::core::{ScanResult, Severity};
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Markdown,
    Json,
}

pub fn render_markdown(result: &ScanResult) -> String {
    let mut md = String::from("# SaaS Posture Scan Report\n\n");
    let _ = writeln!(
        md,
        "Generated: {}\n",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(md, "**Risk Score:** {:.1}/100\n", result.score);

    md.push_str("## Summary\n\n");
    for severity in Severity::ALL {
        let _ = writeln!(md, "- {}: {}", severity, result.count(severity));
    }
    md.push('\n');

    if result.findings.is_empty() {
        md.push_str("No findings.\n");
        return md;
    }

    md.push_str("## Findings\n\n");
    for finding in &result.findings {
        let _ = writeln!(
            md,
            "### {} {}: {}\n",
            finding.severity.emoji(),
            finding.severity,
            finding.rule_id
        );
        let _ = writeln!(md, "**Resource:** {}", finding.resource_id);
        let _ = writeln!(md, "**Category:** {}\n", finding.category);
        let _ = writeln!(md, "{}\n", finding.details);
    }

    md
}

pub fn render(result: &ScanResult, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Markdown => Ok(render_markdown(result)),
        ReportFormat::Json => result.to_json(),
    }
}

pub fn write_report(result: &ScanResult, format: ReportFormat, destination: &Path) -> Result<()> {
    let content = render(result, format)?;
    std::fs::write(destination, content)
        .with_context(|| format!("failed to write report to {}", destination.display()))?;
    Ok(())
}
