use crate::commands::{ProviderArg, build_engine};
use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use kamae_scanners::core::Severity;
use kamae_scanners::{ScanResult, render_markdown};
use std::path::PathBuf;

#[derive(Args)]
pub struct ScanArgs {
    /// Provider to scan
    #[arg(long, value_enum, default_value_t = ProviderArg::All)]
    pub provider: ProviderArg,

    /// Settings file
    #[arg(short, long, default_value = "config/settings.toml")]
    pub config: PathBuf,

    /// Risk-rules file (overrides the settings file)
    #[arg(long)]
    pub rules: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
    pub format: OutputFormat,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

pub fn execute(args: ScanArgs) -> Result<()> {
    let mut engine = build_engine(&args.config, args.rules.as_ref());
    let result = engine.run_scan(args.provider.into())?;

    match args.format {
        OutputFormat::Console => print_console(&result),
        OutputFormat::Json => println!("{}", result.to_json()?),
        OutputFormat::Markdown => println!("{}", render_markdown(&result)),
    }

    Ok(())
}

fn print_console(result: &ScanResult) {
    if result.findings.is_empty() {
        println!("{}", "✅ No findings".green());
    } else {
        println!(
            "⚠️  Found {} finding(s):",
            result.total_findings().to_string().bold()
        );
        for (i, finding) in result.findings.iter().enumerate() {
            println!(
                "\n{}. {} {} {}",
                i + 1,
                finding.severity.emoji(),
                severity_label(finding.severity),
                finding.rule_id.cyan()
            );
            println!("   Resource: {}", finding.resource_id.magenta());
            println!("   {}", finding.details);
        }
    }

    println!("\n{} {:.1}/100", "Risk Score:".bold(), result.score);

    let summary: Vec<String> = Severity::ALL
        .iter()
        .map(|&sev| format!("{}: {}", sev, result.count(sev)))
        .collect();
    println!("{} {}", "Summary:".bold(), summary.join(", "));
}

fn severity_label(severity: Severity) -> colored::ColoredString {
    match severity {
        Severity::Critical => severity.as_str().red().bold(),
        Severity::High => severity.as_str().yellow().bold(),
        Severity::Medium => severity.as_str().yellow(),
        Severity::Low | Severity::Unknown => severity.as_str().blue(),
    }
}
