use crate::commands::{ProviderArg, build_engine};
use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use kamae_scanners::ReportFormat;
use std::path::PathBuf;

#[derive(Args)]
pub struct ReportArgs {
    /// Provider to scan
    #[arg(long, value_enum, default_value_t = ProviderArg::All)]
    pub provider: ProviderArg,

    #[arg(long, value_enum, default_value_t = ReportFormatArg::Markdown)]
    pub format: ReportFormatArg,

    /// Report destination
    #[arg(short, long, default_value = "report.md")]
    pub output: PathBuf,

    /// Settings file
    #[arg(short, long, default_value = "config/settings.toml")]
    pub config: PathBuf,

    /// Risk-rules file (overrides the settings file)
    #[arg(long)]
    pub rules: Option<PathBuf>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum ReportFormatArg {
    Markdown,
    Json,
}

impl From<ReportFormatArg> for ReportFormat {
    fn from(arg: ReportFormatArg) -> Self {
        match arg {
            ReportFormatArg::Markdown => ReportFormat::Markdown,
            ReportFormatArg::Json => ReportFormat::Json,
        }
    }
}

pub fn execute(args: ReportArgs) -> Result<()> {
    let mut engine = build_engine(&args.config, args.rules.as_ref());
    let result = engine.run_scan(args.provider.into())?;
    engine.generate_report(&result, args.format.into(), &args.output)?;

    println!(
        "{}",
        format!("Report generated at {}", args.output.display()).green()
    );
    Ok(())
}
