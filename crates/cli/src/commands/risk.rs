use crate::commands::{ProviderArg, build_engine};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Args)]
pub struct RiskScoreArgs {
    /// Provider to scan
    #[arg(long, value_enum, default_value_t = ProviderArg::All)]
    pub provider: ProviderArg,

    /// Settings file
    #[arg(short, long, default_value = "config/settings.toml")]
    pub config: PathBuf,

    /// Risk-rules file (overrides the settings file)
    #[arg(long)]
    pub rules: Option<PathBuf>,
}

pub fn execute(args: RiskScoreArgs) -> Result<()> {
    let mut engine = build_engine(&args.config, args.rules.as_ref());
    let result = engine.run_scan(args.provider.into())?;

    println!("{} {:.1}", "Current Risk Score:".bold(), result.score);
    Ok(())
}
