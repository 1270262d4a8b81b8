use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
use commands::{report::ReportArgs, risk::RiskScoreArgs, scan::ScanArgs};

#[derive(Parser)]
#[command(name = "kamae")]
#[command(about = "SaaS security posture scans and risk reports")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan SaaS providers for posture findings
    Scan(ScanArgs),

    /// Run a full scan and write a report file
    Report(ReportArgs),

    /// Run a full scan and print only the risk score
    RiskScore(RiskScoreArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scan(args) => commands::scan::execute(args),
        Commands::Report(args) => commands::report::execute(args),
        Commands::RiskScore(args) => commands::risk::execute(args),
    }
}
