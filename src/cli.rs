use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cohort-standing",
    version,
    about = "Student cohort scoring, ranking and diagnostics"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score and rank every student in a cohort input file
    Rank(RankCommand),
    /// Print category counts and at-risk students for a cohort input file
    Summary(SummaryCommand),
    /// Print the resolved scoring policy
    Policy(PolicyCommand),
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct RankCommand {
    pub input: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Show only the top N students
    #[arg(long)]
    pub limit: Option<usize>,
    /// Only count evaluations submitted in the last N days
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub since_days: Option<u32>,
    /// Directory holding cohort-standing.toml
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
    /// Exit with code 1 when any student is at risk
    #[arg(long)]
    pub fail_on_risk: bool,
}

#[derive(Args)]
pub struct SummaryCommand {
    pub input: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub since_days: Option<u32>,
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Args)]
pub struct PolicyCommand {
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}
