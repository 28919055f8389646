mod cli;
mod telemetry;

use chrono::Utc;
use clap::Parser;
use cohort_standing::aggregate::cutoff;
use cohort_standing::types::config::StandingConfig;
use cohort_standing::{config, input, report, summarize, RankingEngine, StandingError};
use std::path::Path;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const AT_RISK: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn build_engine(
    loaded: Option<&StandingConfig>,
    since_days: Option<u32>,
) -> RankingEngine {
    let policy = loaded
        .map(StandingConfig::scoring_policy)
        .unwrap_or_default();
    let engine = RankingEngine::new(policy);
    match since_days.or_else(|| loaded.and_then(StandingConfig::since_days)) {
        Some(days) => engine.with_window(cutoff(Utc::now(), days)),
        None => engine,
    }
}

fn log_default_policy(loaded: Option<&StandingConfig>, root: &Path) {
    if loaded.is_none() {
        tracing::info!(
            root = %root.display(),
            "no cohort-standing.toml found, using default scoring policy"
        );
    }
}

fn run() -> Result<i32, StandingError> {
    let cli = cli::Cli::parse();
    telemetry::init(cli.verbose, cli.quiet)?;

    match cli.command {
        cli::Commands::Rank(cmd) => {
            let loaded = config::load_config(&cmd.root)?;
            log_default_policy(loaded.as_ref(), &cmd.root);
            let ranking_input = input::read_input(&cmd.input)?;
            let engine = build_engine(loaded.as_ref(), cmd.since_days);

            let rankings = engine.rank(&ranking_input, Utc::now());
            let rendered =
                report::render_rankings(&rankings, output_format(&cmd.format), cmd.limit)?;
            println!("{rendered}");

            let at_risk = rankings.iter().filter(|ranking| ranking.is_at_risk()).count();
            if at_risk > 0 {
                tracing::warn!(at_risk, "students classified at risk");
            }
            if cmd.fail_on_risk && at_risk > 0 {
                Ok(exit_code::AT_RISK)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Summary(cmd) => {
            let loaded = config::load_config(&cmd.root)?;
            log_default_policy(loaded.as_ref(), &cmd.root);
            let ranking_input = input::read_input(&cmd.input)?;
            let engine = build_engine(loaded.as_ref(), cmd.since_days);

            let rankings = engine.rank(&ranking_input, Utc::now());
            let summary = summarize(&rankings);
            println!(
                "{}",
                report::render_summary(&summary, output_format(&cmd.format))?
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Policy(cmd) => {
            let loaded = config::load_config(&cmd.root)?;
            log_default_policy(loaded.as_ref(), &cmd.root);
            let engine = build_engine(loaded.as_ref(), None);
            println!("{}", report::json::to_json(engine.policy())?);
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
