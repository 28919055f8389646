pub mod json;
pub mod md;

use crate::error::StandingError;
use crate::summary::CohortSummary;
use crate::types::report::StudentRanking;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

/// Renders at most `limit` entries; `None` renders the whole ranking.
pub fn render_rankings(
    rankings: &[StudentRanking],
    format: OutputFormat,
    limit: Option<usize>,
) -> Result<String, StandingError> {
    let shown = &rankings[..limit.unwrap_or(rankings.len()).min(rankings.len())];
    match format {
        OutputFormat::Json => json::to_json(shown).map_err(StandingError::Json),
        OutputFormat::Md => Ok(md::rankings_to_markdown(shown, rankings.len())),
    }
}

pub fn render_summary(
    summary: &CohortSummary,
    format: OutputFormat,
) -> Result<String, StandingError> {
    match format {
        OutputFormat::Json => json::to_json(summary).map_err(StandingError::Json),
        OutputFormat::Md => Ok(md::summary_to_markdown(summary)),
    }
}
