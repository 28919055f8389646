use crate::error::{Result, StandingError};
use crate::types::signal::RankingInput;
use std::path::Path;

/// Reads a JSON input document of the shape
/// `{ "cohort": [...], "evaluations": [...], "tasks": [...] }`.
pub fn read_input(path: &Path) -> Result<RankingInput> {
    if !path.exists() {
        return Err(StandingError::InputNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let input: RankingInput = serde_json::from_str(&content)
        .map_err(|e| StandingError::InputParse(format!("{}: {}", path.display(), e)))?;
    tracing::debug!(
        students = input.cohort.len(),
        evaluations = input.evaluations.len(),
        tasks = input.tasks.len(),
        "read ranking input"
    );
    Ok(input)
}
