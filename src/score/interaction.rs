use super::completion::completed_count;
use crate::types::scoring::InteractionWeights;
use crate::types::signal::StudentSignal;

/// Engagement proxy: visibility through evaluations, completed work and
/// course progress, capped at `weights.cap`.
pub fn interaction_level(signal: &StudentSignal<'_>, weights: &InteractionWeights) -> f64 {
    let evaluated = signal.evaluations.len() as f64 * weights.per_evaluation;
    let completed = completed_count(&signal.tasks) as f64 * weights.per_completed_task;
    let raw = evaluated + completed + signal.progress;
    if raw.is_finite() {
        raw.min(weights.cap).max(0.0)
    } else {
        0.0
    }
}
