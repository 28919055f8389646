use crate::types::signal::{EvaluationRecord, EvaluatorType};
use std::collections::BTreeMap;

pub const MAX_EVALUATION_SCORE: f64 = 10.0;

/// Mean evaluation score on the native `[0, 10]` scale; zero without evaluations.
pub fn average_evaluation(evaluations: &[&EvaluationRecord]) -> f64 {
    mean(evaluations.iter().map(|evaluation| evaluation_score(evaluation)))
}

/// Mean evaluation score per rater type, for rendering only.
pub fn evaluator_averages(evaluations: &[&EvaluationRecord]) -> BTreeMap<EvaluatorType, f64> {
    let mut totals: BTreeMap<EvaluatorType, (f64, usize)> = BTreeMap::new();
    for evaluation in evaluations {
        let entry = totals.entry(evaluation.evaluator_type).or_insert((0.0, 0));
        entry.0 += evaluation_score(evaluation);
        entry.1 += 1;
    }
    totals
        .into_iter()
        .map(|(evaluator_type, (total, count))| (evaluator_type, total / count as f64))
        .collect()
}

fn evaluation_score(evaluation: &EvaluationRecord) -> f64 {
    if evaluation.overall_score.is_finite() {
        evaluation.overall_score.clamp(0.0, MAX_EVALUATION_SCORE)
    } else {
        0.0
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (total, count) = values.fold((0.0, 0usize), |(total, count), value| {
        (total + value, count + 1)
    });
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}
