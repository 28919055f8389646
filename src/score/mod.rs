pub mod completion;
pub mod evaluation;
pub mod interaction;

use crate::types::report::ScoreBreakdown;
use crate::types::scoring::{ScoreCard, ScoringPolicy};
use crate::types::signal::StudentSignal;

/// Scores one student. Pure; safe to run for many students concurrently.
pub fn score_signal(signal: &StudentSignal<'_>, policy: &ScoringPolicy) -> ScoreCard {
    ScoreCard::new(
        evaluation::average_evaluation(&signal.evaluations),
        completion::task_completion_rate(&signal.tasks),
        interaction::interaction_level(signal, &policy.interaction),
    )
    .finalize(policy)
}

pub fn breakdown(signal: &StudentSignal<'_>, card: &ScoreCard) -> ScoreBreakdown {
    ScoreBreakdown {
        average_evaluation: card.average_evaluation,
        task_completion_rate: card.task_completion_rate,
        evaluation_count: signal.evaluations.len(),
        completed_tasks: completion::completed_count(&signal.tasks),
        total_tasks: signal.tasks.len(),
        evaluator_averages: evaluation::evaluator_averages(&signal.evaluations),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::signal::{
        CohortMember, EvaluationRecord, EvaluatorType, TaskRecord, TaskStatus,
    };

    #[test]
    fn zero_signal_scores_only_progress_interaction() {
        let member = CohortMember::new("a", 50.0);
        let signal = StudentSignal::new(&member);
        let card = score_signal(&signal, &ScoringPolicy::default());
        assert_eq!(card.average_evaluation, 0.0);
        assert_eq!(card.task_completion_rate, 0.0);
        assert_eq!(card.interaction_score(), 50);
        assert_eq!(card.overall_score(), 15);
    }

    #[test]
    fn mixed_signal_blends_all_components() {
        let member = CohortMember::new("a", 40.0);
        let mentor = EvaluationRecord {
            evaluator_id: "m".to_string(),
            evaluated_id: "a".to_string(),
            evaluator_type: EvaluatorType::Mentor,
            overall_score: 8.0,
            submitted_at: None,
        };
        let peer = EvaluationRecord {
            evaluator_type: EvaluatorType::Peer,
            overall_score: 6.0,
            ..mentor.clone()
        };
        let done = TaskRecord {
            id: Some("t1".to_string()),
            assigned_to: vec!["a".to_string()],
            status: TaskStatus::Completed,
        };
        let pending = TaskRecord {
            status: TaskStatus::Pending,
            ..done.clone()
        };
        let mut signal = StudentSignal::new(&member);
        signal.evaluations = vec![&mentor, &peer];
        signal.tasks = vec![&done, &pending];

        let card = score_signal(&signal, &ScoringPolicy::default());
        // interaction = 20 + 5 + 40 = 65; 7*10*0.4 + 50*0.3 + 65*0.3 = 28 + 15 + 19.5
        assert_eq!(card.interaction_score(), 65);
        assert_eq!(card.overall_score(), 63);

        let breakdown = breakdown(&signal, &card);
        assert_eq!(breakdown.average_evaluation, 7.0);
        assert_eq!(breakdown.evaluation_count, 2);
        assert_eq!(breakdown.completed_tasks, 1);
        assert_eq!(breakdown.total_tasks, 2);
        assert_eq!(breakdown.evaluator_averages[&EvaluatorType::Peer], 6.0);
    }
}
