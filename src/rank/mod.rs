pub mod classify;
pub mod diagnose;

use crate::aggregate::{aggregate, AggregateOptions};
use crate::score::{breakdown, score_signal};
use crate::types::report::StudentRanking;
use crate::types::scoring::{ScoreCard, ScoringPolicy};
use crate::types::signal::{
    CohortMember, EvaluationRecord, RankingInput, StudentSignal, TaskRecord,
};
use chrono::{DateTime, Utc};
use std::cmp::Reverse;
use std::time::Instant;
use tracing::info;

/// Stateless engine applying one [`ScoringPolicy`] to whole cohorts.
#[derive(Debug, Clone, Default)]
pub struct RankingEngine {
    policy: ScoringPolicy,
    options: AggregateOptions,
}

impl RankingEngine {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self {
            policy,
            options: AggregateOptions::default(),
        }
    }

    /// Restricts evaluations to those submitted at or after `since`.
    pub fn with_window(mut self, since: DateTime<Utc>) -> Self {
        self.options.since = Some(since);
        self
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    pub fn rank(&self, input: &RankingInput, computed_at: DateTime<Utc>) -> Vec<StudentRanking> {
        self.rank_parts(&input.cohort, &input.evaluations, &input.tasks, computed_at)
    }

    /// Scores every distinct cohort member and assigns ranks `1..=N` by
    /// descending overall score. Equal scores keep cohort order.
    pub fn rank_parts(
        &self,
        cohort: &[CohortMember],
        evaluations: &[EvaluationRecord],
        tasks: &[TaskRecord],
        computed_at: DateTime<Utc>,
    ) -> Vec<StudentRanking> {
        let started = Instant::now();
        let aggregation = aggregate(cohort, evaluations, tasks, &self.options);

        let mut scored: Vec<(StudentSignal<'_>, ScoreCard)> = aggregation
            .signals
            .into_iter()
            .map(|signal| {
                let card = score_signal(&signal, &self.policy);
                (signal, card)
            })
            .collect();

        // Stable sort: ties stay in cohort order.
        scored.sort_by_key(|(_, card)| Reverse(card.overall_score()));

        let rankings: Vec<StudentRanking> = scored
            .iter()
            .enumerate()
            .map(|(position, (signal, card))| self.entry(position + 1, signal, card, computed_at))
            .collect();

        info!(
            students = rankings.len(),
            excluded_evaluations = aggregation.excluded_evaluations,
            excluded_tasks = aggregation.excluded_tasks,
            duplicate_members = aggregation.duplicate_members,
            elapsed_us = started.elapsed().as_micros() as u64,
            "ranked cohort"
        );
        rankings
    }

    fn entry(
        &self,
        rank: usize,
        signal: &StudentSignal<'_>,
        card: &ScoreCard,
        computed_at: DateTime<Utc>,
    ) -> StudentRanking {
        let overall_score = card.overall_score();
        let interaction_level = card.interaction_score();
        StudentRanking {
            student_id: signal.student_id.to_string(),
            name: signal.name.map(str::to_string),
            overall_score,
            interaction_level,
            rank,
            category: classify::classify(overall_score, &self.policy.category_thresholds),
            diagnostic: diagnose::diagnose(
                overall_score,
                card.task_completion_rate,
                interaction_level,
            ),
            breakdown: breakdown(signal, card),
            computed_at,
        }
    }
}

/// Ranks a cohort with the default policy, stamped with the current time.
pub fn compute_rankings(
    cohort: &[CohortMember],
    evaluations: &[EvaluationRecord],
    tasks: &[TaskRecord],
) -> Vec<StudentRanking> {
    RankingEngine::default().rank_parts(cohort, evaluations, tasks, Utc::now())
}
