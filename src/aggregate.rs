use crate::types::signal::{CohortMember, EvaluationRecord, StudentSignal, TaskRecord};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateOptions {
    /// Evaluations submitted before this instant are ignored. Undated
    /// evaluations are ignored whenever a window is set.
    pub since: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct Aggregation<'a> {
    /// One signal per distinct cohort member, in cohort order.
    pub signals: Vec<StudentSignal<'a>>,
    pub excluded_evaluations: usize,
    pub excluded_tasks: usize,
    pub duplicate_members: usize,
}

pub fn aggregate<'a>(
    cohort: &'a [CohortMember],
    evaluations: &'a [EvaluationRecord],
    tasks: &'a [TaskRecord],
    options: &AggregateOptions,
) -> Aggregation<'a> {
    let mut index: HashMap<&'a str, usize> = HashMap::with_capacity(cohort.len());
    let mut signals = Vec::with_capacity(cohort.len());
    let mut duplicate_members = 0usize;

    for member in cohort {
        if index.contains_key(member.student_id.as_str()) {
            warn!(student_id = %member.student_id, "duplicate cohort member ignored");
            duplicate_members += 1;
            continue;
        }
        index.insert(member.student_id.as_str(), signals.len());
        signals.push(StudentSignal::new(member));
    }

    let mut excluded_evaluations = 0usize;
    for evaluation in evaluations {
        if !within_window(evaluation, options.since) {
            excluded_evaluations += 1;
            continue;
        }
        match index.get(evaluation.evaluated_id.as_str()) {
            Some(&slot) => signals[slot].evaluations.push(evaluation),
            None => {
                debug!(
                    evaluated_id = %evaluation.evaluated_id,
                    "evaluation references a student outside the cohort"
                );
                excluded_evaluations += 1;
            }
        }
    }

    let mut excluded_tasks = 0usize;
    for task in tasks {
        let mut matched = false;
        for student_id in &task.assigned_to {
            let Some(&slot) = index.get(student_id.as_str()) else {
                continue;
            };
            let signal = &mut signals[slot];
            // A student listed twice on one task still counts it once.
            if signal
                .tasks
                .last()
                .is_some_and(|last| std::ptr::eq(*last, task))
            {
                continue;
            }
            signal.tasks.push(task);
            matched = true;
        }
        if !matched {
            debug!(task_id = ?task.id, "task has no assignee inside the cohort");
            excluded_tasks += 1;
        }
    }

    Aggregation {
        signals,
        excluded_evaluations,
        excluded_tasks,
        duplicate_members,
    }
}

fn within_window(evaluation: &EvaluationRecord, since: Option<DateTime<Utc>>) -> bool {
    match (since, evaluation.submitted_at) {
        (None, _) => true,
        (Some(cutoff), Some(submitted_at)) => submitted_at >= cutoff,
        (Some(_), None) => false,
    }
}

/// Start of a trailing window of `since_days` days ending at `now`. Windows
/// reaching past the representable range start at the earliest instant.
pub fn cutoff(now: DateTime<Utc>, since_days: u32) -> DateTime<Utc> {
    now.checked_sub_signed(Duration::days(i64::from(since_days.max(1))))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}
