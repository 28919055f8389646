use crate::types::signal::TaskRecord;

pub fn completed_count(tasks: &[&TaskRecord]) -> usize {
    tasks.iter().filter(|task| task.is_completed()).count()
}

/// Percentage of assigned tasks completed; zero when nothing is assigned.
pub fn task_completion_rate(tasks: &[&TaskRecord]) -> f64 {
    if tasks.is_empty() {
        return 0.0;
    }
    100.0 * completed_count(tasks) as f64 / tasks.len() as f64
}
