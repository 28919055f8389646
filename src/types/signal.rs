use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type StudentId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluatorType {
    Peer,
    Mentor,
    Leader,
    AiSystem,
}

/// One rater's assessment of one student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub evaluator_id: StudentId,
    pub evaluated_id: StudentId,
    pub evaluator_type: EvaluatorType,
    /// Conventionally in `[0, 10]`.
    pub overall_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Overdue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub assigned_to: Vec<StudentId>,
    pub status: TaskStatus,
}

impl TaskRecord {
    pub fn is_completed(&self) -> bool {
        matches!(self.status, TaskStatus::Completed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortMember {
    pub student_id: StudentId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Course completion percentage in `[0, 100]`.
    #[serde(default)]
    pub progress: f64,
}

impl CohortMember {
    pub fn new(student_id: impl Into<StudentId>, progress: f64) -> Self {
        Self {
            student_id: student_id.into(),
            name: None,
            progress,
        }
    }
}

/// Materialized input of one scoring run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankingInput {
    pub cohort: Vec<CohortMember>,
    #[serde(default)]
    pub evaluations: Vec<EvaluationRecord>,
    #[serde(default)]
    pub tasks: Vec<TaskRecord>,
}

/// Per-student bundle consumed by the scoring stage. Borrows from the run input.
#[derive(Debug, Clone)]
pub struct StudentSignal<'a> {
    pub student_id: &'a str,
    pub name: Option<&'a str>,
    pub progress: f64,
    pub evaluations: Vec<&'a EvaluationRecord>,
    pub tasks: Vec<&'a TaskRecord>,
}

impl<'a> StudentSignal<'a> {
    pub fn new(member: &'a CohortMember) -> Self {
        Self {
            student_id: &member.student_id,
            name: member.name.as_deref(),
            progress: sanitize_progress(member.progress),
            evaluations: Vec::new(),
            tasks: Vec::new(),
        }
    }
}

fn sanitize_progress(progress: f64) -> f64 {
    if progress.is_finite() {
        progress.clamp(0.0, 100.0)
    } else {
        0.0
    }
}
