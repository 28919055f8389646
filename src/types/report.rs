use super::signal::{EvaluatorType, StudentId};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Excellent,
    Good,
    Average,
    NeedsImprovement,
    AtRisk,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Excellent,
        Category::Good,
        Category::Average,
        Category::NeedsImprovement,
        Category::AtRisk,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Excellent => "excellent",
            Category::Good => "good",
            Category::Average => "average",
            Category::NeedsImprovement => "needs_improvement",
            Category::AtRisk => "at_risk",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labelled diagnostic finding. `code` is stable, `label` is the display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub code: &'static str,
    pub label: &'static str,
}

impl Finding {
    pub const fn new(code: &'static str, label: &'static str) -> Self {
        Self { code, label }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub strengths: Vec<Finding>,
    pub weaknesses: Vec<Finding>,
    pub recommendations: Vec<Finding>,
    pub risk_factors: Vec<Finding>,
}

impl Diagnostic {
    pub fn has_code(&self, code: &str) -> bool {
        self.strengths
            .iter()
            .chain(&self.weaknesses)
            .chain(&self.recommendations)
            .chain(&self.risk_factors)
            .any(|finding| finding.code == code)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Mean evaluation score on the native `[0, 10]` scale.
    pub average_evaluation: f64,
    pub task_completion_rate: f64,
    pub evaluation_count: usize,
    pub completed_tasks: usize,
    pub total_tasks: usize,
    pub evaluator_averages: BTreeMap<EvaluatorType, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRanking {
    pub student_id: StudentId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub overall_score: u8,
    pub interaction_level: u8,
    pub rank: usize,
    pub category: Category,
    pub diagnostic: Diagnostic,
    pub breakdown: ScoreBreakdown,
    pub computed_at: DateTime<Utc>,
}

impl StudentRanking {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.student_id)
    }

    pub fn is_at_risk(&self) -> bool {
        matches!(self.category, Category::AtRisk)
    }
}
