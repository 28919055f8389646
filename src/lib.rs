//! Deterministic scoring, ranking and diagnostics for student cohorts.
//!
//! The pipeline has three stages: [`aggregate`] groups raw evaluation and
//! task records per cohort member, [`score`] turns each student's signal into
//! an overall score and interaction level, and [`rank`] classifies, orders
//! and diagnoses the whole cohort.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod input;
pub mod rank;
pub mod report;
pub mod score;
pub mod summary;
pub mod types;

pub use error::{Result, StandingError};
pub use rank::{compute_rankings, RankingEngine};
pub use summary::{summarize, CohortSummary};
pub use types::report::{Category, Diagnostic, Finding, ScoreBreakdown, StudentRanking};
pub use types::scoring::{CategoryThresholds, InteractionWeights, ScoringPolicy};
pub use types::signal::{
    CohortMember, EvaluationRecord, EvaluatorType, RankingInput, TaskRecord, TaskStatus,
};
