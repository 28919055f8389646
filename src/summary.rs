use crate::types::report::{Category, StudentRanking};
use crate::types::signal::StudentId;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CohortSummary {
    pub total_students: usize,
    pub average_score: f64,
    /// Every category is present, zero counts included.
    pub category_counts: BTreeMap<Category, usize>,
    /// At-risk students in rank order.
    pub at_risk: Vec<StudentId>,
}

pub fn summarize(rankings: &[StudentRanking]) -> CohortSummary {
    let mut category_counts: BTreeMap<Category, usize> =
        Category::ALL.iter().map(|category| (*category, 0)).collect();
    for ranking in rankings {
        *category_counts.entry(ranking.category).or_insert(0) += 1;
    }

    let total: u64 = rankings
        .iter()
        .map(|ranking| u64::from(ranking.overall_score))
        .sum();
    let average_score = if rankings.is_empty() {
        0.0
    } else {
        total as f64 / rankings.len() as f64
    };

    let mut at_risk: Vec<&StudentRanking> =
        rankings.iter().filter(|ranking| ranking.is_at_risk()).collect();
    at_risk.sort_by_key(|ranking| ranking.rank);

    CohortSummary {
        total_students: rankings.len(),
        average_score,
        category_counts,
        at_risk: at_risk
            .into_iter()
            .map(|ranking| ranking.student_id.clone())
            .collect(),
    }
}
