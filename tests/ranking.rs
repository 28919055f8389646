// Library-level properties of the ranking engine.

use chrono::{DateTime, TimeZone, Utc};
use cohort_standing::rank::diagnose;
use cohort_standing::{
    compute_rankings, Category, CohortMember, EvaluationRecord, EvaluatorType, RankingEngine,
    StudentRanking, TaskRecord, TaskStatus,
};

fn at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 8, 30, 0).unwrap()
}

fn evaluation(evaluated_id: &str, evaluator_type: EvaluatorType, score: f64) -> EvaluationRecord {
    EvaluationRecord {
        evaluator_id: format!("{evaluator_type:?}-rater"),
        evaluated_id: evaluated_id.to_string(),
        evaluator_type,
        overall_score: score,
        submitted_at: None,
    }
}

fn task(assigned_to: &[&str], status: TaskStatus) -> TaskRecord {
    TaskRecord {
        id: None,
        assigned_to: assigned_to.iter().map(|id| id.to_string()).collect(),
        status,
    }
}

/// A mixed cohort with ties, extremes and malformed records.
fn fixture() -> (Vec<CohortMember>, Vec<EvaluationRecord>, Vec<TaskRecord>) {
    let cohort = (0..12)
        .map(|index| CohortMember::new(format!("s{index}"), f64::from(index * 9)))
        .collect::<Vec<_>>();

    let mut evaluations = Vec::new();
    for index in 0..12 {
        let id = format!("s{index}");
        for round in 0..(index % 4) {
            let evaluator_type = match round {
                0 => EvaluatorType::Peer,
                1 => EvaluatorType::Mentor,
                _ => EvaluatorType::Leader,
            };
            evaluations.push(evaluation(&id, evaluator_type, f64::from((index + round) % 11)));
        }
    }
    evaluations.push(evaluation("outsider", EvaluatorType::AiSystem, 10.0));
    evaluations.push(evaluation("s5", EvaluatorType::AiSystem, 1_000.0));

    let tasks = vec![
        task(&["s1", "s2", "s3"], TaskStatus::Completed),
        task(&["s2", "s4"], TaskStatus::Overdue),
        task(&["s4", "s6", "s8"], TaskStatus::Completed),
        task(&["s6"], TaskStatus::InProgress),
        task(&["s9", "s10", "s11"], TaskStatus::Completed),
        task(&["s11"], TaskStatus::Pending),
        task(&[], TaskStatus::Completed),
    ];

    (cohort, evaluations, tasks)
}

fn rank_fixture() -> Vec<StudentRanking> {
    let (cohort, evaluations, tasks) = fixture();
    RankingEngine::default().rank_parts(&cohort, &evaluations, &tasks, at())
}

#[test]
fn repeated_runs_are_byte_identical() {
    let first = serde_json::to_string(&rank_fixture()).expect("ranking should serialize");
    let second = serde_json::to_string(&rank_fixture()).expect("ranking should serialize");
    assert_eq!(first, second);
}

#[test]
fn ranks_form_a_permutation() {
    let rankings = rank_fixture();
    let mut ranks: Vec<usize> = rankings.iter().map(|ranking| ranking.rank).collect();
    ranks.sort_unstable();
    assert_eq!(ranks, (1..=rankings.len()).collect::<Vec<_>>());
    assert_eq!(rankings.len(), 12);
}

#[test]
fn higher_scores_always_rank_better() {
    let rankings = rank_fixture();
    for a in &rankings {
        for b in &rankings {
            if a.overall_score > b.overall_score {
                assert!(a.rank < b.rank, "{} should outrank {}", a.student_id, b.student_id);
            }
        }
    }
}

#[test]
fn scores_stay_bounded_for_extreme_inputs() {
    let cohort = vec![
        CohortMember::new("flood", 1e12),
        CohortMember::new("negative", -50.0),
        CohortMember::new("nan", f64::NAN),
    ];
    let mut evaluations: Vec<EvaluationRecord> = (0..10_000)
        .map(|_| evaluation("flood", EvaluatorType::Peer, 1e9))
        .collect();
    evaluations.push(evaluation("negative", EvaluatorType::Mentor, -1e9));
    evaluations.push(evaluation("nan", EvaluatorType::Leader, f64::NAN));
    let tasks: Vec<TaskRecord> = (0..5_000)
        .map(|_| task(&["flood"], TaskStatus::Completed))
        .collect();

    let rankings = RankingEngine::default().rank_parts(&cohort, &evaluations, &tasks, at());
    for ranking in &rankings {
        assert!(ranking.overall_score <= 100);
        assert!(ranking.interaction_level <= 100);
        assert!(ranking.breakdown.average_evaluation.is_finite());
        assert!((0.0..=10.0).contains(&ranking.breakdown.average_evaluation));
    }
    assert_eq!(rankings[0].student_id, "flood");
    assert_eq!(rankings[0].overall_score, 100);
}

#[test]
fn student_without_records_scores_from_progress_only() {
    let cohort = vec![CohortMember::new("quiet", 40.0)];
    let rankings = compute_rankings(&cohort, &[], &[]);
    assert_eq!(rankings.len(), 1);
    assert_eq!(rankings[0].interaction_level, 40);
    assert_eq!(rankings[0].overall_score, 12);
    assert_eq!(rankings[0].breakdown.task_completion_rate, 0.0);
    assert_eq!(rankings[0].breakdown.average_evaluation, 0.0);
}

#[test]
fn category_boundaries_are_exact() {
    // With weight on interaction only, overall score equals progress.
    let policy = cohort_standing::ScoringPolicy {
        evaluation_weight: 0.0,
        task_weight: 0.0,
        interaction_weight: 1.0,
        ..Default::default()
    };
    let engine = RankingEngine::new(policy);
    let cases = [
        (85.0, Category::Excellent),
        (84.0, Category::Good),
        (70.0, Category::Good),
        (69.0, Category::Average),
        (55.0, Category::Average),
        (54.0, Category::NeedsImprovement),
        (40.0, Category::NeedsImprovement),
        (39.0, Category::AtRisk),
    ];
    for (progress, expected) in cases {
        let cohort = vec![CohortMember::new("edge", progress)];
        let rankings = engine.rank_parts(&cohort, &[], &[], at());
        assert_eq!(rankings[0].overall_score as f64, progress);
        assert_eq!(rankings[0].category, expected, "score {progress}");
    }
}

#[test]
fn single_student_with_no_data_is_at_risk() {
    let cohort = vec![CohortMember::new("S1", 0.0)];
    let rankings = RankingEngine::default().rank_parts(&cohort, &[], &[], at());

    let only = &rankings[0];
    assert_eq!(only.overall_score, 0);
    assert_eq!(only.interaction_level, 0);
    assert_eq!(only.category, Category::AtRisk);
    assert_eq!(only.rank, 1);
    assert_eq!(
        only.diagnostic.risk_factors,
        vec![
            diagnose::COURSE_FAILURE,
            diagnose::LATE_SUBMISSIONS,
            diagnose::DROPOUT
        ]
    );
}

#[test]
fn perfect_student_scores_one_hundred() {
    let cohort = vec![CohortMember::new("ace", 100.0)];
    let evaluations = vec![
        evaluation("ace", EvaluatorType::Peer, 10.0),
        evaluation("ace", EvaluatorType::Mentor, 10.0),
        evaluation("ace", EvaluatorType::Leader, 10.0),
    ];
    let tasks = vec![
        task(&["ace"], TaskStatus::Completed),
        task(&["ace"], TaskStatus::Completed),
    ];

    let rankings = RankingEngine::default().rank_parts(&cohort, &evaluations, &tasks, at());
    let ace = &rankings[0];
    assert_eq!(ace.interaction_level, 100);
    assert_eq!(ace.overall_score, 100);
    assert_eq!(ace.category, Category::Excellent);
    assert_eq!(ace.breakdown.task_completion_rate, 100.0);
    assert_eq!(ace.diagnostic.strengths.len(), 3);
    assert!(ace.diagnostic.risk_factors.is_empty());
}

#[test]
fn ties_keep_cohort_order_across_runs() {
    let cohort = vec![
        CohortMember::new("zeta", 30.0),
        CohortMember::new("alpha", 30.0),
        CohortMember::new("mid", 30.0),
    ];
    for _ in 0..5 {
        let rankings = RankingEngine::default().rank_parts(&cohort, &[], &[], at());
        let order: Vec<&str> = rankings
            .iter()
            .map(|ranking| ranking.student_id.as_str())
            .collect();
        assert_eq!(order, vec!["zeta", "alpha", "mid"]);
        assert_eq!(
            rankings.iter().map(|ranking| ranking.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }
}

#[test]
fn outsider_evaluations_do_not_leak_into_the_cohort() {
    let rankings = rank_fixture();
    let total_evaluations: usize = rankings
        .iter()
        .map(|ranking| ranking.breakdown.evaluation_count)
        .sum();
    let (_, evaluations, _) = fixture();
    assert_eq!(total_evaluations, evaluations.len() - 1);
}
