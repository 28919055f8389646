use crate::types::report::{Diagnostic, Finding};

const STRONG_OVERALL: u8 = 80;
const STRONG_COMPLETION: f64 = 80.0;
const STRONG_INTERACTION: u8 = 70;
const WEAK_OVERALL: u8 = 60;
const WEAK_COMPLETION: f64 = 60.0;
const WEAK_INTERACTION: u8 = 50;
const RISK_OVERALL: u8 = 50;
const RISK_COMPLETION: f64 = 40.0;
const RISK_INTERACTION: u8 = 30;

pub const HIGH_PERFORMANCE: Finding =
    Finding::new("strength.high_performance", "Hiệu suất học tập xuất sắc");
pub const ON_TIME_COMPLETION: Finding =
    Finding::new("strength.on_time_completion", "Hoàn thành bài tập đúng hạn");
pub const ACTIVE_PARTICIPATION: Finding =
    Finding::new("strength.active_participation", "Tích cực tham gia hoạt động");

pub const LOW_OVERALL: Finding =
    Finding::new("weakness.low_overall_score", "Điểm số tổng thể thấp");
pub const LOW_COMPLETION: Finding =
    Finding::new("weakness.low_completion_rate", "Tỷ lệ hoàn thành bài tập thấp");
pub const LOW_INTERACTION: Finding =
    Finding::new("weakness.low_interaction", "Ít tương tác trong lớp học");

pub const STUDY_SUPPORT: Finding = Finding::new(
    "recommendation.study_support",
    "Tăng cường ôn tập và tham gia các buổi hỗ trợ học tập",
);
pub const TASK_PLANNING: Finding = Finding::new(
    "recommendation.task_planning",
    "Lập kế hoạch học tập và theo dõi hạn nộp bài tập",
);
pub const ENGAGEMENT: Finding = Finding::new(
    "recommendation.engagement",
    "Tham gia thảo luận và hoạt động nhóm thường xuyên hơn",
);

pub const COURSE_FAILURE: Finding =
    Finding::new("risk.course_failure", "Nguy cơ không đạt yêu cầu khóa học");
pub const LATE_SUBMISSIONS: Finding =
    Finding::new("risk.late_submissions", "Thường xuyên nộp bài muộn");
pub const DROPOUT: Finding = Finding::new("risk.dropout", "Nguy cơ bỏ học cao");

/// Independent threshold rules; every applicable finding is reported.
///
/// `interaction_level` is the reported (rounded) level so findings agree with
/// the rendered numbers. The overall blend uses the unrounded level, so a raw
/// 29.5 reports as 30 and raises no dropout risk even though its score
/// contribution is 29.5.
pub fn diagnose(overall_score: u8, task_completion_rate: f64, interaction_level: u8) -> Diagnostic {
    let mut diagnostic = Diagnostic::default();

    if overall_score >= STRONG_OVERALL {
        diagnostic.strengths.push(HIGH_PERFORMANCE);
    }
    if task_completion_rate >= STRONG_COMPLETION {
        diagnostic.strengths.push(ON_TIME_COMPLETION);
    }
    if interaction_level >= STRONG_INTERACTION {
        diagnostic.strengths.push(ACTIVE_PARTICIPATION);
    }

    if overall_score < WEAK_OVERALL {
        diagnostic.weaknesses.push(LOW_OVERALL);
        diagnostic.recommendations.push(STUDY_SUPPORT);
    }
    if task_completion_rate < WEAK_COMPLETION {
        diagnostic.weaknesses.push(LOW_COMPLETION);
        diagnostic.recommendations.push(TASK_PLANNING);
    }
    if interaction_level < WEAK_INTERACTION {
        diagnostic.weaknesses.push(LOW_INTERACTION);
        diagnostic.recommendations.push(ENGAGEMENT);
    }

    if overall_score < RISK_OVERALL {
        diagnostic.risk_factors.push(COURSE_FAILURE);
    }
    if task_completion_rate < RISK_COMPLETION {
        diagnostic.risk_factors.push(LATE_SUBMISSIONS);
    }
    if interaction_level < RISK_INTERACTION {
        diagnostic.risk_factors.push(DROPOUT);
    }

    diagnostic
}
