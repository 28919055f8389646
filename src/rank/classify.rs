use crate::types::report::Category;
use crate::types::scoring::CategoryThresholds;

pub fn classify(overall_score: u8, thresholds: &CategoryThresholds) -> Category {
    if overall_score >= thresholds.excellent {
        Category::Excellent
    } else if overall_score >= thresholds.good {
        Category::Good
    } else if overall_score >= thresholds.average {
        Category::Average
    } else if overall_score >= thresholds.needs_improvement {
        Category::NeedsImprovement
    } else {
        Category::AtRisk
    }
}
