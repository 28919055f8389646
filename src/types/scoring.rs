use serde::Serialize;

pub type Score = f64;

/// Factor mapping the native `[0, 10]` evaluation scale onto `[0, 100]`.
pub const EVALUATION_SCALE: Score = 10.0;
pub const MAX_SCORE: Score = 100.0;

/// Inclusive lower bounds, checked from `excellent` downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryThresholds {
    pub excellent: u8,
    pub good: u8,
    pub average: u8,
    pub needs_improvement: u8,
}

impl Default for CategoryThresholds {
    fn default() -> Self {
        Self {
            excellent: 85,
            good: 70,
            average: 55,
            needs_improvement: 40,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InteractionWeights {
    pub per_evaluation: Score,
    pub per_completed_task: Score,
    pub cap: Score,
}

impl Default for InteractionWeights {
    fn default() -> Self {
        Self {
            per_evaluation: 10.0,
            per_completed_task: 5.0,
            cap: MAX_SCORE,
        }
    }
}

/// Weighting rules applied by the scoring engine.
///
/// The defaults blend evaluations, task completion and interaction 40/30/30.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoringPolicy {
    pub evaluation_weight: Score,
    pub task_weight: Score,
    pub interaction_weight: Score,
    pub category_thresholds: CategoryThresholds,
    pub interaction: InteractionWeights,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            evaluation_weight: 0.4,
            task_weight: 0.3,
            interaction_weight: 0.3,
            category_thresholds: CategoryThresholds::default(),
            interaction: InteractionWeights::default(),
        }
    }
}

/// Intermediate components of one student's score. `overall` stays zero until
/// [`ScoreCard::finalize`] blends the components.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreCard {
    pub average_evaluation: Score,
    pub task_completion_rate: Score,
    pub interaction_level: Score,
    pub overall: Score,
}

impl ScoreCard {
    pub fn new(
        average_evaluation: Score,
        task_completion_rate: Score,
        interaction_level: Score,
    ) -> Self {
        Self {
            average_evaluation,
            task_completion_rate,
            interaction_level,
            overall: 0.0,
        }
    }

    pub fn finalize(mut self, policy: &ScoringPolicy) -> Self {
        let blended = self.average_evaluation * EVALUATION_SCALE * policy.evaluation_weight
            + self.task_completion_rate * policy.task_weight
            + self.interaction_level * policy.interaction_weight;
        self.overall = round_score(blended);
        self
    }

    pub fn overall_score(&self) -> u8 {
        round_score(self.overall) as u8
    }

    pub fn interaction_score(&self) -> u8 {
        round_score(self.interaction_level) as u8
    }
}

/// Rounds half away from zero and bounds the result to `[0, 100]`.
pub fn round_score(value: Score) -> Score {
    if value.is_finite() {
        value.round().clamp(0.0, MAX_SCORE)
    } else {
        0.0
    }
}
