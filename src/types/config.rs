use crate::error::StandingError;
use crate::types::scoring::{CategoryThresholds, InteractionWeights, ScoringPolicy};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StandingConfig {
    pub policy: Option<PolicyConfig>,
    pub window: Option<WindowConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    pub weights: Option<HashMap<String, f64>>,
    pub thresholds: Option<HashMap<String, u8>>,
    pub interaction: Option<InteractionConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InteractionConfig {
    pub per_evaluation: Option<f64>,
    pub per_completed_task: Option<f64>,
    pub cap: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindowConfig {
    pub since_days: Option<u32>,
}

const ALLOWED_WEIGHT_KEYS: [&str; 3] = ["evaluation", "task", "interaction"];
const ALLOWED_THRESHOLD_KEYS: [&str; 4] = ["excellent", "good", "average", "needs_improvement"];

impl StandingConfig {
    pub fn default_weights() -> [f64; 3] {
        let policy = ScoringPolicy::default();
        [
            policy.evaluation_weight,
            policy.task_weight,
            policy.interaction_weight,
        ]
    }

    pub fn weights(&self) -> [f64; 3] {
        let defaults = Self::default_weights();
        match self.policy.as_ref().and_then(|policy| policy.weights.as_ref()) {
            Some(weights) => [
                *weights.get("evaluation").unwrap_or(&defaults[0]),
                *weights.get("task").unwrap_or(&defaults[1]),
                *weights.get("interaction").unwrap_or(&defaults[2]),
            ],
            None => defaults,
        }
    }

    pub fn thresholds(&self) -> CategoryThresholds {
        let defaults = CategoryThresholds::default();
        match self
            .policy
            .as_ref()
            .and_then(|policy| policy.thresholds.as_ref())
        {
            Some(thresholds) => CategoryThresholds {
                excellent: *thresholds.get("excellent").unwrap_or(&defaults.excellent),
                good: *thresholds.get("good").unwrap_or(&defaults.good),
                average: *thresholds.get("average").unwrap_or(&defaults.average),
                needs_improvement: *thresholds
                    .get("needs_improvement")
                    .unwrap_or(&defaults.needs_improvement),
            },
            None => defaults,
        }
    }

    pub fn interaction_weights(&self) -> InteractionWeights {
        let defaults = InteractionWeights::default();
        match self
            .policy
            .as_ref()
            .and_then(|policy| policy.interaction.as_ref())
        {
            Some(interaction) => InteractionWeights {
                per_evaluation: interaction.per_evaluation.unwrap_or(defaults.per_evaluation),
                per_completed_task: interaction
                    .per_completed_task
                    .unwrap_or(defaults.per_completed_task),
                cap: interaction.cap.unwrap_or(defaults.cap),
            },
            None => defaults,
        }
    }

    pub fn scoring_policy(&self) -> ScoringPolicy {
        let [evaluation_weight, task_weight, interaction_weight] = self.weights();
        ScoringPolicy {
            evaluation_weight,
            task_weight,
            interaction_weight,
            category_thresholds: self.thresholds(),
            interaction: self.interaction_weights(),
        }
    }

    pub fn since_days(&self) -> Option<u32> {
        self.window.as_ref().and_then(|window| window.since_days)
    }

    pub fn validate(&self) -> Result<(), StandingError> {
        if let Some(policy) = &self.policy {
            if let Some(weights) = &policy.weights {
                reject_unknown_keys("policy.weights", weights.keys(), &ALLOWED_WEIGHT_KEYS)?;
            }
            if let Some(thresholds) = &policy.thresholds {
                reject_unknown_keys(
                    "policy.thresholds",
                    thresholds.keys(),
                    &ALLOWED_THRESHOLD_KEYS,
                )?;
            }
        }

        let weights = self.weights();
        if weights
            .iter()
            .any(|weight| !weight.is_finite() || !(0.0..=1.0).contains(weight))
        {
            return Err(StandingError::ConfigParse(
                "policy.weights values must be between 0.0 and 1.0".to_string(),
            ));
        }
        let weight_sum: f64 = weights.iter().sum();
        if (weight_sum - 1.0).abs() > 0.001 {
            return Err(StandingError::ConfigParse(format!(
                "policy.weights must sum to 1.0 (found {:.3})",
                weight_sum
            )));
        }

        let thresholds = self.thresholds();
        let ordered = [
            ("excellent", thresholds.excellent),
            ("good", thresholds.good),
            ("average", thresholds.average),
            ("needs_improvement", thresholds.needs_improvement),
        ];
        for (key, value) in ordered {
            if value > 100 {
                return Err(StandingError::ConfigParse(format!(
                    "policy.thresholds.{key} must be between 0 and 100"
                )));
            }
        }
        for pair in ordered.windows(2) {
            let (upper_key, upper) = pair[0];
            let (lower_key, lower) = pair[1];
            if upper <= lower {
                return Err(StandingError::ConfigParse(format!(
                    "policy.thresholds.{upper_key} ({upper}) must be greater than policy.thresholds.{lower_key} ({lower})"
                )));
            }
        }

        let interaction = self.interaction_weights();
        for (key, value) in [
            ("per_evaluation", interaction.per_evaluation),
            ("per_completed_task", interaction.per_completed_task),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(StandingError::ConfigParse(format!(
                    "policy.interaction.{key} must be a non-negative number"
                )));
            }
        }
        if !interaction.cap.is_finite() || interaction.cap <= 0.0 || interaction.cap > 100.0 {
            return Err(StandingError::ConfigParse(
                "policy.interaction.cap must be greater than 0 and at most 100".to_string(),
            ));
        }

        if self.since_days() == Some(0) {
            return Err(StandingError::ConfigParse(
                "window.since_days must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

fn reject_unknown_keys<'a>(
    section: &str,
    keys: impl Iterator<Item = &'a String>,
    allowed: &[&str],
) -> Result<(), StandingError> {
    let mut unknown = keys
        .filter(|key| !allowed.contains(&key.as_str()))
        .cloned()
        .collect::<Vec<_>>();
    if unknown.is_empty() {
        return Ok(());
    }
    unknown.sort();
    Err(StandingError::ConfigParse(format!(
        "{section} contains unknown key(s): {}",
        unknown.join(", ")
    )))
}
