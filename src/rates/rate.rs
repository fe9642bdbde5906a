//! Rate and target evaluation

use serde::{Deserialize, Serialize};

use crate::aggregate::percentage;

/// Which direction of a rate is clinically desirable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateDirection {
    /// A higher rate is better (e.g. skin-to-skin contact coverage)
    HigherIsBetter,
    /// A lower rate is better (e.g. cesarean rate, episiotomy rate)
    LowerIsBetter,
}

/// Relative distance from the target below which a missed rate counts as a
/// near miss rather than a hard miss
const NEAR_MISS_RELATIVE_DISTANCE: f64 = 0.20;

/// An evaluated rate with its target compliance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateEvaluation {
    /// Percentage in [0, 100], rounded to one decimal; 0 for an empty cohort
    #[serde(rename = "tasa")]
    pub rate: f64,
    /// Whether the target is met; `None` when no target is configured
    #[serde(rename = "cumplida")]
    pub met: Option<bool>,
    /// Missed but within 20% relative distance of the target. Presentation
    /// severity hint only; always `false` when met or untargeted
    #[serde(rename = "casi_cumplida")]
    pub near_miss: bool,
    /// The configured target, echoed for display
    #[serde(rename = "meta")]
    pub target: Option<f64>,
    /// Direction of good for this metric
    #[serde(rename = "direccion_buena")]
    pub direction: RateDirection,
}

/// Evaluate a raw count/cohort pair against a configured target
///
/// `rate` is 0 (never NaN) for an empty cohort. A missing target is not an
/// error; compliance is simply unknown.
#[must_use]
pub fn evaluate_rate(
    count: usize,
    cohort_size: usize,
    target: Option<f64>,
    direction: RateDirection,
) -> RateEvaluation {
    let rate = percentage(count, cohort_size);

    let met = target.map(|target| match direction {
        RateDirection::HigherIsBetter => rate >= target,
        RateDirection::LowerIsBetter => rate <= target,
    });

    let near_miss = match (met, target) {
        (Some(false), Some(target)) => {
            (rate - target).abs() < NEAR_MISS_RELATIVE_DISTANCE * target.abs()
        }
        _ => false,
    };

    RateEvaluation {
        rate,
        met,
        near_miss,
        target,
        direction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cohort_yields_zero_not_nan() {
        let eval = evaluate_rate(5, 0, Some(50.0), RateDirection::HigherIsBetter);
        assert_eq!(eval.rate, 0.0);
        assert!(eval.rate.is_finite());
    }

    #[test]
    fn higher_is_better_compliance() {
        let eval = evaluate_rate(9, 10, Some(85.0), RateDirection::HigherIsBetter);
        assert_eq!(eval.rate, 90.0);
        assert_eq!(eval.met, Some(true));
        assert!(!eval.near_miss);
    }

    #[test]
    fn lower_is_better_compliance() {
        let eval = evaluate_rate(2, 10, Some(25.0), RateDirection::LowerIsBetter);
        assert_eq!(eval.rate, 20.0);
        assert_eq!(eval.met, Some(true));
    }

    #[test]
    fn near_miss_within_relative_distance() {
        // skin-to-skin: target 90, actual 76.0 -> distance 14 < 18
        let eval = evaluate_rate(76, 100, Some(90.0), RateDirection::HigherIsBetter);
        assert_eq!(eval.rate, 76.0);
        assert_eq!(eval.met, Some(false));
        assert!(eval.near_miss);
    }

    #[test]
    fn hard_miss_beyond_relative_distance() {
        let eval = evaluate_rate(50, 100, Some(90.0), RateDirection::HigherIsBetter);
        assert_eq!(eval.met, Some(false));
        assert!(!eval.near_miss);
    }

    #[test]
    fn exactly_twenty_percent_distance_is_a_hard_miss() {
        let eval = evaluate_rate(72, 100, Some(90.0), RateDirection::HigherIsBetter);
        assert_eq!(eval.rate, 72.0);
        assert!(!eval.near_miss);
    }

    #[test]
    fn missing_target_reports_unknown_compliance() {
        let eval = evaluate_rate(3, 10, None, RateDirection::LowerIsBetter);
        assert_eq!(eval.rate, 30.0);
        assert_eq!(eval.met, None);
        assert!(!eval.near_miss);
    }
}
