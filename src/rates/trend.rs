//! Trend comparison against the preceding equivalent window

use serde::{Deserialize, Serialize};

use crate::aggregate::round1;

/// Direction of change between the current and preceding window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

/// Change of a metric relative to the preceding equivalent window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    /// Absolute percentage change, rounded to one decimal
    #[serde(rename = "porcentaje")]
    pub percent: f64,
    /// Direction of the change
    #[serde(rename = "direccion")]
    pub direction: TrendDirection,
}

/// Compare a current value against the preceding window's value
///
/// Returns `None` when the previous value is absent or zero: no trend is
/// computable, and that must propagate as "no trend" to callers rather
/// than a division artifact.
#[must_use]
pub fn compare_trend(current: f64, previous: Option<f64>) -> Option<Trend> {
    let previous = previous?;
    if previous == 0.0 {
        return None;
    }

    let percent = round1((current - previous).abs() / previous.abs() * 100.0);
    let direction = if current > previous {
        TrendDirection::Up
    } else if current < previous {
        TrendDirection::Down
    } else {
        TrendDirection::Flat
    };

    Some(Trend { percent, direction })
}

/// Convenience for count metrics
#[must_use]
pub fn compare_count_trend(current: usize, previous: usize) -> Option<Trend> {
    if previous == 0 {
        None
    } else {
        compare_trend(current as f64, Some(previous as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_previous_yields_no_trend() {
        assert_eq!(compare_trend(10.0, Some(0.0)), None);
        assert_eq!(compare_trend(10.0, None), None);
        assert_eq!(compare_count_trend(4, 0), None);
    }

    #[test]
    fn equal_values_are_flat() {
        let trend = compare_trend(20.0, Some(20.0)).unwrap();
        assert_eq!(trend.percent, 0.0);
        assert_eq!(trend.direction, TrendDirection::Flat);
    }

    #[test]
    fn increase_is_up() {
        let trend = compare_trend(30.0, Some(20.0)).unwrap();
        assert_eq!(trend.percent, 50.0);
        assert_eq!(trend.direction, TrendDirection::Up);
    }

    #[test]
    fn decrease_is_down_with_absolute_percent() {
        let trend = compare_trend(15.0, Some(20.0)).unwrap();
        assert_eq!(trend.percent, 25.0);
        assert_eq!(trend.direction, TrendDirection::Down);
    }
}
