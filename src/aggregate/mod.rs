//! Cohort aggregation
//!
//! Groups records by one or two dimensions and produces counts with
//! cohort-safe percentages. Results are dense: every declared dimension
//! value appears in the output even with count 0, so the regulatory table
//! shape is always fully populated. Aggregating an empty record set is not
//! an error and yields the fully zero-populated shape.

pub mod dimension;
pub mod filters;

use itertools::Itertools;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use dimension::Dimension;
pub use filters::{
    CohortFilter, births_in_previous_window, births_in_window, complications_in_window,
    episodes_in_window, newborns_of_births,
};

/// Round a percentage to one decimal place
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Percentage of a count over a cohort, 0 for an empty cohort
#[must_use]
pub fn percentage(count: usize, cohort: usize) -> f64 {
    if cohort == 0 {
        0.0
    } else {
        round1(count as f64 / cohort as f64 * 100.0)
    }
}

/// One group of an aggregation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupCount {
    /// Wire label of the group
    pub key: String,
    /// Records in the group
    pub count: usize,
    /// Share of the classified cohort, rounded to one decimal
    pub percentage_of_total: f64,
}

/// Result of a single-dimension aggregation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationResult {
    /// Classified records; denominator of every group percentage
    pub total: usize,
    /// Records whose grouped value was missing; excluded from `groups`
    pub unclassified: usize,
    /// One entry per declared dimension value, in declaration order
    pub groups: Vec<GroupCount>,
}

impl AggregationResult {
    /// Group by wire label
    #[must_use]
    pub fn group(&self, key: &str) -> Option<&GroupCount> {
        self.groups.iter().find(|g| g.key == key)
    }

    /// Count of a group by wire label, 0 when the label is undeclared
    #[must_use]
    pub fn count_of(&self, key: &str) -> usize {
        self.group(key).map_or(0, |g| g.count)
    }

    /// Total including unclassified records (the independently-kept total)
    #[must_use]
    pub const fn total_with_unclassified(&self) -> usize {
        self.total + self.unclassified
    }
}

/// One row of a two-dimension aggregation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestedGroup {
    /// Wire label of the outer dimension value
    pub key: String,
    /// Records classified on the outer dimension for this row
    pub total: usize,
    /// Dense cells over the inner dimension, percentages over the grand
    /// total of fully-classified pairs
    pub groups: Vec<GroupCount>,
}

/// Aggregate already-classified values over one dimension
///
/// `None` items count as unclassified. Output is dense over
/// `D::declared()` in declaration order.
pub fn aggregate_by_dimension<D, I>(items: I) -> AggregationResult
where
    D: Dimension,
    I: IntoIterator<Item = Option<D>>,
{
    let mut unclassified = 0usize;
    let counts: FxHashMap<D, usize> = items
        .into_iter()
        .filter_map(|item| {
            if item.is_none() {
                unclassified += 1;
            }
            item
        })
        .counts()
        .into_iter()
        .collect();

    let total: usize = counts.values().sum();
    let groups = D::declared()
        .iter()
        .map(|value| {
            let count = counts.get(value).copied().unwrap_or(0);
            GroupCount {
                key: value.label().to_string(),
                count,
                percentage_of_total: percentage(count, total),
            }
        })
        .collect();

    AggregationResult {
        total,
        unclassified,
        groups,
    }
}

/// Classify raw values through a band classifier and aggregate them
///
/// A value outside the classifier's declared domain propagates as a
/// validation error; it is never clamped or silently dropped.
pub fn aggregate_banded<D, I, F>(values: I, classify: F) -> Result<AggregationResult>
where
    D: Dimension,
    I: IntoIterator<Item = Option<i32>>,
    F: Fn(i32) -> Result<D>,
{
    let classified: Vec<Option<D>> = values
        .into_iter()
        .map(|value| value.map(&classify).transpose())
        .collect::<Result<_>>()?;

    Ok(aggregate_by_dimension(classified))
}

/// Aggregate classified pairs over two dimensions in declaration order
///
/// A pair lands in a cell only when both dimensions classified; a pair
/// with only the outer dimension classified still counts in its row total.
/// Output is dense in both dimensions.
pub fn aggregate_nested<O, N, I>(pairs: I) -> Vec<NestedGroup>
where
    O: Dimension,
    N: Dimension,
    I: IntoIterator<Item = (Option<O>, Option<N>)>,
{
    let mut cell_counts: FxHashMap<(O, N), usize> = FxHashMap::default();
    let mut row_totals: FxHashMap<O, usize> = FxHashMap::default();

    for (outer, inner) in pairs {
        let Some(outer) = outer else { continue };
        *row_totals.entry(outer).or_insert(0) += 1;
        if let Some(inner) = inner {
            *cell_counts.entry((outer, inner)).or_insert(0) += 1;
        }
    }

    let grand_total: usize = cell_counts.values().sum();

    O::declared()
        .iter()
        .map(|outer| NestedGroup {
            key: outer.label().to_string(),
            total: row_totals.get(outer).copied().unwrap_or(0),
            groups: N::declared()
                .iter()
                .map(|inner| {
                    let count = cell_counts.get(&(*outer, *inner)).copied().unwrap_or(0);
                    GroupCount {
                        key: inner.label().to_string(),
                        count,
                        percentage_of_total: percentage(count, grand_total),
                    }
                })
                .collect(),
        })
        .collect()
}

/// Tally arbitrary string keys (professional names, service codes)
///
/// Unlike dimension aggregation there is no declared value list; the output
/// is sorted by key for deterministic iteration.
#[must_use]
pub fn tally_keys<I, S>(keys: I) -> Vec<GroupCount>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let counts: FxHashMap<String, usize> =
        keys.into_iter().map_into().counts().into_iter().collect();
    let total: usize = counts.values().sum();

    counts
        .into_iter()
        .sorted()
        .map(|(key, count)| GroupCount {
            percentage_of_total: percentage(count, total),
            key,
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::WeightBand;

    #[test]
    fn empty_input_yields_dense_zero_result() {
        let result = aggregate_by_dimension::<WeightBand, _>(std::iter::empty());
        assert_eq!(result.total, 0);
        assert_eq!(result.groups.len(), WeightBand::ALL.len());
        for group in &result.groups {
            assert_eq!(group.count, 0);
            assert_eq!(group.percentage_of_total, 0.0);
        }
    }

    #[test]
    fn unclassified_is_tracked_separately() {
        let values = vec![Some(3200), None, Some(800), None];
        let result = aggregate_banded(values, WeightBand::classify).unwrap();
        assert_eq!(result.total, 2);
        assert_eq!(result.unclassified, 2);
        assert_eq!(result.total_with_unclassified(), 4);
        assert_eq!(result.count_of("3000_3999"), 1);
        assert_eq!(result.count_of("500_999"), 1);
    }

    #[test]
    fn out_of_domain_value_propagates_as_error() {
        let values = vec![Some(3200), Some(-10)];
        assert!(aggregate_banded(values, WeightBand::classify).is_err());
    }

    #[test]
    fn percentages_use_classified_cohort() {
        let values = vec![Some(3100), Some(3300), Some(700), None];
        let result = aggregate_banded(values, WeightBand::classify).unwrap();
        assert_eq!(result.count_of("3000_3999"), 2);
        assert_eq!(result.group("3000_3999").unwrap().percentage_of_total, 66.7);
    }

    #[test]
    fn tally_keys_is_sorted_and_deterministic() {
        let first = tally_keys(vec!["rossi", "perez", "rossi"]);
        let second = tally_keys(vec!["rossi", "perez", "rossi"]);
        assert_eq!(first, second);
        assert_eq!(first[0].key, "perez");
        assert_eq!(first[1].count, 2);
    }
}
