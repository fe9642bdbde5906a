//! Professional activity ranking
//!
//! Orders professionals by activity count with a deterministic tie-break
//! (name ascending, byte-wise and therefore locale-stable), so repeated
//! runs over identical data are byte-identical. Shares and per-professional
//! statistics are always computed over the full set, independent of any
//! top-N truncation.

use std::cmp::Ordering;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::aggregate::{percentage, round1};

/// One ranked professional
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedProfessional {
    /// Display name
    pub name: String,
    /// Activity count in the window
    pub count: usize,
    /// Share of the whole set's activity, rounded to one decimal
    pub percentage_of_total: f64,
    /// 1-based position after the full sort
    pub rank: usize,
}

/// Ranking of professionals by activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRanking {
    /// Ranked entries, truncated to top-N when requested
    pub entries: Vec<RankedProfessional>,
    /// Sum of every professional's count (not just the shown slice)
    pub total: usize,
    /// Mean activity per professional over the full set
    pub average_per_professional: f64,
    /// Highest single-professional count over the full set
    pub max_per_professional: usize,
}

/// Rank professionals by activity count
///
/// Sort key: count descending, then name ascending. `top_n` truncation
/// happens after the full sort; `total`, the average and the maximum are
/// computed over the full set.
#[must_use]
pub fn rank<I, S>(activity_counts: I, top_n: Option<usize>) -> ActivityRanking
where
    I: IntoIterator<Item = (S, usize)>,
    S: Into<String>,
{
    let sorted: Vec<(String, usize)> = activity_counts
        .into_iter()
        .map(|(name, count)| (name.into(), count))
        .sorted_by(|a, b| match b.1.cmp(&a.1) {
            Ordering::Equal => a.0.cmp(&b.0),
            other => other,
        })
        .collect();

    let total: usize = sorted.iter().map(|(_, count)| count).sum();
    let professional_count = sorted.len();
    let max_per_professional = sorted.first().map_or(0, |(_, count)| *count);
    let average_per_professional = if professional_count == 0 {
        0.0
    } else {
        round1(total as f64 / professional_count as f64)
    };

    let mut entries: Vec<RankedProfessional> = sorted
        .into_iter()
        .enumerate()
        .map(|(index, (name, count))| RankedProfessional {
            name,
            count,
            percentage_of_total: percentage(count, total),
            rank: index + 1,
        })
        .collect();

    if let Some(top_n) = top_n {
        entries.truncate(top_n);
    }

    ActivityRanking {
        entries,
        total,
        average_per_professional,
        max_per_professional,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_break_by_name_ascending() {
        let ranking = rank(
            vec![("vargas", 12), ("araya", 12), ("soto", 7)],
            None,
        );
        assert_eq!(ranking.entries[0].name, "araya");
        assert_eq!(ranking.entries[1].name, "vargas");
        assert_eq!(ranking.entries[2].name, "soto");
        assert_eq!(ranking.entries[0].rank, 1);
        assert_eq!(ranking.entries[1].rank, 2);
    }

    #[test]
    fn ranking_is_deterministic_across_runs() {
        let counts = vec![("b", 5), ("a", 5), ("c", 5), ("d", 2)];
        let first = rank(counts.clone(), None);
        let second = rank(counts, None);
        assert_eq!(first, second);
    }

    #[test]
    fn shares_use_full_set_even_when_truncated() {
        let ranking = rank(vec![("a", 12), ("b", 12), ("c", 7)], Some(2));
        assert_eq!(ranking.entries.len(), 2);
        assert_eq!(ranking.total, 31);
        assert_eq!(ranking.entries[0].percentage_of_total, 38.7); // 12/31
        assert_eq!(ranking.max_per_professional, 12);
        assert_eq!(ranking.average_per_professional, 10.3);
    }

    #[test]
    fn empty_set_is_a_zero_ranking() {
        let ranking = rank(Vec::<(String, usize)>::new(), Some(5));
        assert!(ranking.entries.is_empty());
        assert_eq!(ranking.total, 0);
        assert_eq!(ranking.average_per_professional, 0.0);
    }
}
