//! Reporting-period resolution
//!
//! Turns a user-supplied date range (or named preset) plus a grouping
//! granularity into a canonical window, derives the same-length window
//! immediately preceding it for trend comparison, and produces the bucket
//! sequence used by evolution series.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Grouping granularity for evolution series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Granularity {
    #[serde(rename = "dia")]
    Day,
    #[serde(rename = "semana")]
    Week,
    #[serde(rename = "mes")]
    Month,
}

/// Named window presets offered by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodPreset {
    Last7Days,
    Last30Days,
    Last90Days,
    CurrentMonth,
    PreviousMonth,
    YearToDate,
}

/// One bucket of an evolution series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodBucket {
    /// First day of the bucket (inclusive)
    pub start: NaiveDate,
    /// Last day of the bucket (inclusive, clipped to the window)
    pub end: NaiveDate,
    /// Stable label: `YYYY-MM-DD`, `YYYY-Www` or `YYYY-MM`
    pub label: String,
}

/// A resolved reporting window, immutable once constructed
///
/// `previous_start..=previous_end` is always the window of the same length
/// in days ending the day before `start`. It is never calendar-aligned, so
/// a 37-day custom range compares against the preceding 37 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPeriod {
    /// First day of the window (inclusive)
    pub start: NaiveDate,
    /// Last day of the window (inclusive)
    pub end: NaiveDate,
    /// Grouping granularity for evolution series
    pub granularity: Granularity,
    /// First day of the preceding equivalent window
    pub previous_start: NaiveDate,
    /// Last day of the preceding equivalent window
    pub previous_end: NaiveDate,
}

impl ResolvedPeriod {
    /// Resolve a user-supplied date range into a canonical window
    pub fn resolve(start: NaiveDate, end: NaiveDate, granularity: Granularity) -> Result<Self> {
        if end < start {
            return Err(EngineError::period(format!(
                "window end {end} precedes start {start}"
            )));
        }

        let length_days = (end - start).num_days();
        let previous_end = start - Days::new(1);
        let previous_start = previous_end - Days::new(length_days as u64);

        Ok(Self {
            start,
            end,
            granularity,
            previous_start,
            previous_end,
        })
    }

    /// Resolve the calendar-month window used by the REM report
    pub fn for_month(year: i32, month: u32) -> Result<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| EngineError::period(format!("invalid month {month} of year {year}")))?;
        let end = last_day_of_month(year, month)
            .ok_or_else(|| EngineError::period(format!("invalid month {month} of year {year}")))?;

        Self::resolve(start, end, Granularity::Day)
    }

    /// Resolve a named preset relative to a reference day
    pub fn from_preset(
        preset: PeriodPreset,
        today: NaiveDate,
        granularity: Granularity,
    ) -> Result<Self> {
        let (start, end) = match preset {
            PeriodPreset::Last7Days => (today - Days::new(6), today),
            PeriodPreset::Last30Days => (today - Days::new(29), today),
            PeriodPreset::Last90Days => (today - Days::new(89), today),
            PeriodPreset::CurrentMonth => {
                let start = today.with_day(1).ok_or_else(invalid_reference)?;
                (start, today)
            }
            PeriodPreset::PreviousMonth => {
                let first_of_current = today.with_day(1).ok_or_else(invalid_reference)?;
                let end = first_of_current - Days::new(1);
                let start = end.with_day(1).ok_or_else(invalid_reference)?;
                (start, end)
            }
            PeriodPreset::YearToDate => {
                let start = NaiveDate::from_ymd_opt(today.year(), 1, 1)
                    .ok_or_else(invalid_reference)?;
                (start, today)
            }
        };

        Self::resolve(start, end, granularity)
    }

    /// Whether a date falls inside the current window
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Whether a date falls inside the preceding equivalent window
    #[must_use]
    pub fn previous_contains(&self, date: NaiveDate) -> bool {
        date >= self.previous_start && date <= self.previous_end
    }

    /// Number of days in the window (inclusive of both ends)
    #[must_use]
    pub fn day_count(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Bucket sequence spanning the window at the resolved granularity
    ///
    /// Buckets are contiguous and clipped at the window edges; a requested
    /// range never has missing buckets, callers zero-fill empty ones.
    #[must_use]
    pub fn buckets(&self) -> Vec<PeriodBucket> {
        let mut buckets = Vec::new();
        let mut cursor = self.start;

        while cursor <= self.end {
            let (bucket_end, label) = match self.granularity {
                Granularity::Day => (cursor, cursor.format("%Y-%m-%d").to_string()),
                Granularity::Week => {
                    let iso = cursor.iso_week();
                    let end = cursor + Days::new(6);
                    (end.min(self.end), format!("{}-W{:02}", iso.year(), iso.week()))
                }
                Granularity::Month => {
                    // Safe for any valid cursor date
                    let end = last_day_of_month(cursor.year(), cursor.month())
                        .unwrap_or(self.end);
                    (end.min(self.end), cursor.format("%Y-%m").to_string())
                }
            };

            buckets.push(PeriodBucket {
                start: cursor,
                end: bucket_end,
                label,
            });
            cursor = bucket_end + Days::new(1);
        }

        buckets
    }
}

fn invalid_reference() -> EngineError {
    EngineError::period("invalid reference date for preset resolution".to_string())
}

/// Last day of a calendar month, `None` for an invalid month
fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(next_month - Days::new(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn previous_window_matches_length_of_custom_range() {
        // 37-day custom range compares against the preceding 37 days
        let period =
            ResolvedPeriod::resolve(date(2025, 3, 10), date(2025, 4, 15), Granularity::Day)
                .unwrap();
        assert_eq!(period.day_count(), 37);
        assert_eq!(period.previous_end, date(2025, 3, 9));
        assert_eq!(
            (period.previous_end - period.previous_start).num_days() + 1,
            37
        );
    }

    #[test]
    fn inverted_range_is_rejected() {
        let result =
            ResolvedPeriod::resolve(date(2025, 4, 15), date(2025, 3, 10), Granularity::Day);
        assert!(result.is_err());
    }

    #[test]
    fn month_window_covers_whole_month() {
        let period = ResolvedPeriod::for_month(2024, 2).unwrap();
        assert_eq!(period.start, date(2024, 2, 1));
        assert_eq!(period.end, date(2024, 2, 29)); // leap year
        assert_eq!(period.previous_end, date(2024, 1, 31));
    }

    #[test]
    fn invalid_month_is_rejected() {
        assert!(ResolvedPeriod::for_month(2024, 13).is_err());
        assert!(ResolvedPeriod::for_month(2024, 0).is_err());
    }

    #[test]
    fn day_buckets_have_no_gaps() {
        let period =
            ResolvedPeriod::resolve(date(2025, 1, 30), date(2025, 2, 2), Granularity::Day)
                .unwrap();
        let buckets = period.buckets();
        assert_eq!(buckets.len(), 4);
        assert_eq!(buckets[0].label, "2025-01-30");
        assert_eq!(buckets[3].label, "2025-02-02");
    }

    #[test]
    fn month_buckets_are_clipped_at_window_edges() {
        let period =
            ResolvedPeriod::resolve(date(2025, 1, 15), date(2025, 3, 10), Granularity::Month)
                .unwrap();
        let buckets = period.buckets();
        assert_eq!(buckets.len(), 3);
        assert_eq!(buckets[0].start, date(2025, 1, 15));
        assert_eq!(buckets[0].end, date(2025, 1, 31));
        assert_eq!(buckets[1].label, "2025-02");
        assert_eq!(buckets[2].end, date(2025, 3, 10));
    }

    #[test]
    fn preset_previous_month() {
        let period = ResolvedPeriod::from_preset(
            PeriodPreset::PreviousMonth,
            date(2025, 3, 14),
            Granularity::Week,
        )
        .unwrap();
        assert_eq!(period.start, date(2025, 2, 1));
        assert_eq!(period.end, date(2025, 2, 28));
    }
}
