//! Cohort filtering
//!
//! The date window filter is mandatory; optional type/service/sex filters
//! are applied as an intersection, never a union. Filtering borrows from
//! the snapshot and never mutates it.

use serde::{Deserialize, Serialize};

use crate::models::birth::{BirthRecord, BirthType};
use crate::models::complication::ComplicationRecord;
use crate::models::episode::AdmissionEpisode;
use crate::models::newborn::{NewbornRecord, Sex};
use crate::models::snapshot::RecordSnapshot;
use crate::period::ResolvedPeriod;

/// Optional narrowing filters applied on top of the window
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CohortFilter {
    /// Restrict to one birth type
    pub birth_type: Option<BirthType>,
    /// Restrict to one service/unit code (episodes only)
    pub service: Option<String>,
    /// Restrict newborns to one registered sex
    pub sex: Option<Sex>,
}

impl CohortFilter {
    /// A filter that narrows nothing
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    fn matches_birth(&self, birth: &BirthRecord) -> bool {
        self.birth_type.is_none_or(|t| birth.birth_type == t)
    }

    fn matches_newborn(&self, newborn: &NewbornRecord) -> bool {
        self.sex.is_none_or(|s| newborn.sex == s)
    }

    fn matches_episode(&self, episode: &AdmissionEpisode) -> bool {
        self.service
            .as_deref()
            .is_none_or(|s| episode.service == s)
    }
}

/// Births whose delivery date falls in the current window, narrowed by the
/// filter intersection
#[must_use]
pub fn births_in_window<'a>(
    snapshot: &'a RecordSnapshot,
    period: &ResolvedPeriod,
    filter: &CohortFilter,
) -> Vec<&'a BirthRecord> {
    snapshot
        .births
        .iter()
        .filter(|b| period.contains(b.occurred_at.date()) && filter.matches_birth(b))
        .collect()
}

/// Births whose delivery date falls in the preceding equivalent window
#[must_use]
pub fn births_in_previous_window<'a>(
    snapshot: &'a RecordSnapshot,
    period: &ResolvedPeriod,
    filter: &CohortFilter,
) -> Vec<&'a BirthRecord> {
    snapshot
        .births
        .iter()
        .filter(|b| period.previous_contains(b.occurred_at.date()) && filter.matches_birth(b))
        .collect()
}

/// Newborns belonging to the given births, narrowed by the sex filter
#[must_use]
pub fn newborns_of_births<'a>(
    snapshot: &'a RecordSnapshot,
    births: &[&BirthRecord],
    filter: &CohortFilter,
) -> Vec<&'a NewbornRecord> {
    snapshot
        .newborns
        .iter()
        .filter(|n| {
            filter.matches_newborn(n) && births.iter().any(|b| b.id == n.birth_id)
        })
        .collect()
}

/// Episodes admitted inside the window, narrowed by the service filter
#[must_use]
pub fn episodes_in_window<'a>(
    snapshot: &'a RecordSnapshot,
    period: &ResolvedPeriod,
    filter: &CohortFilter,
) -> Vec<&'a AdmissionEpisode> {
    snapshot
        .episodes
        .iter()
        .filter(|e| period.contains(e.admitted_at.date()) && filter.matches_episode(e))
        .collect()
}

/// Complications registered inside the window
#[must_use]
pub fn complications_in_window<'a>(
    snapshot: &'a RecordSnapshot,
    period: &ResolvedPeriod,
) -> Vec<&'a ComplicationRecord> {
    snapshot
        .complications
        .iter()
        .filter(|c| period.contains(c.occurred_at.date()))
        .collect()
}
