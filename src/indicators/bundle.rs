//! Dashboard indicator types
//!
//! One object per dashboard topic. Unlike the REM document this shape is
//! internal and may evolve; the hard constraint is that every rate field
//! is a [`RateEvaluation`] produced by the rate evaluator, so the
//! direction-of-good is never hard-coded in a view.

use serde::{Deserialize, Serialize};

use crate::aggregate::{AggregationResult, GroupCount};
use crate::period::{Granularity, ResolvedPeriod};
use crate::ranking::ActivityRanking;
use crate::rates::{RateEvaluation, Trend};

/// Birth-topic indicators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthIndicators {
    /// Births in the window
    pub total: usize,
    /// Change against the preceding equivalent window
    pub trend: Option<Trend>,
    /// Distribution by birth type (dense)
    pub by_type: AggregationResult,
    /// Distribution by place of birth (dense)
    pub by_place: AggregationResult,
    /// Distribution by labor course (dense)
    pub by_course: AggregationResult,
    /// Cesarean rate over all births
    pub cesarean_rate: RateEvaluation,
    /// Cesarean-rate change against the preceding window
    pub cesarean_trend: Option<Trend>,
    /// Induced-labor rate over births with labor
    pub induction_rate: RateEvaluation,
}

/// Newborn-topic indicators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewbornIndicators {
    /// Newborns in the window
    pub total: usize,
    /// Change against the preceding equivalent window
    pub trend: Option<Trend>,
    /// Distribution by weight band (dense)
    pub by_weight_band: AggregationResult,
    /// Distribution by registered sex (dense)
    pub by_sex: AggregationResult,
    /// Distribution by 5-minute Apgar band (dense)
    pub apgar_5: AggregationResult,
    /// Low-birth-weight rate over weighed newborns
    pub low_birth_weight: RateEvaluation,
    /// Mean weight over weighed newborns; null with no cohort
    pub mean_weight_grams: Option<f64>,
    /// Exclusive breastfeeding at discharge over all newborns
    pub exclusive_breastfeeding: RateEvaluation,
}

/// One evaluated good practice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeIndicator {
    /// Wire key of the practice
    pub key: String,
    /// Births where the practice was applied
    pub count: usize,
    /// Applicable births (the denominator)
    pub cohort: usize,
    /// Evaluated rate with target compliance
    pub evaluation: RateEvaluation,
    /// Rate change against the preceding window
    pub trend: Option<Trend>,
}

/// Good-practices topic: one entry per tracked flag, in panel order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoodPracticeIndicators {
    /// One indicator per practice flag
    pub practices: Vec<PracticeIndicator>,
}

/// Complications topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplicationIndicators {
    /// Registered complications in the window
    pub total: usize,
    /// Change against the preceding equivalent window
    pub trend: Option<Trend>,
    /// Distribution by kind (dense over the taxonomy)
    pub by_kind: AggregationResult,
    /// Distribution by reporting category (dense)
    pub by_category: AggregationResult,
    /// Distribution by clinical context (dense)
    pub by_context: AggregationResult,
    /// Births with at least one complication over all births
    pub complication_rate: RateEvaluation,
}

/// Ranking of one professional role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleWorkload {
    /// Wire label of the role
    pub role: String,
    /// Activity ranking of the role's professionals
    pub ranking: ActivityRanking,
}

/// Workload topic: per-role activity rankings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadIndicators {
    /// One ranking per professional role, in role declaration order
    pub by_role: Vec<RoleWorkload>,
    /// Mean births per calendar day of the window
    pub births_per_day: f64,
}

/// Regulatory demographics topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographicIndicators {
    /// Distribution of mothers by maternal-age band (dense)
    pub maternal_age: AggregationResult,
    /// Mean maternal age; null with no documented ages
    pub mean_maternal_age: Option<f64>,
    /// Distribution by registered ethnicity (dense)
    pub ethnicity: AggregationResult,
    /// Migrant mothers
    pub migrant_count: usize,
    /// Mothers with a registered disability
    pub disability_count: usize,
    /// Mothers with a registered trans identity
    pub trans_identity_count: usize,
    /// Mothers deprived of liberty
    pub incarcerated_count: usize,
    /// Documented prenatal controls over mothers with known status
    pub prenatal_control: RateEvaluation,
    /// Pregnancies without prenatal controls over mothers with known status
    pub uncontrolled_pregnancy: RateEvaluation,
}

/// Admission-episodes topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeIndicators {
    /// Episodes admitted in the window
    pub total_admissions: usize,
    /// Episodes still open at assembly time
    pub currently_admitted: usize,
    /// Maternal episodes admitted in the window
    pub maternal_admissions: usize,
    /// Neonatal-unit episodes admitted in the window
    pub neonatal_admissions: usize,
    /// Mean length of stay in days over closed episodes; null with none
    pub mean_length_of_stay_days: Option<f64>,
    /// Longest closed stay in days; null with none
    pub max_length_of_stay_days: Option<i64>,
    /// Admissions per service, sorted by service code
    pub by_service: Vec<GroupCount>,
}

/// One zero-filled point of an evolution series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionPoint {
    /// Bucket label (`YYYY-MM-DD`, `YYYY-Www` or `YYYY-MM`)
    pub label: String,
    /// Births in the bucket
    pub births: usize,
    /// Newborns in the bucket
    pub newborns: usize,
    /// Cesarean births in the bucket
    pub cesareans: usize,
    /// Complications registered in the bucket
    pub complications: usize,
}

/// Evolution series spanning the window with no missing buckets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionSeries {
    /// Granularity the series was bucketed at
    pub granularity: Granularity,
    /// One point per bucket, in chronological order
    pub points: Vec<EvolutionPoint>,
}

/// The full dashboard bundle, one object per tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorsBundle {
    /// The resolved window the bundle was computed over
    pub period: ResolvedPeriod,
    pub births: BirthIndicators,
    pub newborns: NewbornIndicators,
    pub good_practices: GoodPracticeIndicators,
    pub complications: ComplicationIndicators,
    pub workload: WorkloadIndicators,
    pub demographics: DemographicIndicators,
    pub episodes: EpisodeIndicators,
    pub evolution: EvolutionSeries,
}
