//! Clinical statistics aggregation engine for maternity-ward records.
//!
//! Turns raw per-patient clinical records into the fixed-schema monthly
//! regulatory report (REM) and the date-range-driven indicator bundle
//! consumed by the dashboard. Every component is a pure function over an
//! immutable record snapshot.

pub mod aggregate;
pub mod classify;
pub mod config;
pub mod error;
pub mod indicators;
pub mod models;
pub mod period;
pub mod ranking;
pub mod rates;
pub mod report;

// Re-export the most common types for easier use
// Core types
pub use config::{MetricTarget, TargetConfig};
pub use error::{EngineError, Result};
pub use models::RecordSnapshot;
pub use period::{Granularity, PeriodPreset, ResolvedPeriod};

// Classification
pub use classify::{ApgarBand, BAND_TABLE_VERSION, GestationalAgeBand, MaternalAgeBand, WeightBand};

// Aggregation primitives
pub use aggregate::{AggregationResult, CohortFilter, GroupCount};

// Rates, trends and rankings
pub use ranking::{ActivityRanking, rank};
pub use rates::{RateDirection, RateEvaluation, Trend, TrendDirection, compare_trend, evaluate_rate};

// Assembled outputs
pub use indicators::{IndicatorsBundle, compose};
pub use report::{RemReport, assemble_rem};
