//! Rate evaluation and trend comparison
//!
//! Every rate shown by a dashboard view goes through [`evaluate_rate`] so
//! the direction-of-good is taken from explicit per-metric configuration
//! instead of being re-derived per view. Trends against the preceding
//! window go through [`compare_trend`].

pub mod rate;
pub mod trend;

pub use rate::{RateDirection, RateEvaluation, evaluate_rate};
pub use trend::{Trend, TrendDirection, compare_count_trend, compare_trend};
