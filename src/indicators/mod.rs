//! Dashboard indicators
//!
//! The flexible, date-range-driven analytics model consumed by the
//! multi-tab dashboard: KPIs, rates vs. targets, rankings and time-series
//! evolution, all built from the same aggregation primitives as the REM
//! report.

pub mod bundle;
pub mod composer;
pub mod evolution;

pub use bundle::IndicatorsBundle;
pub use composer::compose;
pub use evolution::evolution_series;
