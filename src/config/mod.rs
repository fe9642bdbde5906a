//! Per-metric target configuration
//!
//! Every rate the engine evaluates carries an explicit target and an
//! explicit direction-of-good. The direction is configuration, never
//! re-derived ad hoc by a view: a cesarean rate is better when lower, a
//! skin-to-skin rate is better when higher, and that distinction lives
//! here and nowhere else.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::rates::RateDirection;

/// Target and direction of one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricTarget {
    /// Target percentage in [0, 100]; `None` leaves compliance unknown
    pub target: Option<f64>,
    /// Which direction is clinically desirable
    pub direction: RateDirection,
}

impl MetricTarget {
    /// A higher-is-better metric with a target
    #[must_use]
    pub const fn higher(target: f64) -> Self {
        Self {
            target: Some(target),
            direction: RateDirection::HigherIsBetter,
        }
    }

    /// A lower-is-better metric with a target
    #[must_use]
    pub const fn lower(target: f64) -> Self {
        Self {
            target: Some(target),
            direction: RateDirection::LowerIsBetter,
        }
    }

    /// An untargeted metric; only the direction is configured
    #[must_use]
    pub const fn untargeted(direction: RateDirection) -> Self {
        Self {
            target: None,
            direction,
        }
    }
}

/// Per-metric targets consumed by the indicators composer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Cesarean rate over all births
    pub cesarean: MetricTarget,
    /// Induced-labor rate over births with labor
    pub induction: MetricTarget,
    /// Mothers with documented prenatal controls
    pub prenatal_control: MetricTarget,
    /// Pregnancies without documented prenatal controls
    pub uncontrolled_pregnancy: MetricTarget,
    /// Newborns under 2500 g over weighed newborns
    pub low_birth_weight: MetricTarget,
    /// Exclusive breastfeeding at discharge
    pub exclusive_breastfeeding: MetricTarget,
    /// Births with at least one registered complication
    pub complications: MetricTarget,
    /// Per-good-practice overrides, keyed by the practice wire key
    pub good_practices: FxHashMap<String, MetricTarget>,
}

impl TargetConfig {
    /// Target for a good-practice flag
    ///
    /// Falls back to the flag's default direction when no override is
    /// configured: episiotomy and artificial rupture are better when
    /// lower, every other practice when higher.
    #[must_use]
    pub fn good_practice_target(&self, key: &str) -> MetricTarget {
        if let Some(target) = self.good_practices.get(key) {
            return *target;
        }

        match key {
            "episiotomia" | "rotura_artificial_membranas" => {
                MetricTarget::untargeted(RateDirection::LowerIsBetter)
            }
            _ => MetricTarget::untargeted(RateDirection::HigherIsBetter),
        }
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        let mut good_practices = FxHashMap::default();
        good_practices.insert("contacto_piel_a_piel_30min".to_string(), MetricTarget::higher(90.0));
        good_practices.insert("pinzamiento_tardio_cordon".to_string(), MetricTarget::higher(90.0));
        good_practices.insert("acompanante_presente".to_string(), MetricTarget::higher(95.0));
        good_practices.insert("lactancia_primera_hora".to_string(), MetricTarget::higher(80.0));
        good_practices.insert("episiotomia".to_string(), MetricTarget::lower(15.0));

        Self {
            cesarean: MetricTarget::lower(30.0),
            induction: MetricTarget::lower(25.0),
            prenatal_control: MetricTarget::higher(90.0),
            uncontrolled_pregnancy: MetricTarget::lower(10.0),
            low_birth_weight: MetricTarget::lower(10.0),
            exclusive_breastfeeding: MetricTarget::higher(85.0),
            complications: MetricTarget::lower(15.0),
            good_practices,
        }
    }
}

impl fmt::Display for TargetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Target Configuration:")?;
        writeln!(f, "  Cesarean: {:?}", self.cesarean)?;
        writeln!(f, "  Induction: {:?}", self.induction)?;
        writeln!(f, "  Prenatal Control: {:?}", self.prenatal_control)?;
        writeln!(f, "  Uncontrolled Pregnancy: {:?}", self.uncontrolled_pregnancy)?;
        writeln!(f, "  Low Birth Weight: {:?}", self.low_birth_weight)?;
        writeln!(f, "  Exclusive Breastfeeding: {:?}", self.exclusive_breastfeeding)?;
        writeln!(f, "  Complications: {:?}", self.complications)?;
        writeln!(f, "  Good-Practice Overrides: {}", self.good_practices.len())?;
        Ok(())
    }
}
