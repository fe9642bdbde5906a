//! Record classification
//!
//! Pure functions that map a clinical value to exactly one regulatory band
//! or taxonomy entry. Nullable entry points return `Ok(None)` for a missing
//! measurement (the "unclassified" sentinel): the record is excluded from
//! banded counts but still contributes to any independently-kept total.

pub mod bands;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::complication::ComplicationKind;

pub use bands::{
    ApgarBand, BAND_TABLE_VERSION, GestationalAgeBand, MaternalAgeBand, WeightBand,
};

/// Classify a nullable birth weight in grams
pub fn classify_weight(grams: Option<i32>) -> Result<Option<WeightBand>> {
    grams.map(WeightBand::classify).transpose()
}

/// Classify a nullable gestational age in completed weeks
pub fn classify_gestational_age(weeks: Option<i32>) -> Result<Option<GestationalAgeBand>> {
    weeks.map(GestationalAgeBand::classify).transpose()
}

/// Classify a nullable maternal age in years
pub fn classify_maternal_age(years: Option<i32>) -> Result<Option<MaternalAgeBand>> {
    years.map(MaternalAgeBand::classify).transpose()
}

/// Classify a nullable Apgar score
pub fn classify_apgar(score: Option<i32>) -> Result<Option<ApgarBand>> {
    score.map(ApgarBand::classify).transpose()
}

/// Reporting category of an obstetric complication
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplicationCategory {
    #[serde(rename = "hemorragica")]
    Hemorrhagic,
    #[serde(rename = "hipertensiva")]
    Hypertensive,
    #[serde(rename = "infecciosa")]
    Infectious,
    #[serde(rename = "traumatica")]
    Traumatic,
}

impl ComplicationCategory {
    /// All complication categories in declaration order
    pub const ALL: [Self; 4] = [
        Self::Hemorrhagic,
        Self::Hypertensive,
        Self::Infectious,
        Self::Traumatic,
    ];

    /// Stable wire label used as aggregation key
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Hemorrhagic => "hemorragica",
            Self::Hypertensive => "hipertensiva",
            Self::Infectious => "infecciosa",
            Self::Traumatic => "traumatica",
        }
    }
}

/// Category and display label of a complication kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplicationClass {
    /// Reporting category
    pub category: ComplicationCategory,
    /// Display label of the kind
    pub label: &'static str,
}

/// Classify a complication kind into its reporting category
#[must_use]
pub const fn classify_complication(kind: ComplicationKind) -> ComplicationClass {
    let category = match kind {
        ComplicationKind::PostpartumHemorrhage
        | ComplicationKind::RetainedPlacenta
        | ComplicationKind::UterineInversion => ComplicationCategory::Hemorrhagic,
        ComplicationKind::Preeclampsia
        | ComplicationKind::Eclampsia
        | ComplicationKind::HellpSyndrome => ComplicationCategory::Hypertensive,
        ComplicationKind::Chorioamnionitis | ComplicationKind::PuerperalSepsis => {
            ComplicationCategory::Infectious
        }
        ComplicationKind::UterineRupture
        | ComplicationKind::SevereVaginalTear
        | ComplicationKind::ShoulderDystocia => ComplicationCategory::Traumatic,
    };

    ComplicationClass {
        category,
        label: kind.label(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_bands_are_exhaustive_and_non_overlapping() {
        // Every value in [0, 10000) lands in exactly one band
        for grams in 0..10_000 {
            let band = WeightBand::classify(grams).unwrap();
            let matching = WeightBand::ALL
                .iter()
                .filter(|b| **b == band)
                .count();
            assert_eq!(matching, 1);
        }

        // Boundaries sit in the regulatory bands
        assert_eq!(WeightBand::classify(499).unwrap(), WeightBand::Under500);
        assert_eq!(WeightBand::classify(500).unwrap(), WeightBand::From500To999);
        assert_eq!(WeightBand::classify(2499).unwrap(), WeightBand::From2000To2499);
        assert_eq!(WeightBand::classify(2500).unwrap(), WeightBand::From2500To2999);
        assert_eq!(WeightBand::classify(4000).unwrap(), WeightBand::From4000);
    }

    #[test]
    fn negative_weight_is_a_validation_error() {
        assert!(WeightBand::classify(-1).is_err());
        assert!(classify_weight(Some(-200)).is_err());
    }

    #[test]
    fn null_weight_is_unclassified_not_an_error() {
        assert_eq!(classify_weight(None).unwrap(), None);
    }

    #[test]
    fn gestational_age_boundaries() {
        assert_eq!(
            GestationalAgeBand::classify(27).unwrap(),
            GestationalAgeBand::ExtremelyPreterm
        );
        assert_eq!(
            GestationalAgeBand::classify(28).unwrap(),
            GestationalAgeBand::VeryPreterm
        );
        assert_eq!(
            GestationalAgeBand::classify(36).unwrap(),
            GestationalAgeBand::LatePreterm
        );
        assert_eq!(GestationalAgeBand::classify(37).unwrap(), GestationalAgeBand::Term);
        assert_eq!(GestationalAgeBand::classify(41).unwrap(), GestationalAgeBand::Term);
        assert_eq!(
            GestationalAgeBand::classify(42).unwrap(),
            GestationalAgeBand::PostTerm
        );
    }

    #[test]
    fn preterm_aggregate_covers_every_band_below_37() {
        for weeks in 0..37 {
            assert!(GestationalAgeBand::classify(weeks).unwrap().is_preterm());
        }
        for weeks in 37..45 {
            assert!(!GestationalAgeBand::classify(weeks).unwrap().is_preterm());
        }
    }

    #[test]
    fn apgar_domain_is_closed() {
        assert_eq!(ApgarBand::classify(0).unwrap(), ApgarBand::Low);
        assert_eq!(ApgarBand::classify(6).unwrap(), ApgarBand::Low);
        assert_eq!(ApgarBand::classify(7).unwrap(), ApgarBand::Normal);
        assert_eq!(ApgarBand::classify(9).unwrap(), ApgarBand::Normal);
        assert_eq!(ApgarBand::classify(10).unwrap(), ApgarBand::Excellent);
        assert!(ApgarBand::classify(11).is_err());
        assert!(ApgarBand::classify(-1).is_err());
    }

    #[test]
    fn maternal_age_bands() {
        assert_eq!(MaternalAgeBand::classify(14).unwrap(), MaternalAgeBand::Under15);
        assert_eq!(MaternalAgeBand::classify(15).unwrap(), MaternalAgeBand::From15To19);
        assert_eq!(MaternalAgeBand::classify(34).unwrap(), MaternalAgeBand::From20To34);
        assert_eq!(MaternalAgeBand::classify(35).unwrap(), MaternalAgeBand::From35);
    }

    #[test]
    fn every_complication_kind_has_a_category() {
        for kind in ComplicationKind::ALL {
            let class = classify_complication(kind);
            assert!(!class.label.is_empty());
            assert!(ComplicationCategory::ALL.contains(&class.category));
        }
    }
}
