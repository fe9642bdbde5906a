//! Newborn record entity model
//!
//! Each newborn belongs to exactly one birth record. Measurements may be
//! missing (weight, length, Apgar); a missing measurement excludes the
//! newborn from that metric's cohort rather than being coerced to zero.

use serde::{Deserialize, Serialize};

/// Sex of the newborn as registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "femenino")]
    Female,
    #[serde(rename = "masculino")]
    Male,
    #[serde(rename = "indeterminado")]
    Indeterminate,
}

impl Sex {
    /// All registered sexes in declaration order
    pub const ALL: [Self; 3] = [Self::Female, Self::Male, Self::Indeterminate];

    /// Stable wire label used as aggregation key
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Female => "femenino",
            Self::Male => "masculino",
            Self::Indeterminate => "indeterminado",
        }
    }
}

/// Hypoxic-ischemic encephalopathy grading, when diagnosed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncephalopathyGrade {
    Mild,
    Moderate,
    Severe,
}

/// A single newborn of a registered birth
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewbornRecord {
    /// Record identifier
    pub id: String,
    /// Identifier of the birth this newborn belongs to
    pub birth_id: String,
    /// Registered sex
    pub sex: Sex,
    /// Birth weight in grams, when measured
    pub weight_grams: Option<i32>,
    /// Length in centimeters, when measured
    pub length_cm: Option<f64>,
    /// Apgar score at 1 minute (0-10), when assessed
    pub apgar_1min: Option<i32>,
    /// Apgar score at 5 minutes (0-10), when assessed
    pub apgar_5min: Option<i32>,
    /// Congenital anomaly detected at birth
    pub congenital_anomaly: bool,
    /// Description of the congenital anomaly, if any
    pub congenital_anomaly_description: Option<String>,
    /// Basic resuscitation (positive-pressure ventilation) required
    pub resuscitation_basic: bool,
    /// Advanced resuscitation (intubation, compressions, drugs) required
    pub resuscitation_advanced: bool,
    /// Hypoxic-ischemic encephalopathy grade, when diagnosed
    pub encephalopathy: Option<EncephalopathyGrade>,
    /// Ocular prophylaxis administered
    pub ocular_prophylaxis: bool,
    /// Hepatitis-B vaccine administered within 24 hours
    pub hepatitis_b_vaccine: bool,
    /// Complete hepatitis-B protocol per vertical-transmission guideline
    /// (vaccine + immunoglobulin for exposed newborns)
    pub hepatitis_b_complete_protocol: bool,
    /// Whether the mother tested HBsAg positive, when known
    pub mother_hbsag_positive: Option<bool>,
    /// Newborn registered as belonging to an indigenous people
    pub indigenous: bool,
    /// Newborn of a migrant mother
    pub migrant: bool,
    /// Exclusive breastfeeding at discharge
    pub exclusive_breastfeeding: bool,
    /// Rooming-in with the mother maintained during the stay
    pub rooming_in: bool,
    /// Skin-to-skin contact performed at birth
    pub skin_to_skin: bool,
}

impl NewbornRecord {
    /// Whether this newborn required any resuscitation
    #[must_use]
    pub const fn required_resuscitation(&self) -> bool {
        self.resuscitation_basic || self.resuscitation_advanced
    }

    /// Whether this newborn is exposed to hepatitis-B vertical transmission
    #[must_use]
    pub fn hbv_exposed(&self) -> bool {
        self.mother_hbsag_positive == Some(true)
    }
}
