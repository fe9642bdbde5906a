//! Obstetric complication entity model
//!
//! Complications are registered against a birth record with the clinical
//! context in which they occurred. The kind taxonomy is fixed; the
//! category grouping for reporting lives in [`crate::classify`].

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Fixed taxonomy of registered obstetric complications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplicationKind {
    #[serde(rename = "hemorragia_postparto")]
    PostpartumHemorrhage,
    #[serde(rename = "placenta_retenida")]
    RetainedPlacenta,
    #[serde(rename = "inversion_uterina")]
    UterineInversion,
    #[serde(rename = "preeclampsia")]
    Preeclampsia,
    #[serde(rename = "eclampsia")]
    Eclampsia,
    #[serde(rename = "sindrome_hellp")]
    HellpSyndrome,
    #[serde(rename = "corioamnionitis")]
    Chorioamnionitis,
    #[serde(rename = "sepsis_puerperal")]
    PuerperalSepsis,
    #[serde(rename = "rotura_uterina")]
    UterineRupture,
    #[serde(rename = "desgarro_grado_3_4")]
    SevereVaginalTear,
    #[serde(rename = "distocia_hombros")]
    ShoulderDystocia,
}

impl ComplicationKind {
    /// All complication kinds in declaration order
    pub const ALL: [Self; 11] = [
        Self::PostpartumHemorrhage,
        Self::RetainedPlacenta,
        Self::UterineInversion,
        Self::Preeclampsia,
        Self::Eclampsia,
        Self::HellpSyndrome,
        Self::Chorioamnionitis,
        Self::PuerperalSepsis,
        Self::UterineRupture,
        Self::SevereVaginalTear,
        Self::ShoulderDystocia,
    ];

    /// Stable wire label used as aggregation key
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::PostpartumHemorrhage => "hemorragia_postparto",
            Self::RetainedPlacenta => "placenta_retenida",
            Self::UterineInversion => "inversion_uterina",
            Self::Preeclampsia => "preeclampsia",
            Self::Eclampsia => "eclampsia",
            Self::HellpSyndrome => "sindrome_hellp",
            Self::Chorioamnionitis => "corioamnionitis",
            Self::PuerperalSepsis => "sepsis_puerperal",
            Self::UterineRupture => "rotura_uterina",
            Self::SevereVaginalTear => "desgarro_grado_3_4",
            Self::ShoulderDystocia => "distocia_hombros",
        }
    }
}

/// Clinical context in which the complication occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClinicalContext {
    #[serde(rename = "preparto")]
    Prepartum,
    #[serde(rename = "intraparto")]
    Intrapartum,
    #[serde(rename = "postparto")]
    Postpartum,
}

impl ClinicalContext {
    /// All contexts in declaration order
    pub const ALL: [Self; 3] = [Self::Prepartum, Self::Intrapartum, Self::Postpartum];

    /// Stable wire label used as aggregation key
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Prepartum => "preparto",
            Self::Intrapartum => "intraparto",
            Self::Postpartum => "postparto",
        }
    }
}

/// One registered obstetric complication
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplicationRecord {
    /// Record identifier
    pub id: String,
    /// Kind of complication
    pub kind: ComplicationKind,
    /// Clinical context in which it occurred
    pub context: ClinicalContext,
    /// Identifier of the birth this complication belongs to
    pub birth_id: String,
    /// When the complication was registered
    pub occurred_at: NaiveDateTime,
}
