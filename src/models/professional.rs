//! Professional entity model
//!
//! Professionals are used only for grouping and ranking; the engine never
//! mutates them.

use serde::{Deserialize, Serialize};

/// Role of a clinical professional
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfessionalRole {
    #[serde(rename = "matrona")]
    Midwife,
    #[serde(rename = "medico")]
    Physician,
    #[serde(rename = "enfermera")]
    Nurse,
}

impl ProfessionalRole {
    /// All roles in declaration order
    pub const ALL: [Self; 3] = [Self::Midwife, Self::Physician, Self::Nurse];

    /// Stable wire label used as aggregation key
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Midwife => "matrona",
            Self::Physician => "medico",
            Self::Nurse => "enfermera",
        }
    }
}

/// A clinical professional of the ward
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Professional {
    /// Identifier
    pub id: String,
    /// Display name used in rankings
    pub name: String,
    /// Registered role
    pub role: ProfessionalRole,
}
