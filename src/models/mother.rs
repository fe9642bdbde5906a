//! Mother entity model
//!
//! Demographic fields used for the regulatory demographic cross-tabs and
//! the prenatal-control indicator. A mother may have several birth records
//! over time.

use serde::{Deserialize, Serialize};

/// Ethnicity as registered for regulatory demographics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ethnicity {
    /// Belongs to an indigenous people
    #[serde(rename = "pueblo_originario")]
    Indigenous,
    /// Afro-descendant
    #[serde(rename = "afrodescendiente")]
    AfroDescendant,
    /// No registered ethnic belonging
    #[serde(rename = "ninguna")]
    None,
    /// Declined to answer or not asked
    #[serde(rename = "no_declarada")]
    Undeclared,
}

impl Ethnicity {
    /// All ethnicity categories in declaration order
    pub const ALL: [Self; 4] = [
        Self::Indigenous,
        Self::AfroDescendant,
        Self::None,
        Self::Undeclared,
    ];

    /// Stable wire label used as aggregation key
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Indigenous => "pueblo_originario",
            Self::AfroDescendant => "afrodescendiente",
            Self::None => "ninguna",
            Self::Undeclared => "no_declarada",
        }
    }
}

/// A mother registered in the ward
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mother {
    /// Record identifier
    pub id: String,
    /// Age in years at registration, when documented
    pub age_years: Option<i32>,
    /// Registered ethnicity
    pub ethnicity: Ethnicity,
    /// Registered as migrant
    pub migrant: bool,
    /// Registered disability
    pub disability: bool,
    /// Registered trans identity
    pub trans_identity: bool,
    /// Currently deprived of liberty
    pub incarcerated: bool,
    /// Pregnancy had documented prenatal controls, when known
    pub prenatal_control: Option<bool>,
}
