//! Regulatory band tables
//!
//! Single source of truth for every fixed classifier band the regulatory
//! report and the dashboard share. Each table is exhaustive and
//! non-overlapping over its declared domain; a value outside the domain is
//! a validation error, never clamped or silently dropped.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Version tag of the band tables below
///
/// Bumped whenever the regulatory schema changes a boundary or adds a band.
pub const BAND_TABLE_VERSION: &str = "2024.1";

/// Birth-weight bands in grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightBand {
    #[serde(rename = "menos_500")]
    Under500,
    #[serde(rename = "500_999")]
    From500To999,
    #[serde(rename = "1000_1499")]
    From1000To1499,
    #[serde(rename = "1500_1999")]
    From1500To1999,
    #[serde(rename = "2000_2499")]
    From2000To2499,
    #[serde(rename = "2500_2999")]
    From2500To2999,
    #[serde(rename = "3000_3999")]
    From3000To3999,
    #[serde(rename = "4000_o_mas")]
    From4000,
}

impl WeightBand {
    /// All weight bands in regulatory declaration order
    pub const ALL: [Self; 8] = [
        Self::Under500,
        Self::From500To999,
        Self::From1000To1499,
        Self::From1500To1999,
        Self::From2000To2499,
        Self::From2500To2999,
        Self::From3000To3999,
        Self::From4000,
    ];

    /// Stable wire label of the band
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Under500 => "menos_500",
            Self::From500To999 => "500_999",
            Self::From1000To1499 => "1000_1499",
            Self::From1500To1999 => "1500_1999",
            Self::From2000To2499 => "2000_2499",
            Self::From2500To2999 => "2500_2999",
            Self::From3000To3999 => "3000_3999",
            Self::From4000 => "4000_o_mas",
        }
    }

    /// Classify a birth weight in grams
    pub fn classify(grams: i32) -> Result<Self> {
        if grams < 0 {
            return Err(EngineError::validation(format!(
                "birth weight {grams} g outside declared domain [0, \u{221e})"
            )));
        }
        Ok(match grams {
            0..=499 => Self::Under500,
            500..=999 => Self::From500To999,
            1000..=1499 => Self::From1000To1499,
            1500..=1999 => Self::From1500To1999,
            2000..=2499 => Self::From2000To2499,
            2500..=2999 => Self::From2500To2999,
            3000..=3999 => Self::From3000To3999,
            _ => Self::From4000,
        })
    }

    /// Whether the band counts as low birth weight (<2500 g)
    #[must_use]
    pub const fn is_low_birth_weight(&self) -> bool {
        !matches!(self, Self::From2500To2999 | Self::From3000To3999 | Self::From4000)
    }
}

/// Gestational-age bands in completed weeks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GestationalAgeBand {
    /// <28 weeks
    #[serde(rename = "extremadamente_prematuro")]
    ExtremelyPreterm,
    /// 28-31 weeks
    #[serde(rename = "muy_prematuro")]
    VeryPreterm,
    /// 32-33 weeks
    #[serde(rename = "prematuro_moderado")]
    ModeratePreterm,
    /// 34-36 weeks
    #[serde(rename = "prematuro_tardio")]
    LatePreterm,
    /// 37-41 weeks
    #[serde(rename = "termino")]
    Term,
    /// >41 weeks
    #[serde(rename = "postermino")]
    PostTerm,
}

impl GestationalAgeBand {
    /// All gestational-age bands in regulatory declaration order
    pub const ALL: [Self; 6] = [
        Self::ExtremelyPreterm,
        Self::VeryPreterm,
        Self::ModeratePreterm,
        Self::LatePreterm,
        Self::Term,
        Self::PostTerm,
    ];

    /// Stable wire label of the band
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ExtremelyPreterm => "extremadamente_prematuro",
            Self::VeryPreterm => "muy_prematuro",
            Self::ModeratePreterm => "prematuro_moderado",
            Self::LatePreterm => "prematuro_tardio",
            Self::Term => "termino",
            Self::PostTerm => "postermino",
        }
    }

    /// Classify a gestational age in completed weeks
    pub fn classify(weeks: i32) -> Result<Self> {
        if weeks < 0 {
            return Err(EngineError::validation(format!(
                "gestational age {weeks} weeks outside declared domain [0, \u{221e})"
            )));
        }
        Ok(match weeks {
            0..=27 => Self::ExtremelyPreterm,
            28..=31 => Self::VeryPreterm,
            32..=33 => Self::ModeratePreterm,
            34..=36 => Self::LatePreterm,
            37..=41 => Self::Term,
            _ => Self::PostTerm,
        })
    }

    /// Whether the band belongs to the preterm aggregate (<37 weeks)
    #[must_use]
    pub const fn is_preterm(&self) -> bool {
        matches!(
            self,
            Self::ExtremelyPreterm | Self::VeryPreterm | Self::ModeratePreterm | Self::LatePreterm
        )
    }
}

/// Maternal-age bands in years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaternalAgeBand {
    #[serde(rename = "menos_15")]
    Under15,
    #[serde(rename = "15_19")]
    From15To19,
    #[serde(rename = "20_34")]
    From20To34,
    #[serde(rename = "35_o_mas")]
    From35,
}

impl MaternalAgeBand {
    /// All maternal-age bands in regulatory declaration order
    pub const ALL: [Self; 4] = [
        Self::Under15,
        Self::From15To19,
        Self::From20To34,
        Self::From35,
    ];

    /// Stable wire label of the band
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Under15 => "menos_15",
            Self::From15To19 => "15_19",
            Self::From20To34 => "20_34",
            Self::From35 => "35_o_mas",
        }
    }

    /// Classify a maternal age in years
    pub fn classify(years: i32) -> Result<Self> {
        if years < 0 {
            return Err(EngineError::validation(format!(
                "maternal age {years} years outside declared domain [0, \u{221e})"
            )));
        }
        Ok(match years {
            0..=14 => Self::Under15,
            15..=19 => Self::From15To19,
            20..=34 => Self::From20To34,
            _ => Self::From35,
        })
    }
}

/// Apgar score bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApgarBand {
    /// Score below 7
    #[serde(rename = "bajo")]
    Low,
    /// Score 7-9
    #[serde(rename = "normal")]
    Normal,
    /// Score 10
    #[serde(rename = "excelente")]
    Excellent,
}

impl ApgarBand {
    /// All Apgar bands in regulatory declaration order
    pub const ALL: [Self; 3] = [Self::Low, Self::Normal, Self::Excellent];

    /// Stable wire label of the band
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Low => "bajo",
            Self::Normal => "normal",
            Self::Excellent => "excelente",
        }
    }

    /// Classify an Apgar score (0-10)
    pub fn classify(score: i32) -> Result<Self> {
        match score {
            0..=6 => Ok(Self::Low),
            7..=9 => Ok(Self::Normal),
            10 => Ok(Self::Excellent),
            _ => Err(EngineError::validation(format!(
                "Apgar score {score} outside declared domain [0, 10]"
            ))),
        }
    }
}
