//! Group-by dimensions
//!
//! A `Dimension` is anything a cohort can be grouped by: a regulatory band
//! or a raw categorical field. The declared value list fixes the output
//! order and guarantees dense results (every declared value appears in an
//! aggregation even with count 0).

use std::hash::Hash;

use crate::classify::{ApgarBand, ComplicationCategory, GestationalAgeBand, MaternalAgeBand, WeightBand};
use crate::models::birth::{BirthPlace, BirthType, LaborCourse};
use crate::models::complication::{ClinicalContext, ComplicationKind};
use crate::models::mother::Ethnicity;
use crate::models::newborn::Sex;
use crate::models::professional::ProfessionalRole;

/// A categorical axis records can be grouped by
pub trait Dimension: Copy + Eq + Hash + 'static {
    /// Every declared value, in regulatory/declaration order
    fn declared() -> &'static [Self];

    /// Stable wire label of the value
    fn label(&self) -> &'static str;
}

macro_rules! impl_dimension {
    ($($ty:ty),+ $(,)?) => {
        $(impl Dimension for $ty {
            fn declared() -> &'static [Self] {
                &Self::ALL
            }

            fn label(&self) -> &'static str {
                Self::label(self)
            }
        })+
    };
}

impl_dimension!(
    WeightBand,
    GestationalAgeBand,
    MaternalAgeBand,
    ApgarBand,
    ComplicationCategory,
    BirthType,
    BirthPlace,
    LaborCourse,
    Sex,
    ComplicationKind,
    ClinicalContext,
    Ethnicity,
    ProfessionalRole,
);
