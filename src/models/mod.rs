//! Entity models for maternity-ward clinical records
//!
//! These are the read-only inputs to the aggregation engine. They are owned
//! and mutated by the record-keeping layer; the engine never writes to them.

pub mod birth;
pub mod complication;
pub mod episode;
pub mod mother;
pub mod newborn;
pub mod professional;
pub mod snapshot;

pub use birth::{
    Attendant, BirthPlace, BirthRecord, BirthType, GoodPractices, LaborCourse, LaborOnset,
    Sterilization, SterilizationSex,
};
pub use complication::{ClinicalContext, ComplicationKind, ComplicationRecord};
pub use episode::{AdmissionEpisode, EpisodeKind, EpisodeState};
pub use mother::{Ethnicity, Mother};
pub use newborn::{EncephalopathyGrade, NewbornRecord, Sex};
pub use professional::{Professional, ProfessionalRole};
pub use snapshot::RecordSnapshot;
