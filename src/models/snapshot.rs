//! Immutable record snapshot handed to the engine
//!
//! The data-access collaborator fetches the records for a requested window
//! and hands them over as one `RecordSnapshot`. The engine treats the
//! snapshot as read-only for the whole aggregation call; consistency with
//! concurrent writes is the collaborator's concern, not the engine's.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::models::birth::BirthRecord;
use crate::models::complication::ComplicationRecord;
use crate::models::episode::AdmissionEpisode;
use crate::models::mother::Mother;
use crate::models::newborn::NewbornRecord;
use crate::models::professional::Professional;

/// In-memory snapshot of the records of one window
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordSnapshot {
    /// Birth records in the window
    pub births: Vec<BirthRecord>,
    /// Newborns of the births in the window
    pub newborns: Vec<NewbornRecord>,
    /// Mothers referenced by the births
    pub mothers: Vec<Mother>,
    /// Admission episodes overlapping the window
    pub episodes: Vec<AdmissionEpisode>,
    /// Complications registered against births in the window
    pub complications: Vec<ComplicationRecord>,
    /// Professionals referenced by the births and episodes
    pub professionals: Vec<Professional>,
}

impl RecordSnapshot {
    /// Build an empty snapshot
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index mothers by id for repeated lookups during aggregation
    #[must_use]
    pub fn mother_index(&self) -> FxHashMap<&str, &Mother> {
        self.mothers.iter().map(|m| (m.id.as_str(), m)).collect()
    }

    /// Index professionals by id for ranking display names
    #[must_use]
    pub fn professional_index(&self) -> FxHashMap<&str, &Professional> {
        self.professionals
            .iter()
            .map(|p| (p.id.as_str(), p))
            .collect()
    }

    /// The mother of a given birth record, when present in the snapshot
    #[must_use]
    pub fn mother_of(&self, birth: &BirthRecord) -> Option<&Mother> {
        self.mothers.iter().find(|m| m.id == birth.mother_id)
    }

    /// All newborns belonging to a given birth record
    #[must_use]
    pub fn newborns_of(&self, birth: &BirthRecord) -> Vec<&NewbornRecord> {
        self.newborns
            .iter()
            .filter(|n| n.birth_id == birth.id)
            .collect()
    }

    /// All complications registered against a given birth record
    #[must_use]
    pub fn complications_of(&self, birth: &BirthRecord) -> Vec<&ComplicationRecord> {
        self.complications
            .iter()
            .filter(|c| c.birth_id == birth.id)
            .collect()
    }

    /// Total count of records of every entity (for logging)
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.births.len()
            + self.newborns.len()
            + self.mothers.len()
            + self.episodes.len()
            + self.complications.len()
    }
}
