//! Admission episode entity model
//!
//! Episodes cover maternal and neonatal-unit stays and feed the
//! length-of-stay and service-distribution metrics.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Which unit the episode belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EpisodeKind {
    /// Maternal admission (labor, delivery, puerperium)
    Maternal,
    /// Neonatal-unit admission
    NeonatalUnit,
}

/// Current state of the episode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EpisodeState {
    /// Patient currently admitted
    Admitted,
    /// Patient discharged
    Discharged,
}

/// One admission episode of a mother or newborn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdmissionEpisode {
    /// Record identifier
    pub id: String,
    /// Maternal or neonatal-unit episode
    pub kind: EpisodeKind,
    /// Identifier of the admitted patient (mother or newborn)
    pub patient_id: String,
    /// Admission timestamp
    pub admitted_at: NaiveDateTime,
    /// Discharge timestamp, present once discharged
    pub discharged_at: Option<NaiveDateTime>,
    /// Current state
    pub state: EpisodeState,
    /// Assigned service or unit (free-form service code)
    pub service: String,
    /// Identifier of the responsible clinician
    pub clinician_id: String,
}

impl AdmissionEpisode {
    /// Length of stay in whole days, when the episode is closed
    ///
    /// Same-day discharges count as 0 days. Open episodes have no length
    /// of stay yet.
    #[must_use]
    pub fn length_of_stay_days(&self) -> Option<i64> {
        self.discharged_at
            .map(|discharged| (discharged - self.admitted_at).num_days())
    }
}
