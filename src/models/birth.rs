//! Birth record entity model
//!
//! This module contains the `BirthRecord` model, the central clinical event
//! of the maternity ward. Birth records carry the delivery characteristics,
//! the good-practice flags used for quality indicators, and the links to the
//! mother, the newborns, and the attending professionals.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::professional::ProfessionalRole;

/// Mode of delivery, matching the regulatory birth-type taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BirthType {
    /// Spontaneous vaginal delivery
    #[serde(rename = "vaginal")]
    Vaginal,
    /// Instrumental delivery (forceps, vacuum, spatulas)
    #[serde(rename = "instrumental")]
    Instrumental,
    /// Scheduled cesarean section
    #[serde(rename = "cesarea_electiva")]
    ElectiveCesarean,
    /// Unscheduled cesarean section
    #[serde(rename = "cesarea_urgencia")]
    EmergencyCesarean,
    /// Planned home birth attended by network staff
    #[serde(rename = "domicilio")]
    Home,
    /// Birth before arrival, attended prehospital
    #[serde(rename = "prehospitalario")]
    Prehospital,
    /// Vaginal delivery outside the care network, registered afterwards
    #[serde(rename = "extrasistema_vaginal")]
    OutOfNetworkVaginal,
    /// Cesarean outside the care network, registered afterwards
    #[serde(rename = "extrasistema_cesarea")]
    OutOfNetworkCesarean,
}

impl BirthType {
    /// All birth types in regulatory declaration order
    pub const ALL: [Self; 8] = [
        Self::Vaginal,
        Self::Instrumental,
        Self::ElectiveCesarean,
        Self::EmergencyCesarean,
        Self::Home,
        Self::Prehospital,
        Self::OutOfNetworkVaginal,
        Self::OutOfNetworkCesarean,
    ];

    /// Stable wire label used as aggregation key and regulatory field name
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Vaginal => "vaginal",
            Self::Instrumental => "instrumental",
            Self::ElectiveCesarean => "cesarea_electiva",
            Self::EmergencyCesarean => "cesarea_urgencia",
            Self::Home => "domicilio",
            Self::Prehospital => "prehospitalario",
            Self::OutOfNetworkVaginal => "extrasistema_vaginal",
            Self::OutOfNetworkCesarean => "extrasistema_cesarea",
        }
    }

    /// Whether the delivery was by cesarean section
    #[must_use]
    pub const fn is_cesarean(&self) -> bool {
        matches!(
            self,
            Self::ElectiveCesarean | Self::EmergencyCesarean | Self::OutOfNetworkCesarean
        )
    }

    /// Whether the delivery was vaginal (including instrumental and
    /// out-of-facility variants)
    #[must_use]
    pub const fn is_vaginal(&self) -> bool {
        !self.is_cesarean()
    }
}

/// Place where the delivery occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BirthPlace {
    /// Delivery room of the facility
    #[serde(rename = "sala_partos")]
    DeliveryRoom,
    /// Surgical theatre
    #[serde(rename = "pabellon")]
    OperatingRoom,
    /// Emergency department
    #[serde(rename = "urgencia")]
    EmergencyDepartment,
    /// Patient's home
    #[serde(rename = "domicilio")]
    Home,
    /// In transit or other prehospital setting
    #[serde(rename = "prehospitalario")]
    Prehospital,
    /// Another facility outside the network
    #[serde(rename = "otro_centro")]
    OtherFacility,
}

impl BirthPlace {
    /// All places in declaration order
    pub const ALL: [Self; 6] = [
        Self::DeliveryRoom,
        Self::OperatingRoom,
        Self::EmergencyDepartment,
        Self::Home,
        Self::Prehospital,
        Self::OtherFacility,
    ];

    /// Stable wire label used as aggregation key
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::DeliveryRoom => "sala_partos",
            Self::OperatingRoom => "pabellon",
            Self::EmergencyDepartment => "urgencia",
            Self::Home => "domicilio",
            Self::Prehospital => "prehospitalario",
            Self::OtherFacility => "otro_centro",
        }
    }
}

/// Clinical course of the labor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaborCourse {
    /// Normal progression without intervention
    Eutocic,
    /// Abnormal progression requiring intervention
    Dystocic,
}

impl LaborCourse {
    /// Both courses in declaration order
    pub const ALL: [Self; 2] = [Self::Eutocic, Self::Dystocic];

    /// Stable wire label used as aggregation key
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Eutocic => "eutocico",
            Self::Dystocic => "distocico",
        }
    }
}

/// How labor started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaborOnset {
    /// Labor started spontaneously
    Spontaneous,
    /// Labor was induced pharmacologically or mechanically
    Induced,
    /// No labor occurred (e.g. scheduled cesarean)
    NoLabor,
}

/// Good-practice flags recorded per delivery
///
/// Each flag is a clinical-quality marker tracked by the ward. Whether a
/// higher or lower frequency is desirable is NOT encoded here; the
/// per-metric direction lives in [`crate::config::TargetConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoodPractices {
    /// Prophylactic oxytocin administered in the third stage
    pub prophylactic_oxytocin: bool,
    /// Cord clamping delayed at least 60 seconds
    pub delayed_cord_clamping: bool,
    /// Skin-to-skin contact sustained for at least 30 minutes
    pub skin_to_skin_30min: bool,
    /// Breastfeeding initiated within the first hour
    pub early_breastfeeding: bool,
    /// Chosen companion present during labor and delivery
    pub companion_present: bool,
    /// Companion present specifically at the moment of delivery
    pub companion_at_delivery: bool,
    /// Upright or otherwise free position during the expulsive stage
    pub upright_position: bool,
    /// Freedom of movement maintained during labor
    pub freedom_of_movement: bool,
    /// Oral intake allowed during labor
    pub oral_intake_allowed: bool,
    /// Non-pharmacological pain relief offered and used
    pub non_pharmacological_pain_relief: bool,
    /// Neuraxial analgesia administered on request
    pub neuraxial_analgesia: bool,
    /// Partogram in use during active labor
    pub partogram_used: bool,
    /// Episiotomy performed
    pub episiotomy: bool,
    /// Artificial rupture of membranes performed
    pub artificial_rupture: bool,
    /// Continuous support by a professional throughout labor
    pub continuous_support: bool,
    /// Delivery plan of the mother reviewed and honored
    pub birth_plan_honored: bool,
    /// Active management of the third stage of labor
    pub active_third_stage: bool,
    /// Uterine massage performed after placental delivery
    pub uterine_massage: bool,
    /// Immediate postpartum surveillance for at least two hours
    pub postpartum_surveillance_2h: bool,
    /// Newborn kept rooming-in with the mother from birth
    pub rooming_in_from_birth: bool,
}

impl GoodPractices {
    /// Every tracked practice: stable wire key plus field accessor
    ///
    /// Declaration order is the display order of the good-practice panel.
    pub const FLAGS: [(&'static str, fn(&Self) -> bool); 20] = [
        ("oxitocina_profilactica", |p| p.prophylactic_oxytocin),
        ("pinzamiento_tardio_cordon", |p| p.delayed_cord_clamping),
        ("contacto_piel_a_piel_30min", |p| p.skin_to_skin_30min),
        ("lactancia_primera_hora", |p| p.early_breastfeeding),
        ("acompanante_presente", |p| p.companion_present),
        ("acompanante_en_parto", |p| p.companion_at_delivery),
        ("posicion_vertical", |p| p.upright_position),
        ("libertad_movimiento", |p| p.freedom_of_movement),
        ("ingesta_oral_permitida", |p| p.oral_intake_allowed),
        ("alivio_no_farmacologico", |p| p.non_pharmacological_pain_relief),
        ("analgesia_neuroaxial", |p| p.neuraxial_analgesia),
        ("uso_partograma", |p| p.partogram_used),
        ("episiotomia", |p| p.episiotomy),
        ("rotura_artificial_membranas", |p| p.artificial_rupture),
        ("acompanamiento_continuo", |p| p.continuous_support),
        ("plan_parto_respetado", |p| p.birth_plan_honored),
        ("manejo_activo_alumbramiento", |p| p.active_third_stage),
        ("masaje_uterino", |p| p.uterine_massage),
        ("vigilancia_puerperio_2h", |p| p.postpartum_surveillance_2h),
        ("alojamiento_conjunto", |p| p.rooming_in_from_birth),
    ];
}

/// Sex recorded for a sterilization procedure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SterilizationSex {
    /// Female surgical sterilization (tubal ligation)
    Female,
    /// Male surgical sterilization (vasectomy)
    Male,
}

/// Surgical sterilization performed at delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sterilization {
    /// Sex of the sterilized person
    pub sex: SterilizationSex,
    /// Age in years at the time of the procedure
    pub age_years: i32,
}

/// A professional assigned to a birth, tagged by the role they covered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendant {
    /// Identifier of the professional
    pub professional_id: String,
    /// Role the professional covered during this birth
    pub role: ProfessionalRole,
}

/// A single delivery event
///
/// Read-only input to the aggregation engine; owned and mutated only by the
/// record-keeping layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthRecord {
    /// Record identifier
    pub id: String,
    /// When the delivery occurred
    pub occurred_at: NaiveDateTime,
    /// Mode of delivery
    pub birth_type: BirthType,
    /// Where the delivery occurred
    pub place: BirthPlace,
    /// Gestational age in completed weeks, when documented
    pub gestational_age_weeks: Option<i32>,
    /// Clinical course of the labor
    pub course: LaborCourse,
    /// How labor started
    pub onset: LaborOnset,
    /// Good-practice flags for this delivery
    pub practices: GoodPractices,
    /// Free-text complication notes, if any
    pub complication_notes: Option<String>,
    /// Identifier of the mother
    pub mother_id: String,
    /// Identifiers of the newborns delivered (0..N, stillbirths excluded)
    pub newborn_ids: Vec<String>,
    /// Professionals assigned to this birth
    pub attendants: Vec<Attendant>,
    /// Surgical sterilization performed at this delivery, if any
    pub sterilization: Option<Sterilization>,
}

impl BirthRecord {
    /// Whether a given professional attended this birth in a given role
    #[must_use]
    pub fn attended_by(&self, professional_id: &str, role: ProfessionalRole) -> bool {
        self.attendants
            .iter()
            .any(|a| a.professional_id == professional_id && a.role == role)
    }

    /// Whether labor good practices apply to this delivery
    ///
    /// Labor-stage practices (companion, movement, analgesia, partogram) are
    /// not applicable when no labor occurred.
    #[must_use]
    pub const fn labor_practices_applicable(&self) -> bool {
        !matches!(self.onset, LaborOnset::NoLabor)
    }
}
