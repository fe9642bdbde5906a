//! REM document shape
//!
//! The serialized field names and nesting below are a contract with the
//! regulatory consumer and must not be renamed or reshaped. Rust-side
//! names stay idiomatic; the wire names are pinned with serde renames.
//! Missing source data surfaces as `0` or `null` per [`NULL_POLICY`],
//! never as an omitted key.

use serde::{Deserialize, Serialize};

/// How a field behaves when its source data is missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullPolicy {
    /// The field serializes as `0` (counts backed by an empty cohort)
    ZeroWhenEmpty,
    /// The field serializes as `null` (derived values with no cohort)
    NullWhenEmpty,
}

/// Explicit per-field null-vs-zero policy of the REM document
///
/// Every non-count field is listed; count fields not listed here are
/// implicitly `ZeroWhenEmpty`. Paths use the wire names.
pub const NULL_POLICY: [(&str, NullPolicy); 8] = [
    ("partos.total", NullPolicy::ZeroWhenEmpty),
    ("partos.edad_gestacional_promedio", NullPolicy::NullWhenEmpty),
    ("peso_recien_nacidos.total", NullPolicy::ZeroWhenEmpty),
    ("peso_recien_nacidos.peso_promedio", NullPolicy::NullWhenEmpty),
    ("atencion_inmediata.total_recien_nacidos", NullPolicy::ZeroWhenEmpty),
    ("profilaxis_ocular.total_con_profilaxis", NullPolicy::ZeroWhenEmpty),
    ("hepatitis_b.cobertura_expuestos", NullPolicy::NullWhenEmpty),
    ("esterilizaciones.total", NullPolicy::ZeroWhenEmpty),
];

/// One band count cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandCell {
    /// Wire label of the band
    #[serde(rename = "tramo")]
    pub band: String,
    /// Records in the band
    #[serde(rename = "cantidad")]
    pub count: usize,
}

/// One birth-type row of the birth characteristics table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthTypeRow {
    /// Wire label of the birth type
    #[serde(rename = "tipo")]
    pub birth_type: String,
    /// Births of this type (including those with unknown maternal age)
    #[serde(rename = "total")]
    pub total: usize,
    /// Dense maternal-age band cells
    #[serde(rename = "por_edad_materna")]
    pub by_maternal_age: Vec<BandCell>,
}

/// Birth characteristics section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthSection {
    /// All births of the month
    #[serde(rename = "total")]
    pub total: usize,
    /// Birth type x maternal-age band table, dense in both dimensions
    #[serde(rename = "por_tipo_y_edad_materna")]
    pub by_type_and_maternal_age: Vec<BirthTypeRow>,
    /// Births whose mother's age is undocumented
    #[serde(rename = "edad_materna_sin_dato")]
    pub maternal_age_unknown: usize,
    /// Dense gestational-age band cells
    #[serde(rename = "por_edad_gestacional")]
    pub by_gestational_age: Vec<BandCell>,
    /// Births with undocumented gestational age
    #[serde(rename = "edad_gestacional_sin_dato")]
    pub gestational_age_unknown: usize,
    /// Preterm aggregate: every gestational band below 37 weeks
    #[serde(rename = "total_prematuros")]
    pub preterm_total: usize,
    /// Mean gestational age over documented births; null with no cohort
    #[serde(rename = "edad_gestacional_promedio")]
    pub mean_gestational_age: Option<f64>,
}

/// Newborn weight distribution section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightSection {
    /// Dense weight band cells
    #[serde(rename = "por_tramo")]
    pub by_band: Vec<BandCell>,
    /// All newborns of the month, including unweighed
    #[serde(rename = "total")]
    pub total: usize,
    /// Newborns without a documented weight
    #[serde(rename = "sin_dato")]
    pub unweighed: usize,
    /// Newborns under 2500 g
    #[serde(rename = "bajo_peso")]
    pub low_birth_weight: usize,
    /// Mean weight in grams over weighed newborns; null with no cohort
    #[serde(rename = "peso_promedio")]
    pub mean_weight_grams: Option<f64>,
}

/// Prophylaxis counts of the immediate-care section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProphylaxisCounts {
    /// Ocular prophylaxis administered
    #[serde(rename = "ocular")]
    pub ocular: usize,
    /// Hepatitis-B vaccine within 24 hours
    #[serde(rename = "hepatitis_b")]
    pub hepatitis_b: usize,
    /// Complete hepatitis-B protocol
    #[serde(rename = "hepatitis_b_completa")]
    pub hepatitis_b_complete: usize,
}

/// Resuscitation counts of the immediate-care section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResuscitationCounts {
    /// Basic resuscitation required
    #[serde(rename = "basica")]
    pub basic: usize,
    /// Advanced resuscitation required
    #[serde(rename = "avanzada")]
    pub advanced: usize,
    /// Any resuscitation required
    #[serde(rename = "cualquiera")]
    pub any: usize,
}

/// Per-delivery-mode sub-breakdown of the immediate-care section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryModeBreakdown {
    /// Newborns delivered by this mode
    #[serde(rename = "total")]
    pub total: usize,
    /// Of those, Apgar at 5 minutes below 7
    #[serde(rename = "apgar_5_bajo")]
    pub apgar_5_low: usize,
    /// Of those, advanced resuscitation required
    #[serde(rename = "reanimacion_avanzada")]
    pub advanced_resuscitation: usize,
}

/// Immediate-care section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImmediateCareSection {
    /// All newborns of the month
    #[serde(rename = "total_recien_nacidos")]
    pub total_newborns: usize,
    /// Prophylaxis counts
    #[serde(rename = "profilaxis")]
    pub prophylaxis: ProphylaxisCounts,
    /// Dense Apgar band cells at 1 minute
    #[serde(rename = "apgar_1")]
    pub apgar_1: Vec<BandCell>,
    /// Newborns without an Apgar assessment at 1 minute
    #[serde(rename = "apgar_1_sin_dato")]
    pub apgar_1_unknown: usize,
    /// Dense Apgar band cells at 5 minutes
    #[serde(rename = "apgar_5")]
    pub apgar_5: Vec<BandCell>,
    /// Newborns without an Apgar assessment at 5 minutes
    #[serde(rename = "apgar_5_sin_dato")]
    pub apgar_5_unknown: usize,
    /// Resuscitation counts
    #[serde(rename = "reanimacion")]
    pub resuscitation: ResuscitationCounts,
    /// Newborns with hypoxic-ischemic encephalopathy
    #[serde(rename = "encefalopatia")]
    pub encephalopathy: usize,
    /// Vaginal sub-breakdown
    #[serde(rename = "via_vaginal")]
    pub vaginal: DeliveryModeBreakdown,
    /// Instrumental sub-breakdown
    #[serde(rename = "via_instrumental")]
    pub instrumental: DeliveryModeBreakdown,
    /// Cesarean sub-breakdown
    #[serde(rename = "via_cesarea")]
    pub cesarean: DeliveryModeBreakdown,
}

/// One demographic group row of the ocular prophylaxis cross-tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcularGroupRow {
    /// Group label: `pueblos_originarios`, `migrantes` or `otros`
    #[serde(rename = "grupo")]
    pub group: String,
    /// Newborns of the group with ocular prophylaxis
    #[serde(rename = "con_profilaxis")]
    pub with_prophylaxis: usize,
    /// Newborns of the group without ocular prophylaxis
    #[serde(rename = "sin_profilaxis")]
    pub without_prophylaxis: usize,
}

/// Ocular prophylaxis section with its demographic cross-tab
///
/// Groups are disjoint by registry convention: an indigenous newborn of a
/// migrant mother counts under `pueblos_originarios`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcularProphylaxisSection {
    /// Newborns with ocular prophylaxis
    #[serde(rename = "total_con_profilaxis")]
    pub with_prophylaxis: usize,
    /// Newborns without ocular prophylaxis
    #[serde(rename = "total_sin_profilaxis")]
    pub without_prophylaxis: usize,
    /// Fixed group rows in declaration order
    #[serde(rename = "por_grupo")]
    pub groups: Vec<OcularGroupRow>,
}

/// Hepatitis-B vertical transmission section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HepatitisBSection {
    /// Distinct mothers with a positive HBsAg result
    #[serde(rename = "madres_hbsag_positivas")]
    pub mothers_positive: usize,
    /// Newborns whose mother's HBsAg status is unknown
    #[serde(rename = "estado_materno_desconocido")]
    pub maternal_status_unknown: usize,
    /// Newborns exposed to vertical transmission
    #[serde(rename = "recien_nacidos_expuestos")]
    pub exposed_newborns: usize,
    /// Newborns vaccinated within 24 hours
    #[serde(rename = "vacunados_24h")]
    pub vaccinated_24h: usize,
    /// Newborns with the complete protocol
    #[serde(rename = "protocolo_completo")]
    pub complete_protocol: usize,
    /// Complete-protocol coverage over exposed newborns; null when none
    #[serde(rename = "cobertura_expuestos")]
    pub exposed_coverage: Option<f64>,
}

/// Sterilization section, split by sex with age bands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SterilizationSection {
    /// All sterilizations of the month
    #[serde(rename = "total")]
    pub total: usize,
    /// Dense age band cells for women
    #[serde(rename = "mujeres")]
    pub women: Vec<BandCell>,
    /// Dense age band cells for men
    #[serde(rename = "hombres")]
    pub men: Vec<BandCell>,
}

/// The fixed-shape monthly regulatory document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemReport {
    /// Reported month (1-12)
    #[serde(rename = "mes")]
    pub month: u32,
    /// Reported year
    #[serde(rename = "anio")]
    pub year: i32,
    /// Version of the band tables the document was produced with
    #[serde(rename = "version_tramos")]
    pub band_table_version: String,
    /// Birth characteristics
    #[serde(rename = "partos")]
    pub births: BirthSection,
    /// Newborn weight distribution
    #[serde(rename = "peso_recien_nacidos")]
    pub newborn_weight: WeightSection,
    /// Immediate care of the newborn
    #[serde(rename = "atencion_inmediata")]
    pub immediate_care: ImmediateCareSection,
    /// Ocular prophylaxis cross-tab
    #[serde(rename = "profilaxis_ocular")]
    pub ocular_prophylaxis: OcularProphylaxisSection,
    /// Hepatitis-B vertical transmission
    #[serde(rename = "hepatitis_b")]
    pub hepatitis_b: HepatitisBSection,
    /// Sterilizations
    #[serde(rename = "esterilizaciones")]
    pub sterilizations: SterilizationSection,
}
