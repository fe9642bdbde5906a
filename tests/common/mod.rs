//! Shared fixtures for integration tests
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use rem_stats::models::birth::{
    Attendant, BirthPlace, BirthRecord, BirthType, GoodPractices, LaborCourse, LaborOnset,
};
use rem_stats::models::complication::{ClinicalContext, ComplicationKind, ComplicationRecord};
use rem_stats::models::mother::{Ethnicity, Mother};
use rem_stats::models::newborn::{NewbornRecord, Sex};
use rem_stats::models::professional::ProfessionalRole;
use rem_stats::models::snapshot::RecordSnapshot;

/// Route engine logs to the test harness; safe to call from every test
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .is_test(true)
    .try_init();
}

pub fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap()
}

pub fn birth(id: &str, occurred_at: NaiveDateTime, birth_type: BirthType) -> BirthRecord {
    BirthRecord {
        id: id.to_string(),
        occurred_at,
        birth_type,
        place: BirthPlace::DeliveryRoom,
        gestational_age_weeks: Some(39),
        course: LaborCourse::Eutocic,
        onset: LaborOnset::Spontaneous,
        practices: GoodPractices::default(),
        complication_notes: None,
        mother_id: format!("m-{id}"),
        newborn_ids: vec![format!("n-{id}")],
        attendants: Vec::new(),
        sterilization: None,
    }
}

pub fn attended(mut b: BirthRecord, midwife_id: &str) -> BirthRecord {
    b.attendants.push(Attendant {
        professional_id: midwife_id.to_string(),
        role: ProfessionalRole::Midwife,
    });
    b
}

pub fn newborn(id: &str, birth_id: &str, weight_grams: Option<i32>) -> NewbornRecord {
    NewbornRecord {
        id: id.to_string(),
        birth_id: birth_id.to_string(),
        sex: Sex::Female,
        weight_grams,
        length_cm: Some(49.5),
        apgar_1min: Some(8),
        apgar_5min: Some(9),
        congenital_anomaly: false,
        congenital_anomaly_description: None,
        resuscitation_basic: false,
        resuscitation_advanced: false,
        encephalopathy: None,
        ocular_prophylaxis: true,
        hepatitis_b_vaccine: true,
        hepatitis_b_complete_protocol: false,
        mother_hbsag_positive: Some(false),
        indigenous: false,
        migrant: false,
        exclusive_breastfeeding: true,
        rooming_in: true,
        skin_to_skin: true,
    }
}

pub fn mother(id: &str, age_years: Option<i32>) -> Mother {
    Mother {
        id: id.to_string(),
        age_years,
        ethnicity: Ethnicity::None,
        migrant: false,
        disability: false,
        trans_identity: false,
        incarcerated: false,
        prenatal_control: Some(true),
    }
}

pub fn complication(
    id: &str,
    birth_id: &str,
    kind: ComplicationKind,
    occurred_at: NaiveDateTime,
) -> ComplicationRecord {
    ComplicationRecord {
        id: id.to_string(),
        kind,
        context: ClinicalContext::Postpartum,
        birth_id: birth_id.to_string(),
        occurred_at,
    }
}

/// A snapshot whose mothers match the `m-<birth id>` convention of `birth`
pub fn snapshot_for(births: Vec<BirthRecord>, newborns: Vec<NewbornRecord>) -> RecordSnapshot {
    let mothers = births.iter().map(|b| mother(&b.mother_id, Some(28))).collect();
    RecordSnapshot {
        births,
        newborns,
        mothers,
        episodes: Vec::new(),
        complications: Vec::new(),
        professionals: Vec::new(),
    }
}
