//! Indicator composition
//!
//! Composes the aggregation primitives into the dashboard bundle: one
//! topic object per tab, every rate evaluated through the rate evaluator,
//! every trend compared against the preceding equivalent window drawn from
//! the same snapshot.

use log::info;
use rustc_hash::FxHashSet;

use crate::aggregate::{
    CohortFilter, aggregate_banded, aggregate_by_dimension, births_in_previous_window,
    births_in_window, complications_in_window, episodes_in_window, percentage, round1,
    tally_keys,
};
use crate::classify::{ApgarBand, MaternalAgeBand, WeightBand, classify_complication};
use crate::config::TargetConfig;
use crate::error::Result;
use crate::indicators::bundle::{
    BirthIndicators, ComplicationIndicators, DemographicIndicators, EpisodeIndicators,
    GoodPracticeIndicators, IndicatorsBundle, NewbornIndicators, PracticeIndicator,
    RoleWorkload, WorkloadIndicators,
};
use crate::indicators::evolution::evolution_series;
use crate::models::birth::{BirthRecord, GoodPractices, LaborOnset};
use crate::models::episode::{EpisodeKind, EpisodeState};
use crate::models::mother::Mother;
use crate::models::newborn::NewbornRecord;
use crate::models::professional::ProfessionalRole;
use crate::models::snapshot::RecordSnapshot;
use crate::period::ResolvedPeriod;
use crate::ranking::rank;
use crate::rates::{compare_count_trend, compare_trend, evaluate_rate};

/// Practices only applicable when labor occurred
const LABOR_STAGE_PRACTICES: [&str; 11] = [
    "acompanante_presente",
    "acompanante_en_parto",
    "posicion_vertical",
    "libertad_movimiento",
    "ingesta_oral_permitida",
    "alivio_no_farmacologico",
    "analgesia_neuroaxial",
    "uso_partograma",
    "episiotomia",
    "rotura_artificial_membranas",
    "acompanamiento_continuo",
];

/// Compose the dashboard bundle for a resolved window
///
/// The snapshot must span both the current window and its preceding
/// equivalent; records outside either window are ignored.
pub fn compose(
    period: &ResolvedPeriod,
    snapshot: &RecordSnapshot,
    targets: &TargetConfig,
) -> Result<IndicatorsBundle> {
    let filter = CohortFilter::none();
    let births = births_in_window(snapshot, period, &filter);
    let previous_births = births_in_previous_window(snapshot, period, &filter);

    info!(
        "Composing indicators {}..{}: {} births, {} in preceding window",
        period.start,
        period.end,
        births.len(),
        previous_births.len()
    );

    Ok(IndicatorsBundle {
        period: *period,
        births: birth_indicators(&births, &previous_births, targets)?,
        newborns: newborn_indicators(snapshot, &births, &previous_births, targets)?,
        good_practices: good_practice_indicators(&births, &previous_births, targets),
        complications: complication_indicators(period, snapshot, &births, targets),
        workload: workload_indicators(period, snapshot, &births),
        demographics: demographic_indicators(snapshot, &births, targets)?,
        episodes: episode_indicators(period, snapshot, &filter),
        evolution: evolution_series(period, snapshot),
    })
}

fn cesarean_count(births: &[&BirthRecord]) -> usize {
    births.iter().filter(|b| b.birth_type.is_cesarean()).count()
}

fn birth_indicators(
    births: &[&BirthRecord],
    previous: &[&BirthRecord],
    targets: &TargetConfig,
) -> Result<BirthIndicators> {
    let cesareans = cesarean_count(births);
    let cesarean_rate = evaluate_rate(
        cesareans,
        births.len(),
        targets.cesarean.target,
        targets.cesarean.direction,
    );

    let previous_cesarean_rate = if previous.is_empty() {
        None
    } else {
        Some(percentage(cesarean_count(previous), previous.len()))
    };

    let with_labor: Vec<&&BirthRecord> = births
        .iter()
        .filter(|b| b.labor_practices_applicable())
        .collect();
    let induced = with_labor
        .iter()
        .filter(|b| b.onset == LaborOnset::Induced)
        .count();

    Ok(BirthIndicators {
        total: births.len(),
        trend: compare_count_trend(births.len(), previous.len()),
        by_type: aggregate_by_dimension(births.iter().map(|b| Some(b.birth_type))),
        by_place: aggregate_by_dimension(births.iter().map(|b| Some(b.place))),
        by_course: aggregate_by_dimension(births.iter().map(|b| Some(b.course))),
        cesarean_trend: compare_trend(cesarean_rate.rate, previous_cesarean_rate),
        cesarean_rate,
        induction_rate: evaluate_rate(
            induced,
            with_labor.len(),
            targets.induction.target,
            targets.induction.direction,
        ),
    })
}

fn newborns_of<'a>(
    snapshot: &'a RecordSnapshot,
    births: &[&BirthRecord],
) -> Vec<&'a NewbornRecord> {
    let birth_ids: FxHashSet<&str> = births.iter().map(|b| b.id.as_str()).collect();
    snapshot
        .newborns
        .iter()
        .filter(|n| birth_ids.contains(n.birth_id.as_str()))
        .collect()
}

fn newborn_indicators(
    snapshot: &RecordSnapshot,
    births: &[&BirthRecord],
    previous_births: &[&BirthRecord],
    targets: &TargetConfig,
) -> Result<NewbornIndicators> {
    let newborns = newborns_of(snapshot, births);
    let previous_newborns = newborns_of(snapshot, previous_births);

    let by_weight_band = aggregate_banded(
        newborns.iter().map(|n| n.weight_grams),
        WeightBand::classify,
    )?;

    let low_weight = newborns
        .iter()
        .filter_map(|n| n.weight_grams.map(WeightBand::classify))
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .filter(WeightBand::is_low_birth_weight)
        .count();

    let weighed: Vec<i32> = newborns.iter().filter_map(|n| n.weight_grams).collect();
    let mean_weight_grams = if weighed.is_empty() {
        None
    } else {
        Some(round1(
            weighed.iter().map(|w| f64::from(*w)).sum::<f64>() / weighed.len() as f64,
        ))
    };

    let exclusive = newborns
        .iter()
        .filter(|n| n.exclusive_breastfeeding)
        .count();

    Ok(NewbornIndicators {
        total: newborns.len(),
        trend: compare_count_trend(newborns.len(), previous_newborns.len()),
        by_sex: aggregate_by_dimension(newborns.iter().map(|n| Some(n.sex))),
        apgar_5: aggregate_banded(newborns.iter().map(|n| n.apgar_5min), ApgarBand::classify)?,
        low_birth_weight: evaluate_rate(
            low_weight,
            by_weight_band.total,
            targets.low_birth_weight.target,
            targets.low_birth_weight.direction,
        ),
        by_weight_band,
        mean_weight_grams,
        exclusive_breastfeeding: evaluate_rate(
            exclusive,
            newborns.len(),
            targets.exclusive_breastfeeding.target,
            targets.exclusive_breastfeeding.direction,
        ),
    })
}

fn practice_cohort<'a, 'b>(
    births: &'b [&'a BirthRecord],
    key: &str,
) -> Vec<&'b &'a BirthRecord> {
    if LABOR_STAGE_PRACTICES.contains(&key) {
        births
            .iter()
            .filter(|b| b.labor_practices_applicable())
            .collect()
    } else {
        births.iter().collect()
    }
}

fn good_practice_indicators(
    births: &[&BirthRecord],
    previous: &[&BirthRecord],
    targets: &TargetConfig,
) -> GoodPracticeIndicators {
    let practices = GoodPractices::FLAGS
        .iter()
        .map(|(key, flag)| {
            let cohort = practice_cohort(births, key);
            let count = cohort.iter().filter(|b| flag(&b.practices)).count();

            let previous_cohort = practice_cohort(previous, key);
            let previous_rate = if previous_cohort.is_empty() {
                None
            } else {
                let previous_count =
                    previous_cohort.iter().filter(|b| flag(&b.practices)).count();
                Some(percentage(previous_count, previous_cohort.len()))
            };

            let target = targets.good_practice_target(key);
            let evaluation = evaluate_rate(count, cohort.len(), target.target, target.direction);

            PracticeIndicator {
                key: (*key).to_string(),
                count,
                cohort: cohort.len(),
                trend: compare_trend(evaluation.rate, previous_rate),
                evaluation,
            }
        })
        .collect();

    GoodPracticeIndicators { practices }
}

fn complication_indicators(
    period: &ResolvedPeriod,
    snapshot: &RecordSnapshot,
    births: &[&BirthRecord],
    targets: &TargetConfig,
) -> ComplicationIndicators {
    let complications = complications_in_window(snapshot, period);
    let previous_total = snapshot
        .complications
        .iter()
        .filter(|c| period.previous_contains(c.occurred_at.date()))
        .count();

    let births_with_complication = births
        .iter()
        .filter(|b| complications.iter().any(|c| c.birth_id == b.id))
        .count();

    ComplicationIndicators {
        total: complications.len(),
        trend: compare_count_trend(complications.len(), previous_total),
        by_kind: aggregate_by_dimension(complications.iter().map(|c| Some(c.kind))),
        by_category: aggregate_by_dimension(
            complications
                .iter()
                .map(|c| Some(classify_complication(c.kind).category)),
        ),
        by_context: aggregate_by_dimension(complications.iter().map(|c| Some(c.context))),
        complication_rate: evaluate_rate(
            births_with_complication,
            births.len(),
            targets.complications.target,
            targets.complications.direction,
        ),
    }
}

fn workload_indicators(
    period: &ResolvedPeriod,
    snapshot: &RecordSnapshot,
    births: &[&BirthRecord],
) -> WorkloadIndicators {
    let professionals = snapshot.professional_index();

    let by_role = ProfessionalRole::ALL
        .iter()
        .map(|role| {
            let names = births.iter().flat_map(|b| {
                b.attendants
                    .iter()
                    .filter(|a| a.role == *role)
                    .map(|a| {
                        professionals
                            .get(a.professional_id.as_str())
                            .map_or(a.professional_id.clone(), |p| p.name.clone())
                    })
            });

            RoleWorkload {
                role: role.label().to_string(),
                ranking: rank(tally_keys(names).into_iter().map(|g| (g.key, g.count)), None),
            }
        })
        .collect();

    WorkloadIndicators {
        by_role,
        births_per_day: round1(births.len() as f64 / period.day_count() as f64),
    }
}

fn demographic_indicators(
    snapshot: &RecordSnapshot,
    births: &[&BirthRecord],
    targets: &TargetConfig,
) -> Result<DemographicIndicators> {
    let mother_index = snapshot.mother_index();
    // One entry per birth: repeat mothers count once per delivery
    let mothers: Vec<&Mother> = births
        .iter()
        .filter_map(|b| mother_index.get(b.mother_id.as_str()).copied())
        .collect();

    let maternal_age = aggregate_banded(
        mothers.iter().map(|m| m.age_years),
        MaternalAgeBand::classify,
    )?;

    let aged: Vec<i32> = mothers.iter().filter_map(|m| m.age_years).collect();
    let mean_maternal_age = if aged.is_empty() {
        None
    } else {
        Some(round1(
            aged.iter().map(|a| f64::from(*a)).sum::<f64>() / aged.len() as f64,
        ))
    };

    let with_known_control: Vec<bool> =
        mothers.iter().filter_map(|m| m.prenatal_control).collect();
    let controlled = with_known_control.iter().filter(|c| **c).count();
    let uncontrolled = with_known_control.len() - controlled;

    Ok(DemographicIndicators {
        maternal_age,
        mean_maternal_age,
        ethnicity: aggregate_by_dimension(mothers.iter().map(|m| Some(m.ethnicity))),
        migrant_count: mothers.iter().filter(|m| m.migrant).count(),
        disability_count: mothers.iter().filter(|m| m.disability).count(),
        trans_identity_count: mothers.iter().filter(|m| m.trans_identity).count(),
        incarcerated_count: mothers.iter().filter(|m| m.incarcerated).count(),
        prenatal_control: evaluate_rate(
            controlled,
            with_known_control.len(),
            targets.prenatal_control.target,
            targets.prenatal_control.direction,
        ),
        uncontrolled_pregnancy: evaluate_rate(
            uncontrolled,
            with_known_control.len(),
            targets.uncontrolled_pregnancy.target,
            targets.uncontrolled_pregnancy.direction,
        ),
    })
}

fn episode_indicators(
    period: &ResolvedPeriod,
    snapshot: &RecordSnapshot,
    filter: &CohortFilter,
) -> EpisodeIndicators {
    let episodes = episodes_in_window(snapshot, period, filter);

    let stays: Vec<i64> = episodes
        .iter()
        .filter_map(|e| e.length_of_stay_days())
        .collect();

    EpisodeIndicators {
        total_admissions: episodes.len(),
        currently_admitted: episodes
            .iter()
            .filter(|e| e.state == EpisodeState::Admitted)
            .count(),
        maternal_admissions: episodes
            .iter()
            .filter(|e| e.kind == EpisodeKind::Maternal)
            .count(),
        neonatal_admissions: episodes
            .iter()
            .filter(|e| e.kind == EpisodeKind::NeonatalUnit)
            .count(),
        mean_length_of_stay_days: if stays.is_empty() {
            None
        } else {
            Some(round1(stays.iter().sum::<i64>() as f64 / stays.len() as f64))
        },
        max_length_of_stay_days: stays.iter().max().copied(),
        by_service: tally_keys(episodes.iter().map(|e| e.service.clone())),
    }
}
