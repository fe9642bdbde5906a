//! REM report assembly
//!
//! Pure composition of window aggregates into the fixed document shape.
//! No I/O, no formatting; a classification failure anywhere propagates
//! unchanged, since a malformed regulatory report is worse than a failed
//! request.

use log::{debug, info};
use rustc_hash::FxHashSet;

use crate::aggregate::{
    AggregationResult, CohortFilter, aggregate_banded, aggregate_nested, births_in_window,
    percentage, round1,
};
use crate::classify::{
    ApgarBand, BAND_TABLE_VERSION, GestationalAgeBand, MaternalAgeBand, WeightBand,
    classify_gestational_age, classify_maternal_age,
};
use crate::error::Result;
use crate::models::birth::{BirthRecord, BirthType, SterilizationSex};
use crate::models::newborn::NewbornRecord;
use crate::models::snapshot::RecordSnapshot;
use crate::period::ResolvedPeriod;
use crate::report::document::{
    BandCell, BirthSection, BirthTypeRow, DeliveryModeBreakdown, HepatitisBSection,
    ImmediateCareSection, OcularGroupRow, OcularProphylaxisSection, ProphylaxisCounts,
    RemReport, ResuscitationCounts, SterilizationSection, WeightSection,
};

/// Assemble the REM document for one `(month, year)`
pub fn assemble_rem(year: i32, month: u32, snapshot: &RecordSnapshot) -> Result<RemReport> {
    let period = ResolvedPeriod::for_month(year, month)?;
    let births = births_in_window(snapshot, &period, &CohortFilter::none());
    let newborns = newborns_of(snapshot, &births);

    info!(
        "Assembling REM {month:02}/{year}: {} births, {} newborns",
        births.len(),
        newborns.len()
    );

    Ok(RemReport {
        month,
        year,
        band_table_version: BAND_TABLE_VERSION.to_string(),
        births: birth_section(snapshot, &births)?,
        newborn_weight: weight_section(&newborns)?,
        immediate_care: immediate_care_section(&births, &newborns)?,
        ocular_prophylaxis: ocular_section(&newborns),
        hepatitis_b: hepatitis_b_section(&births, &newborns),
        sterilizations: sterilization_section(&births)?,
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

fn band_cells(result: &AggregationResult) -> Vec<BandCell> {
    result
        .groups
        .iter()
        .map(|g| BandCell {
            band: g.key.clone(),
            count: g.count,
        })
        .collect()
}

fn mean_of(values: &[i32]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(round1(
            values.iter().map(|v| f64::from(*v)).sum::<f64>() / values.len() as f64,
        ))
    }
}

fn birth_section(snapshot: &RecordSnapshot, births: &[&BirthRecord]) -> Result<BirthSection> {
    let mothers = snapshot.mother_index();

    let pairs: Vec<(Option<BirthType>, Option<MaternalAgeBand>)> = births
        .iter()
        .map(|birth| {
            let age = mothers
                .get(birth.mother_id.as_str())
                .and_then(|m| m.age_years);
            Ok((Some(birth.birth_type), classify_maternal_age(age)?))
        })
        .collect::<Result<_>>()?;

    let maternal_age_unknown = pairs.iter().filter(|(_, band)| band.is_none()).count();
    let by_type_and_maternal_age = aggregate_nested(pairs)
        .into_iter()
        .map(|row| BirthTypeRow {
            birth_type: row.key,
            total: row.total,
            by_maternal_age: row
                .groups
                .into_iter()
                .map(|g| BandCell {
                    band: g.key,
                    count: g.count,
                })
                .collect(),
        })
        .collect();

    let gestational =
        aggregate_banded(
            births.iter().map(|b| b.gestational_age_weeks),
            GestationalAgeBand::classify,
        )?;
    let preterm_total = births
        .iter()
        .filter_map(|b| classify_gestational_age(b.gestational_age_weeks).transpose())
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .filter(GestationalAgeBand::is_preterm)
        .count();

    let documented_weeks: Vec<i32> =
        births.iter().filter_map(|b| b.gestational_age_weeks).collect();

    Ok(BirthSection {
        total: births.len(),
        by_type_and_maternal_age,
        maternal_age_unknown,
        by_gestational_age: band_cells(&gestational),
        gestational_age_unknown: gestational.unclassified,
        preterm_total,
        mean_gestational_age: mean_of(&documented_weeks),
    })
}

fn weight_section(newborns: &[&NewbornRecord]) -> Result<WeightSection> {
    let weights = aggregate_banded(
        newborns.iter().map(|n| n.weight_grams),
        WeightBand::classify,
    )?;

    let low_birth_weight = newborns
        .iter()
        .filter_map(|n| n.weight_grams.map(WeightBand::classify))
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .filter(WeightBand::is_low_birth_weight)
        .count();

    let documented: Vec<i32> = newborns.iter().filter_map(|n| n.weight_grams).collect();

    Ok(WeightSection {
        by_band: band_cells(&weights),
        total: newborns.len(),
        unweighed: weights.unclassified,
        low_birth_weight,
        mean_weight_grams: mean_of(&documented),
    })
}

fn mode_breakdown(
    newborns: &[&NewbornRecord],
    births: &[&BirthRecord],
    include: impl Fn(BirthType) -> bool,
) -> Result<DeliveryModeBreakdown> {
    let included_births: FxHashSet<&str> = births
        .iter()
        .filter(|b| include(b.birth_type))
        .map(|b| b.id.as_str())
        .collect();

    let of_mode: Vec<&&NewbornRecord> = newborns
        .iter()
        .filter(|n| included_births.contains(n.birth_id.as_str()))
        .collect();

    let mut apgar_5_low = 0usize;
    for newborn in &of_mode {
        if let Some(score) = newborn.apgar_5min {
            if ApgarBand::classify(score)? == ApgarBand::Low {
                apgar_5_low += 1;
            }
        }
    }

    Ok(DeliveryModeBreakdown {
        total: of_mode.len(),
        apgar_5_low,
        advanced_resuscitation: of_mode.iter().filter(|n| n.resuscitation_advanced).count(),
    })
}

fn immediate_care_section(
    births: &[&BirthRecord],
    newborns: &[&NewbornRecord],
) -> Result<ImmediateCareSection> {
    let apgar_1 = aggregate_banded(newborns.iter().map(|n| n.apgar_1min), ApgarBand::classify)?;
    let apgar_5 = aggregate_banded(newborns.iter().map(|n| n.apgar_5min), ApgarBand::classify)?;

    debug!(
        "Immediate care: {} newborns, {} without 1-minute Apgar",
        newborns.len(),
        apgar_1.unclassified
    );

    Ok(ImmediateCareSection {
        total_newborns: newborns.len(),
        prophylaxis: ProphylaxisCounts {
            ocular: newborns.iter().filter(|n| n.ocular_prophylaxis).count(),
            hepatitis_b: newborns.iter().filter(|n| n.hepatitis_b_vaccine).count(),
            hepatitis_b_complete: newborns
                .iter()
                .filter(|n| n.hepatitis_b_complete_protocol)
                .count(),
        },
        apgar_1: band_cells(&apgar_1),
        apgar_1_unknown: apgar_1.unclassified,
        apgar_5: band_cells(&apgar_5),
        apgar_5_unknown: apgar_5.unclassified,
        resuscitation: ResuscitationCounts {
            basic: newborns.iter().filter(|n| n.resuscitation_basic).count(),
            advanced: newborns.iter().filter(|n| n.resuscitation_advanced).count(),
            any: newborns.iter().filter(|n| n.required_resuscitation()).count(),
        },
        encephalopathy: newborns.iter().filter(|n| n.encephalopathy.is_some()).count(),
        vaginal: mode_breakdown(newborns, births, |t| {
            t.is_vaginal() && t != BirthType::Instrumental
        })?,
        instrumental: mode_breakdown(newborns, births, |t| t == BirthType::Instrumental)?,
        cesarean: mode_breakdown(newborns, births, |t| t.is_cesarean())?,
    })
}

fn ocular_section(newborns: &[&NewbornRecord]) -> OcularProphylaxisSection {
    // Disjoint by registry convention: indigenous takes precedence over
    // migrant, everything else falls under "otros".
    let group_of = |n: &NewbornRecord| -> &'static str {
        if n.indigenous {
            "pueblos_originarios"
        } else if n.migrant {
            "migrantes"
        } else {
            "otros"
        }
    };

    let groups = ["pueblos_originarios", "migrantes", "otros"]
        .into_iter()
        .map(|group| OcularGroupRow {
            group: group.to_string(),
            with_prophylaxis: newborns
                .iter()
                .filter(|n| group_of(n) == group && n.ocular_prophylaxis)
                .count(),
            without_prophylaxis: newborns
                .iter()
                .filter(|n| group_of(n) == group && !n.ocular_prophylaxis)
                .count(),
        })
        .collect();

    OcularProphylaxisSection {
        with_prophylaxis: newborns.iter().filter(|n| n.ocular_prophylaxis).count(),
        without_prophylaxis: newborns.iter().filter(|n| !n.ocular_prophylaxis).count(),
        groups,
    }
}

fn hepatitis_b_section(
    births: &[&BirthRecord],
    newborns: &[&NewbornRecord],
) -> HepatitisBSection {
    let exposed: Vec<&&NewbornRecord> = newborns.iter().filter(|n| n.hbv_exposed()).collect();

    let exposed_birth_ids: FxHashSet<&str> =
        exposed.iter().map(|n| n.birth_id.as_str()).collect();
    let mothers_positive: FxHashSet<&str> = births
        .iter()
        .filter(|b| exposed_birth_ids.contains(b.id.as_str()))
        .map(|b| b.mother_id.as_str())
        .collect();

    let complete_among_exposed = exposed
        .iter()
        .filter(|n| n.hepatitis_b_complete_protocol)
        .count();

    HepatitisBSection {
        mothers_positive: mothers_positive.len(),
        maternal_status_unknown: newborns
            .iter()
            .filter(|n| n.mother_hbsag_positive.is_none())
            .count(),
        exposed_newborns: exposed.len(),
        vaccinated_24h: newborns.iter().filter(|n| n.hepatitis_b_vaccine).count(),
        complete_protocol: newborns
            .iter()
            .filter(|n| n.hepatitis_b_complete_protocol)
            .count(),
        exposed_coverage: if exposed.is_empty() {
            None
        } else {
            Some(percentage(complete_among_exposed, exposed.len()))
        },
    }
}

fn sterilization_section(births: &[&BirthRecord]) -> Result<SterilizationSection> {
    let by_sex = |sex: SterilizationSex| -> Result<AggregationResult> {
        aggregate_banded(
            births
                .iter()
                .filter_map(|b| b.sterilization)
                .filter(|s| s.sex == sex)
                .map(|s| Some(s.age_years)),
            MaternalAgeBand::classify,
        )
    };

    let women = by_sex(SterilizationSex::Female)?;
    let men = by_sex(SterilizationSex::Male)?;

    Ok(SterilizationSection {
        total: women.total + men.total,
        women: band_cells(&women),
        men: band_cells(&men),
    })
}
