//! Evolution series
//!
//! One point per day/week/month bucket spanning the window, with
//! zero-filled gaps: a requested range never has missing buckets. Bucket
//! counting is independent per bucket and runs data-parallel.

use chrono::NaiveDate;
use rayon::prelude::*;

use crate::indicators::bundle::{EvolutionPoint, EvolutionSeries};
use crate::models::snapshot::RecordSnapshot;
use crate::period::{PeriodBucket, ResolvedPeriod};

/// Build the evolution series of a window
#[must_use]
pub fn evolution_series(period: &ResolvedPeriod, snapshot: &RecordSnapshot) -> EvolutionSeries {
    let buckets = period.buckets();
    // (date, birth id, is cesarean) triples, extracted once for all buckets
    let births: Vec<(NaiveDate, &str, bool)> = snapshot
        .births
        .iter()
        .map(|b| {
            (
                b.occurred_at.date(),
                b.id.as_str(),
                b.birth_type.is_cesarean(),
            )
        })
        .collect();

    let points: Vec<EvolutionPoint> = buckets
        .par_iter()
        .map(|bucket| point_for(bucket, snapshot, &births))
        .collect();

    EvolutionSeries {
        granularity: period.granularity,
        points,
    }
}

fn in_bucket(bucket: &PeriodBucket, date: NaiveDate) -> bool {
    date >= bucket.start && date <= bucket.end
}

fn point_for(
    bucket: &PeriodBucket,
    snapshot: &RecordSnapshot,
    births: &[(NaiveDate, &str, bool)],
) -> EvolutionPoint {
    let bucket_births: Vec<&(NaiveDate, &str, bool)> = births
        .iter()
        .filter(|(date, _, _)| in_bucket(bucket, *date))
        .collect();

    let newborns = snapshot
        .newborns
        .iter()
        .filter(|n| {
            bucket_births
                .iter()
                .any(|(_, birth_id, _)| *birth_id == n.birth_id)
        })
        .count();

    EvolutionPoint {
        label: bucket.label.clone(),
        births: bucket_births.len(),
        newborns,
        cesareans: bucket_births
            .iter()
            .filter(|(_, _, cesarean)| *cesarean)
            .count(),
        complications: snapshot
            .complications
            .iter()
            .filter(|c| in_bucket(bucket, c.occurred_at.date()))
            .count(),
    }
}
