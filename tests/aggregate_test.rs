mod common;

#[cfg(test)]
mod tests {
    use crate::common::{at, birth, newborn, snapshot_for};
    use rem_stats::aggregate::{
        CohortFilter, aggregate_banded, aggregate_by_dimension, births_in_window,
    };
    use rem_stats::classify::WeightBand;
    use rem_stats::models::birth::BirthType;
    use rem_stats::period::{Granularity, ResolvedPeriod};
    use chrono::NaiveDate;

    fn march_2025() -> ResolvedPeriod {
        ResolvedPeriod::resolve(
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
            Granularity::Day,
        )
        .unwrap()
    }

    #[test]
    fn birth_type_aggregation_scenario() {
        // 7 births: 5 vaginal, 2 emergency cesarean
        let mut births = Vec::new();
        for i in 0..5 {
            births.push(birth(&format!("v{i}"), at(2025, 3, 10), BirthType::Vaginal));
        }
        for i in 0..2 {
            births.push(birth(
                &format!("c{i}"),
                at(2025, 3, 11),
                BirthType::EmergencyCesarean,
            ));
        }
        let snapshot = snapshot_for(births, Vec::new());

        let in_window = births_in_window(&snapshot, &march_2025(), &CohortFilter::none());
        let result = aggregate_by_dimension(in_window.iter().map(|b| Some(b.birth_type)));

        assert_eq!(result.total, 7);

        let vaginal = result.group("vaginal").unwrap();
        assert_eq!(vaginal.count, 5);
        assert_eq!(vaginal.percentage_of_total, 71.4);

        let cesarean = result.group("cesarea_urgencia").unwrap();
        assert_eq!(cesarean.count, 2);
        assert_eq!(cesarean.percentage_of_total, 28.6);

        // Every declared type band is present, the rest with count 0
        assert_eq!(result.groups.len(), BirthType::ALL.len());
        for key in ["cesarea_electiva", "domicilio", "prehospitalario"] {
            assert_eq!(result.count_of(key), 0);
        }
    }

    #[test]
    fn weight_band_aggregation_scenario() {
        // 4 newborns: 2600 g, 3100 g, 1400 g, 4100 g
        let weights = [2600, 3100, 1400, 4100];
        let result =
            aggregate_banded(weights.iter().map(|w| Some(*w)), WeightBand::classify).unwrap();

        assert_eq!(result.total, 4);
        assert_eq!(result.count_of("1000_1499"), 1);
        assert_eq!(result.count_of("2500_2999"), 1);
        assert_eq!(result.count_of("3000_3999"), 1);
        assert_eq!(result.count_of("4000_o_mas"), 1);
        assert_eq!(result.count_of("menos_500"), 0);
        assert_eq!(result.count_of("2000_2499"), 0);
        assert_eq!(result.groups.len(), WeightBand::ALL.len());
    }

    #[test]
    fn band_counts_round_trip_to_non_null_total() {
        let weights = vec![
            Some(450),
            Some(800),
            Some(1200),
            Some(1700),
            Some(2300),
            Some(2800),
            Some(3500),
            Some(4200),
            None,
            None,
        ];
        let non_null = weights.iter().filter(|w| w.is_some()).count();

        let result = aggregate_banded(weights, WeightBand::classify).unwrap();
        let band_sum: usize = result.groups.iter().map(|g| g.count).sum();

        assert_eq!(band_sum, non_null);
        assert_eq!(result.total, non_null);
        assert_eq!(result.unclassified, 2);
    }

    #[test]
    fn type_filter_is_an_intersection_with_the_window() {
        let births = vec![
            birth("a", at(2025, 3, 5), BirthType::Vaginal),
            birth("b", at(2025, 3, 6), BirthType::ElectiveCesarean),
            // outside the window
            birth("c", at(2025, 4, 6), BirthType::Vaginal),
        ];
        let snapshot = snapshot_for(births, Vec::new());

        let filter = CohortFilter {
            birth_type: Some(BirthType::Vaginal),
            ..CohortFilter::none()
        };
        let in_window = births_in_window(&snapshot, &march_2025(), &filter);

        assert_eq!(in_window.len(), 1);
        assert_eq!(in_window[0].id, "a");
    }

    #[test]
    fn newborn_cohort_follows_window_births() {
        let births = vec![birth("a", at(2025, 3, 5), BirthType::Vaginal)];
        let newborns = vec![
            newborn("n1", "a", Some(3300)),
            newborn("n2", "elsewhere", Some(2900)),
        ];
        let snapshot = snapshot_for(births, newborns);

        let in_window = births_in_window(&snapshot, &march_2025(), &CohortFilter::none());
        let of_births = rem_stats::aggregate::newborns_of_births(
            &snapshot,
            &in_window,
            &CohortFilter::none(),
        );
        assert_eq!(of_births.len(), 1);
        assert_eq!(of_births[0].id, "n1");
    }
}
