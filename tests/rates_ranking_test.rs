#[cfg(test)]
mod tests {
    use rem_stats::ranking::rank;
    use rem_stats::rates::{
        RateDirection, TrendDirection, compare_trend, evaluate_rate,
    };

    #[test]
    fn skin_to_skin_near_miss_scenario() {
        // target 90 higher-is-better, actual 76.0: missed, but the 14 pp
        // distance is below 20% of 90 (= 18), so it is a near miss
        let eval = evaluate_rate(76, 100, Some(90.0), RateDirection::HigherIsBetter);
        assert_eq!(eval.rate, 76.0);
        assert_eq!(eval.met, Some(false));
        assert!(eval.near_miss);
    }

    #[test]
    fn zero_cohort_never_produces_nan() {
        for count in [0usize, 1, 5, 100] {
            let eval = evaluate_rate(count, 0, Some(50.0), RateDirection::LowerIsBetter);
            assert_eq!(eval.rate, 0.0);
            assert!(eval.rate.is_finite());
        }
    }

    #[test]
    fn flat_cesarean_trend_scenario() {
        // current 10/50 = 20.0 vs previous 8/40 = 20.0
        let current = evaluate_rate(10, 50, None, RateDirection::LowerIsBetter);
        let previous = evaluate_rate(8, 40, None, RateDirection::LowerIsBetter);

        let trend = compare_trend(current.rate, Some(previous.rate)).unwrap();
        assert_eq!(trend.percent, 0.0);
        assert_eq!(trend.direction, TrendDirection::Flat);
    }

    #[test]
    fn zero_previous_propagates_as_no_trend() {
        assert!(compare_trend(12.5, Some(0.0)).is_none());
        assert!(compare_trend(12.5, None).is_none());
    }

    #[test]
    fn midwife_ranking_scenario() {
        // counts 12, 12, 7: the tied pair ordered by name, identical shares
        let ranking = rank(
            vec![("soto", 12), ("araya", 12), ("vargas", 7)],
            None,
        );

        assert_eq!(ranking.entries[0].name, "araya");
        assert_eq!(ranking.entries[1].name, "soto");
        assert_eq!(ranking.entries[2].name, "vargas");

        assert_eq!(ranking.entries[0].percentage_of_total, 38.7); // 12/31
        assert_eq!(
            ranking.entries[0].percentage_of_total,
            ranking.entries[1].percentage_of_total
        );
        assert_eq!(ranking.total, 31);
    }

    #[test]
    fn ranking_rerun_is_byte_identical() {
        let counts = vec![("p3", 4), ("p1", 4), ("p2", 4), ("p9", 1)];
        let first = serde_json::to_string(&rank(counts.clone(), Some(3))).unwrap();
        let second = serde_json::to_string(&rank(counts, Some(3))).unwrap();
        assert_eq!(first, second);
    }
}
