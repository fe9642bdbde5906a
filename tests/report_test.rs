mod common;

#[cfg(test)]
mod tests {
    use crate::common::{at, birth, init_logging, newborn, snapshot_for};
    use rem_stats::models::birth::{BirthType, Sterilization, SterilizationSex};
    use rem_stats::models::snapshot::RecordSnapshot;
    use rem_stats::report::assemble_rem;

    #[test]
    fn empty_month_serializes_zeros_and_nulls_per_policy() {
        init_logging();
        let report = assemble_rem(2025, 6, &RecordSnapshot::new()).unwrap();

        assert_eq!(report.births.total, 0);
        assert_eq!(report.newborn_weight.total, 0);
        // Derived means are null, not zero, with an empty cohort
        assert_eq!(report.births.mean_gestational_age, None);
        assert_eq!(report.newborn_weight.mean_weight_grams, None);
        assert_eq!(report.hepatitis_b.exposed_coverage, None);

        // Dense shapes survive an empty month
        assert_eq!(report.births.by_type_and_maternal_age.len(), 8);
        assert_eq!(report.births.by_gestational_age.len(), 6);
        assert_eq!(report.newborn_weight.by_band.len(), 8);

        // No key is omitted on the wire
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["partos"]["total"], 0);
        assert!(json["partos"]["edad_gestacional_promedio"].is_null());
        assert!(json["hepatitis_b"]["cobertura_expuestos"].is_null());
        assert_eq!(json["esterilizaciones"]["total"], 0);
    }

    #[test]
    fn wire_field_names_are_frozen() {
        let report = assemble_rem(2025, 6, &RecordSnapshot::new()).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        for section in [
            "partos",
            "peso_recien_nacidos",
            "atencion_inmediata",
            "profilaxis_ocular",
            "hepatitis_b",
            "esterilizaciones",
        ] {
            assert!(json.get(section).is_some(), "missing section {section}");
        }
        assert_eq!(json["mes"], 6);
        assert_eq!(json["anio"], 2025);
    }

    #[test]
    fn weight_section_counts_and_unweighed() {
        let births = vec![birth("a", at(2025, 6, 10), BirthType::Vaginal)];
        let newborns = vec![
            newborn("n1", "a", Some(2600)),
            newborn("n2", "a", Some(1400)),
            newborn("n3", "a", None),
        ];
        let snapshot = snapshot_for(births, newborns);

        let report = assemble_rem(2025, 6, &snapshot).unwrap();
        let weight = &report.newborn_weight;

        assert_eq!(weight.total, 3); // independent total includes unweighed
        assert_eq!(weight.unweighed, 1);
        let cell = |band: &str| {
            weight
                .by_band
                .iter()
                .find(|c| c.band == band)
                .unwrap()
                .count
        };
        assert_eq!(cell("2500_2999"), 1);
        assert_eq!(cell("1000_1499"), 1);
        assert_eq!(weight.low_birth_weight, 1);
        assert_eq!(weight.mean_weight_grams, Some(2000.0));
    }

    #[test]
    fn preterm_aggregate_and_maternal_age_table() {
        let mut early = birth("a", at(2025, 6, 3), BirthType::EmergencyCesarean);
        early.gestational_age_weeks = Some(30);
        let mut late = birth("b", at(2025, 6, 4), BirthType::Vaginal);
        late.gestational_age_weeks = Some(40);
        let mut unknown = birth("c", at(2025, 6, 5), BirthType::Vaginal);
        unknown.gestational_age_weeks = None;

        let snapshot = snapshot_for(vec![early, late, unknown], Vec::new());
        let report = assemble_rem(2025, 6, &snapshot).unwrap();

        assert_eq!(report.births.total, 3);
        assert_eq!(report.births.preterm_total, 1);
        assert_eq!(report.births.gestational_age_unknown, 1);

        // fixture mothers are 28: every birth lands in the 20-34 band
        let vaginal_row = report
            .births
            .by_type_and_maternal_age
            .iter()
            .find(|r| r.birth_type == "vaginal")
            .unwrap();
        assert_eq!(vaginal_row.total, 2);
        let band = vaginal_row
            .by_maternal_age
            .iter()
            .find(|c| c.band == "20_34")
            .unwrap();
        assert_eq!(band.count, 2);
    }

    #[test]
    fn delivery_mode_sub_breakdowns() {
        let births = vec![
            birth("v", at(2025, 6, 2), BirthType::Vaginal),
            birth("i", at(2025, 6, 2), BirthType::Instrumental),
            birth("c", at(2025, 6, 2), BirthType::EmergencyCesarean),
        ];
        let mut depressed = newborn("n-c", "c", Some(3000));
        depressed.apgar_5min = Some(5);
        depressed.resuscitation_advanced = true;
        let newborns = vec![
            newborn("n-v", "v", Some(3200)),
            newborn("n-i", "i", Some(3400)),
            depressed,
        ];

        let report = assemble_rem(2025, 6, &snapshot_for(births, newborns)).unwrap();
        let care = &report.immediate_care;

        assert_eq!(care.total_newborns, 3);
        assert_eq!(care.vaginal.total, 1);
        assert_eq!(care.instrumental.total, 1);
        assert_eq!(care.cesarean.total, 1);
        assert_eq!(care.cesarean.apgar_5_low, 1);
        assert_eq!(care.cesarean.advanced_resuscitation, 1);
        assert_eq!(care.resuscitation.any, 1);
    }

    #[test]
    fn sterilization_split_by_sex_and_age_band() {
        let mut with_ligation = birth("a", at(2025, 6, 8), BirthType::ElectiveCesarean);
        with_ligation.sterilization = Some(Sterilization {
            sex: SterilizationSex::Female,
            age_years: 36,
        });
        let snapshot = snapshot_for(vec![with_ligation], Vec::new());

        let report = assemble_rem(2025, 6, &snapshot).unwrap();
        let section = &report.sterilizations;

        assert_eq!(section.total, 1);
        let over_35 = section.women.iter().find(|c| c.band == "35_o_mas").unwrap();
        assert_eq!(over_35.count, 1);
        assert!(section.men.iter().all(|c| c.count == 0));
    }

    #[test]
    fn negative_weight_fails_the_whole_report() {
        let births = vec![birth("a", at(2025, 6, 10), BirthType::Vaginal)];
        let newborns = vec![newborn("n1", "a", Some(-50))];
        let result = assemble_rem(2025, 6, &snapshot_for(births, newborns));
        assert!(result.is_err());
    }

    #[test]
    fn invalid_month_is_rejected() {
        assert!(assemble_rem(2025, 13, &RecordSnapshot::new()).is_err());
    }
}
