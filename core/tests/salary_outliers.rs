use workforce_core::{
    config::SalaryOutlierConfig,
    record::Person,
    salary_outliers::detect,
    stats::{mean, population_std_dev, z_score},
};

fn unit(dept: &str, salaries: &[Option<f64>]) -> Vec<Person> {
    salaries
        .iter()
        .enumerate()
        .map(|(i, s)| Person::new(format!("{dept}-{i}"), dept, *s, 0))
        .collect()
}

fn known(salaries: &[f64]) -> Vec<Option<f64>> {
    salaries.iter().copied().map(Some).collect()
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// [40k, 40k, 120k]: mean 66 667, population std ≈ 37 712, z ≈ 1.414.
#[test]
fn three_member_unit_below_threshold_has_no_outliers() {
    let salaries = [40_000.0, 40_000.0, 120_000.0];
    let m = mean(&salaries).unwrap();
    let sd = population_std_dev(&salaries, m);
    assert!((m - 66_666.67).abs() < 0.01);
    assert!((sd - 37_712.36).abs() < 0.01, "std was {sd}");
    let z = z_score(120_000.0, m, sd).unwrap();
    assert!((z - 1.414).abs() < 0.001, "z was {z}");

    let result = detect(&unit("d", &known(&salaries)), &SalaryOutlierConfig::default());
    assert!(result.overperforming.is_empty());
    assert!(result.underperforming.is_empty());
}

/// With population std, two equal values and one odd value always give the
/// odd one z = √2, however far it sits. Three members can never exceed 1.5.
#[test]
fn three_member_unit_caps_z_at_sqrt_two() {
    let salaries = [40_000.0, 40_000.0, 200_000.0];
    let m = mean(&salaries).unwrap();
    let z = z_score(200_000.0, m, population_std_dev(&salaries, m)).unwrap();
    assert!((z - 2f64.sqrt()).abs() < 1e-9);

    let result = detect(&unit("d", &known(&salaries)), &SalaryOutlierConfig::default());
    assert!(result.overperforming.is_empty());
}

/// [40k ×4, 200k]: mean 72k, std 64k, z = 2.0.
#[test]
fn high_salary_in_larger_unit_is_overperforming() {
    let people = unit("d", &known(&[40_000.0, 40_000.0, 40_000.0, 40_000.0, 200_000.0]));
    let result = detect(&people, &SalaryOutlierConfig::default());

    assert_eq!(result.overperforming.len(), 1);
    assert_eq!(result.overperforming[0].id, "d-4");
    assert!(result.underperforming.is_empty());
}

/// [100k ×4, 20k]: mean 84k, std 32k, z = −2.0.
#[test]
fn low_salary_in_larger_unit_is_underperforming() {
    let people = unit("d", &known(&[100_000.0, 100_000.0, 100_000.0, 100_000.0, 20_000.0]));
    let result = detect(&people, &SalaryOutlierConfig::default());

    assert_eq!(result.underperforming.len(), 1);
    assert_eq!(result.underperforming[0].id, "d-4");
    assert!(result.overperforming.is_empty());
}

#[test]
fn two_member_unit_never_contributes() {
    let people = unit("pair", &known(&[10_000.0, 1_000_000.0]));
    let result = detect(&people, &SalaryOutlierConfig::default());
    assert!(result.overperforming.is_empty());
    assert!(result.underperforming.is_empty());
}

#[test]
fn identical_salaries_are_skipped_without_nan() {
    let people = unit("flat", &known(&[50_000.0; 6]));
    let result = detect(&people, &SalaryOutlierConfig::default());
    assert!(result.overperforming.is_empty());
    assert!(result.underperforming.is_empty());
}

/// Null salaries count toward group size but not toward the statistics.
#[test]
fn null_salaries_are_excluded_from_statistics() {
    let mut salaries = known(&[40_000.0, 40_000.0, 40_000.0, 40_000.0, 200_000.0]);
    salaries.push(None);
    salaries.push(None);
    let result = detect(&unit("d", &salaries), &SalaryOutlierConfig::default());
    assert_eq!(result.overperforming.len(), 1);
    assert!(result.overperforming.iter().all(|p| p.salary.is_some()));

    // Two salaried members plus one without: group size 3, yet z only over two values.
    let sparse = unit("s", &[Some(10_000.0), Some(90_000.0), None]);
    let result = detect(&sparse, &SalaryOutlierConfig::default());
    assert!(result.overperforming.is_empty() && result.underperforming.is_empty());
}

#[test]
fn no_person_is_both_over_and_under() {
    let mut people = unit("a", &known(&[30_000.0, 31_000.0, 29_000.0, 30_500.0, 90_000.0, 5_000.0]));
    people.extend(unit("b", &known(&[70_000.0, 72_000.0, 71_000.0, 140_000.0, 69_000.0])));
    people.extend(unit("c", &known(&[1.0, 1_000_000.0])));

    let result = detect(&people, &SalaryOutlierConfig::default());
    for over in &result.overperforming {
        assert!(
            !result.underperforming.iter().any(|u| u.id == over.id),
            "{} is in both lists",
            over.id
        );
    }
    assert!(!result.overperforming.iter().any(|p| p.department_id == "c"));
}
