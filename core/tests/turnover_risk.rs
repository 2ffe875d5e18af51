use workforce_core::{
    clock::{tenure_years, years_before, AnalysisClock},
    config::{InsightsConfig, TurnoverRiskConfig},
    insights::InsightsEngine,
    record::Person,
    rng::RngBank,
    source::RecordSnapshot,
    turnover_risk::{assess, classify, risk_score, RiskLevel},
};

const NOW: i64 = 1_760_000_000_000;

fn person(id: &str, tenure_years: f64, salary: Option<f64>) -> Person {
    Person::new(id, "dept-a", salary, years_before(NOW, tenure_years))
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// New and underpaid scores the maximum 3 + 3; a five-year veteran paid at
/// the mean scores nothing.
#[test]
fn score_extremes_classify_high_and_low() {
    let config = TurnoverRiskConfig::default();

    let newcomer = risk_score(0.5, 0.5, &config);
    assert_eq!(newcomer, 6);
    assert_eq!(classify(newcomer, &config), RiskLevel::High);

    let veteran = risk_score(5.0, 0.95, &config);
    assert_eq!(veteran, 0);
    assert_eq!(classify(veteran, &config), RiskLevel::Low);
}

#[test]
fn band_boundaries_are_lower_inclusive() {
    let config = TurnoverRiskConfig::default();
    assert_eq!(risk_score(1.0, 1.0, &config), 2, "tenure exactly 1y is in the 1..2 band");
    assert_eq!(risk_score(2.0, 1.0, &config), 1);
    assert_eq!(risk_score(10.0, 0.8, &config), 1, "ratio exactly 0.8 is in the 0.8..0.95 band");
    assert_eq!(classify(2, &config), RiskLevel::Medium);
    assert_eq!(classify(4, &config), RiskLevel::High);
    assert_eq!(classify(1, &config), RiskLevel::Low);
}

/// Mean of known salaries is 80k. Ratios: 0.5, 1.25, 1.25, 1.0 (null → 0).
#[test]
fn assess_classifies_each_person() {
    let people = vec![
        person("new-underpaid", 0.5, Some(40_000.0)),
        person("veteran", 6.0, Some(100_000.0)),
        person("mid", 1.5, Some(100_000.0)),
        person("no-salary", 10.0, None),
    ];

    let risk = assess(&people, NOW, &TurnoverRiskConfig::default());

    assert_eq!(risk.high_risk_count, 1);
    assert_eq!(risk.medium_risk_count, 2, "mid scores 2, no-salary scores 3");
    assert_eq!(risk.low_risk_count, 1);
    assert_eq!(risk.high_risk_employees.len(), 1);
    assert_eq!(risk.high_risk_employees[0].id, "new-underpaid");
}

#[test]
fn counts_partition_every_input() {
    let config = TurnoverRiskConfig::default();

    let empty = assess(&[], NOW, &config);
    assert_eq!(empty.total(), 0);
    assert!(empty.high_risk_employees.is_empty());

    let people: Vec<Person> = (0..37)
        .map(|i| {
            let salary = if i % 5 == 0 { None } else { Some(30_000.0 + 2_500.0 * i as f64) };
            person(&format!("p{i}"), i as f64 * 0.3, salary)
        })
        .collect();
    let risk = assess(&people, NOW, &config);
    assert_eq!(risk.total(), people.len());
    assert_eq!(risk.high_risk_employees.len(), risk.high_risk_count);
}

/// With no salaries recorded anywhere, every ratio is 0 and the salary
/// component contributes its maximum.
#[test]
fn no_recorded_salaries_scores_every_ratio_as_zero() {
    let people = vec![person("a", 8.0, None), person("b", 8.0, None)];
    let risk = assess(&people, NOW, &TurnoverRiskConfig::default());
    assert_eq!(risk.medium_risk_count, 2);
}

/// Hire dates at the ends of the i64 range still produce a finite tenure.
#[test]
fn extreme_hire_dates_do_not_overflow() {
    assert!(tenure_years(i64::MIN, NOW) > 1e8);
    assert!(tenure_years(i64::MAX, NOW) < -1e8);
    assert!(tenure_years(i64::MIN, i64::MAX).is_finite());

    let people = vec![
        Person::new("ancient", "dept-a", Some(60_000.0), i64::MIN),
        Person::new("future", "dept-a", Some(60_000.0), i64::MAX),
        person("regular", 3.0, Some(60_000.0)),
    ];

    let risk = assess(&people, NOW, &TurnoverRiskConfig::default());
    assert_eq!(risk.total(), 3);
    assert_eq!(risk.low_risk_count, 2, "ancient scores 0, regular scores 1");
    assert_eq!(risk.medium_risk_count, 1, "future hire scores as brand new");

    let engine = InsightsEngine::new(InsightsConfig::default(), RngBank::new(11), AnalysisClock::fixed(NOW));
    let insights = engine.insights_for(&RecordSnapshot::complete(people, vec![], vec![]));
    assert_eq!(insights.turnover_risk.total(), 3);
    assert_eq!(insights.performance_clusters.cluster_counts.iter().sum::<usize>(), 3);
}
