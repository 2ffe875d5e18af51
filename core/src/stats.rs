//! Aggregate statistics shared by several analyses.

use crate::record::Person;

/// Arithmetic mean. `None` for an empty sample.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation: sqrt(mean of squared deviations).
/// Returns 0.0 for an empty sample.
pub fn population_std_dev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Standard score of `value`. `None` when the spread is zero or not finite,
/// so callers skip z-score logic instead of producing NaN or infinity.
pub fn z_score(value: f64, mean: f64, std_dev: f64) -> Option<f64> {
    if std_dev > 0.0 && std_dev.is_finite() {
        Some((value - mean) / std_dev)
    } else {
        None
    }
}

/// Each person's salary divided by the mean of all recorded salaries.
/// People without a salary, or a pool with no usable mean, get 0.0.
/// A pool whose recorded salaries are all zero has no usable mean, so
/// everyone gets 0.0 and scores the maximum salary-ratio risk rather
/// than a NaN ratio that would score nothing.
pub fn salary_ratios(people: &[Person]) -> Vec<f64> {
    let known: Vec<f64> = people.iter().filter_map(Person::known_salary).collect();
    let pool_mean = mean(&known).filter(|m| *m > 0.0);
    people
        .iter()
        .map(|p| match (p.known_salary(), pool_mean) {
            (Some(salary), Some(m)) => salary / m,
            _ => 0.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_is_none() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[2.0, 4.0]), Some(3.0));
    }

    #[test]
    fn population_std_dev_matches_hand_calculation() {
        let xs = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let m = mean(&xs).unwrap();
        assert!((population_std_dev(&xs, m) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn missing_salary_gets_zero_ratio() {
        let people = vec![
            Person::new("a", "d", Some(50_000.0), 0),
            Person::new("b", "d", Some(150_000.0), 0),
            Person::new("c", "d", None, 0),
        ];
        assert_eq!(salary_ratios(&people), vec![0.5, 1.5, 0.0]);
    }

    #[test]
    fn all_zero_salaries_give_zero_ratios() {
        let people = vec![
            Person::new("a", "d", Some(0.0), 0),
            Person::new("b", "d", Some(0.0), 0),
            Person::new("c", "d", None, 0),
        ];
        let ratios = salary_ratios(&people);
        assert_eq!(ratios, vec![0.0, 0.0, 0.0]);
        assert!(ratios.iter().all(|r| r.is_finite()));
    }

    #[test]
    fn zero_spread_has_no_z_score() {
        assert_eq!(z_score(10.0, 10.0, 0.0), None);
        assert_eq!(z_score(12.0, 10.0, 2.0), Some(1.0));
    }
}
