//! Compensation outliers: per-unit z-score screening of salaries.

use crate::{
    analysis::{Analysis, AnalysisContext},
    config::{InsightsConfig, SalaryOutlierConfig},
    error::InsightsResult,
    record::Person,
    rng::AnalysisSlot,
    source::RecordSnapshot,
    stats::{mean, population_std_dev, z_score},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalaryOutliers {
    /// Paid well above their unit's mean.
    pub overperforming:  Vec<Person>,
    /// Paid well below their unit's mean.
    pub underperforming: Vec<Person>,
}

/// Group people by `department_id`, keeping first-appearance order.
pub fn group_by_unit(people: &[Person]) -> Vec<(&str, Vec<&Person>)> {
    let mut groups: Vec<(&str, Vec<&Person>)> = Vec::new();
    for person in people {
        match groups.iter_mut().find(|(id, _)| *id == person.department_id) {
            Some((_, members)) => members.push(person),
            None => groups.push((person.department_id.as_str(), vec![person])),
        }
    }
    groups
}

pub fn detect(people: &[Person], config: &SalaryOutlierConfig) -> SalaryOutliers {
    let mut result = SalaryOutliers::default();

    for (unit_id, members) in group_by_unit(people) {
        if members.len() < config.min_group_size {
            continue;
        }
        let salaries: Vec<f64> = members.iter().filter_map(|p| p.known_salary()).collect();
        let Some(unit_mean) = mean(&salaries) else {
            continue;
        };
        let std_dev = population_std_dev(&salaries, unit_mean);

        for person in members {
            let Some(z) = person
                .known_salary()
                .and_then(|s| z_score(s, unit_mean, std_dev))
            else {
                continue;
            };
            if z > config.z_threshold {
                result.overperforming.push(person.clone());
            } else if z < -config.z_threshold {
                result.underperforming.push(person.clone());
            }
        }
        log::trace!("Unit {unit_id}: mean {unit_mean:.0}, std {std_dev:.0}");
    }
    result
}

pub struct SalaryOutlierAnalysis;

impl Analysis for SalaryOutlierAnalysis {
    type Output = SalaryOutliers;

    fn slot(&self) -> AnalysisSlot {
        AnalysisSlot::SalaryOutliers
    }

    fn run(
        &self,
        snapshot: &RecordSnapshot,
        ctx: &mut AnalysisContext<'_>,
    ) -> InsightsResult<SalaryOutliers> {
        let result = detect(snapshot.people()?, &ctx.config.salary_outliers);
        log::debug!(
            "Salary outliers: {} over, {} under",
            result.overperforming.len(),
            result.underperforming.len()
        );
        Ok(result)
    }

    fn fallback(&self, _config: &InsightsConfig) -> SalaryOutliers {
        SalaryOutliers::default()
    }
}
