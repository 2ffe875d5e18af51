//! Turnover risk scoring: who is likely to leave.
//!
//! Score = tenure points + salary-ratio points, each taken from the first
//! configured band whose upper bound exceeds the value. With the default
//! bands a brand-new, underpaid person scores 6; a five-year veteran paid
//! at or above the mean scores 0.

use crate::{
    analysis::{Analysis, AnalysisContext},
    clock::tenure_years,
    config::{InsightsConfig, ScoreBand, TurnoverRiskConfig},
    error::InsightsResult,
    record::Person,
    rng::AnalysisSlot,
    source::RecordSnapshot,
    stats::salary_ratios,
    types::EpochMillis,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TurnoverRisk {
    pub high_risk_count:     usize,
    pub medium_risk_count:   usize,
    pub low_risk_count:      usize,
    pub high_risk_employees: Vec<Person>,
}

impl TurnoverRisk {
    pub fn total(&self) -> usize {
        self.high_risk_count + self.medium_risk_count + self.low_risk_count
    }
}

fn band_points(bands: &[ScoreBand], value: f64) -> u32 {
    bands
        .iter()
        .find(|b| value < b.below)
        .map(|b| b.points)
        .unwrap_or(0)
}

pub fn risk_score(tenure_years: f64, salary_ratio: f64, config: &TurnoverRiskConfig) -> u32 {
    band_points(&config.tenure_bands, tenure_years)
        + band_points(&config.salary_ratio_bands, salary_ratio)
}

pub fn classify(score: u32, config: &TurnoverRiskConfig) -> RiskLevel {
    if score >= config.high_risk_min_score {
        RiskLevel::High
    } else if score >= config.medium_risk_min_score {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Classify every person. Empty input yields all-zero counts.
pub fn assess(people: &[Person], now_ms: EpochMillis, config: &TurnoverRiskConfig) -> TurnoverRisk {
    let mut result = TurnoverRisk::default();
    for (person, ratio) in people.iter().zip(salary_ratios(people)) {
        let tenure = tenure_years(person.hire_date_ms, now_ms);
        match classify(risk_score(tenure, ratio, config), config) {
            RiskLevel::High => {
                result.high_risk_count += 1;
                result.high_risk_employees.push(person.clone());
            }
            RiskLevel::Medium => result.medium_risk_count += 1,
            RiskLevel::Low    => result.low_risk_count += 1,
        }
    }
    result
}

pub struct TurnoverRiskAnalysis;

impl Analysis for TurnoverRiskAnalysis {
    type Output = TurnoverRisk;

    fn slot(&self) -> AnalysisSlot {
        AnalysisSlot::TurnoverRisk
    }

    fn run(
        &self,
        snapshot: &RecordSnapshot,
        ctx: &mut AnalysisContext<'_>,
    ) -> InsightsResult<TurnoverRisk> {
        let people = snapshot.people()?;
        let result = assess(people, ctx.now_ms, &ctx.config.turnover_risk);
        log::debug!(
            "Turnover risk: {} high / {} medium / {} low",
            result.high_risk_count,
            result.medium_risk_count,
            result.low_risk_count
        );
        Ok(result)
    }

    fn fallback(&self, _config: &InsightsConfig) -> TurnoverRisk {
        TurnoverRisk::default()
    }
}
