//! Structural balance: recommended team size and units far from it.

use crate::{
    analysis::{Analysis, AnalysisContext},
    config::{InsightsConfig, TeamStructureConfig},
    error::InsightsResult,
    record::{OrganizationalUnit, Person},
    rng::AnalysisSlot,
    source::RecordSnapshot,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamStructure {
    pub optimal_team_size:      u32,
    pub unbalanced_departments: Vec<OrganizationalUnit>,
}

impl TeamStructure {
    pub fn empty(config: &TeamStructureConfig) -> Self {
        Self {
            optimal_team_size:      config.min_team_size,
            unbalanced_departments: Vec::new(),
        }
    }
}

/// People per referenced unit. Only units someone belongs to appear.
pub fn headcounts(people: &[Person]) -> HashMap<&str, usize> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for person in people {
        *counts.entry(person.department_id.as_str()).or_default() += 1;
    }
    counts
}

/// Rounded mean headcount over occupied units, clamped to the configured
/// range. No occupied units gives the lower bound.
pub fn optimal_team_size(counts: &HashMap<&str, usize>, config: &TeamStructureConfig) -> u32 {
    if counts.is_empty() {
        return config.min_team_size;
    }
    let avg = counts.values().sum::<usize>() as f64 / counts.len() as f64;
    let rounded = avg.round().min(u32::MAX as f64) as u32;
    rounded.clamp(config.min_team_size, config.max_team_size)
}

pub fn analyze(
    people: &[Person],
    units: &[OrganizationalUnit],
    config: &TeamStructureConfig,
) -> TeamStructure {
    let counts = headcounts(people);
    let optimal = optimal_team_size(&counts, config);
    let upper = optimal as f64 * config.oversize_factor;
    let lower = optimal as f64 * config.undersize_factor;

    let unbalanced_departments = units
        .iter()
        .filter(|unit| {
            let n = counts.get(unit.id.as_str()).copied().unwrap_or(0);
            let n = n as f64;
            n > upper || (n > 0.0 && n < lower)
        })
        .cloned()
        .collect();

    TeamStructure { optimal_team_size: optimal, unbalanced_departments }
}

pub struct TeamStructureAnalysis;

impl Analysis for TeamStructureAnalysis {
    type Output = TeamStructure;

    fn slot(&self) -> AnalysisSlot {
        AnalysisSlot::TeamStructure
    }

    fn run(
        &self,
        snapshot: &RecordSnapshot,
        ctx: &mut AnalysisContext<'_>,
    ) -> InsightsResult<TeamStructure> {
        let result = analyze(snapshot.people()?, snapshot.units()?, &ctx.config.team_structure);
        log::debug!(
            "Team structure: optimal size {}, {} unbalanced units",
            result.optimal_team_size,
            result.unbalanced_departments.len()
        );
        Ok(result)
    }

    fn fallback(&self, config: &InsightsConfig) -> TeamStructure {
        TeamStructure::empty(&config.team_structure)
    }
}
