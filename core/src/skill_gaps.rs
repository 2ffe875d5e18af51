//! Skill gap estimation from unfilled positions.

use crate::{
    analysis::{Analysis, AnalysisContext},
    config::{InsightsConfig, SkillGapConfig},
    error::InsightsResult,
    record::{Person, Role},
    rng::AnalysisSlot,
    source::RecordSnapshot,
};
use std::collections::HashSet;

/// Reference vocabulary, in priority order.
pub const SKILL_VOCABULARY: [&str; 8] = [
    "Data Analysis",
    "Project Management",
    "Cloud Computing",
    "Cybersecurity",
    "Machine Learning",
    "Digital Marketing",
    "Leadership",
    "Communication",
];

/// Reported when every position is filled.
pub const FALLBACK_SKILLS: [&str; 2] = [
    "Advanced Data Analytics",
    "Artificial Intelligence Implementation",
];

pub fn fallback_skills() -> Vec<String> {
    FALLBACK_SKILLS.iter().map(|s| s.to_string()).collect()
}

/// Roles nobody in `people` holds, in role order.
pub fn unmatched_roles<'a>(people: &[Person], roles: &'a [Role]) -> Vec<&'a Role> {
    let filled: HashSet<&str> = people
        .iter()
        .filter_map(|p| p.position_id.as_deref())
        .collect();
    roles.iter().filter(|r| !filled.contains(r.id.as_str())).collect()
}

pub fn estimate(people: &[Person], roles: &[Role], config: &SkillGapConfig) -> Vec<String> {
    let unmatched = unmatched_roles(people, roles).len();
    if unmatched == 0 {
        return fallback_skills();
    }
    SKILL_VOCABULARY
        .iter()
        .take(unmatched.min(config.max_gaps))
        .map(|s| s.to_string())
        .collect()
}

pub struct SkillGapAnalysis;

impl Analysis for SkillGapAnalysis {
    type Output = Vec<String>;

    fn slot(&self) -> AnalysisSlot {
        AnalysisSlot::SkillGaps
    }

    fn run(
        &self,
        snapshot: &RecordSnapshot,
        ctx: &mut AnalysisContext<'_>,
    ) -> InsightsResult<Vec<String>> {
        let gaps = estimate(snapshot.people()?, snapshot.roles()?, &ctx.config.skill_gaps);
        log::debug!("Skill gaps: {gaps:?}");
        Ok(gaps)
    }

    fn fallback(&self, _config: &InsightsConfig) -> Vec<String> {
        fallback_skills()
    }
}
