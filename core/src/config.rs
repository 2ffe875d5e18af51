use serde::{Deserialize, Serialize};

// ── Turnover risk ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TurnoverRiskConfig {
    /// Tenure band upper bounds in years, paired with the points awarded
    /// below each bound. Tenure at or above the last bound scores 0.
    pub tenure_bands: Vec<ScoreBand>,
    /// Salary-to-mean ratio band upper bounds, same convention.
    pub salary_ratio_bands: Vec<ScoreBand>,
    pub high_risk_min_score: u32,
    pub medium_risk_min_score: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoreBand {
    pub below:  f64,
    pub points: u32,
}

impl ScoreBand {
    pub const fn new(below: f64, points: u32) -> Self {
        Self { below, points }
    }
}

impl Default for TurnoverRiskConfig {
    fn default() -> Self {
        Self {
            tenure_bands: vec![
                ScoreBand::new(1.0, 3),
                ScoreBand::new(2.0, 2),
                ScoreBand::new(5.0, 1),
            ],
            salary_ratio_bands: vec![
                ScoreBand::new(0.80, 3),
                ScoreBand::new(0.95, 1),
            ],
            high_risk_min_score: 4,
            medium_risk_min_score: 2,
        }
    }
}

// ── Performance clustering ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClusteringConfig {
    pub max_iterations: usize,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self { max_iterations: 100 }
    }
}

// ── Salary outliers ─────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SalaryOutlierConfig {
    /// |z| strictly above this is an outlier.
    pub z_threshold: f64,
    /// Units with fewer members are skipped.
    pub min_group_size: usize,
}

impl Default for SalaryOutlierConfig {
    fn default() -> Self {
        Self { z_threshold: 1.5, min_group_size: 3 }
    }
}

// ── Team structure ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TeamStructureConfig {
    pub min_team_size: u32,
    pub max_team_size: u32,
    /// Headcount above `oversize_factor * optimal` is unbalanced.
    pub oversize_factor: f64,
    /// Non-zero headcount below `undersize_factor * optimal` is unbalanced.
    pub undersize_factor: f64,
}

impl Default for TeamStructureConfig {
    fn default() -> Self {
        Self {
            min_team_size: 5,
            max_team_size: 9,
            oversize_factor: 1.5,
            undersize_factor: 0.5,
        }
    }
}

// ── Skill gaps ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SkillGapConfig {
    pub max_gaps: usize,
}

impl Default for SkillGapConfig {
    fn default() -> Self {
        Self { max_gaps: 3 }
    }
}

// ── Root ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InsightsConfig {
    pub turnover_risk:   TurnoverRiskConfig,
    pub clustering:      ClusteringConfig,
    pub salary_outliers: SalaryOutlierConfig,
    pub team_structure:  TeamStructureConfig,
    pub skill_gaps:      SkillGapConfig,
}

impl InsightsConfig {
    /// Load from a JSON file. Missing sections and fields take defaults.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: InsightsConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        let ts = &self.team_structure;
        if ts.min_team_size == 0 || ts.min_team_size > ts.max_team_size {
            anyhow::bail!(
                "team_structure: need 0 < min_team_size ({}) <= max_team_size ({})",
                ts.min_team_size,
                ts.max_team_size
            );
        }
        if self.salary_outliers.z_threshold <= 0.0 {
            anyhow::bail!("salary_outliers.z_threshold must be positive");
        }
        let ascending = |bands: &[ScoreBand]| bands.windows(2).all(|w| w[0].below < w[1].below);
        if !ascending(&self.turnover_risk.tenure_bands)
            || !ascending(&self.turnover_risk.salary_ratio_bands)
        {
            anyhow::bail!("turnover_risk bands must be in ascending order");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: InsightsConfig =
            serde_json::from_str(r#"{ "salary_outliers": { "z_threshold": 2.0 } }"#).unwrap();
        assert_eq!(config.salary_outliers.z_threshold, 2.0);
        assert_eq!(config.salary_outliers.min_group_size, 3);
        assert_eq!(config.team_structure, TeamStructureConfig::default());
    }

    #[test]
    fn inverted_team_bounds_rejected() {
        let mut config = InsightsConfig::default();
        config.team_structure.min_team_size = 10;
        assert!(config.validate().is_err());
    }
}
