//! The insights aggregator.
//!
//! EXECUTION:
//!   1. Fetch people, units and roles once into a RecordSnapshot.
//!      A failed fetch is logged and leaves that collection absent.
//!   2. Run the five analyses on scoped threads, all borrowing the
//!      same immutable snapshot. No analysis writes shared state.
//!   3. Join in fixed order. An analysis that errors or panics
//!      contributes its fallback; the other four are unaffected.
//!
//! RULES:
//!   - ai_insights() always returns a complete AiInsights.
//!   - Each analysis draws randomness only from its own RngBank slot.
//!   - "Now" is read once per aggregation, so every analysis agrees on tenure.

use crate::{
    analysis::{Analysis, AnalysisContext},
    clock::AnalysisClock,
    clustering::{PerformanceClusterAnalysis, PerformanceClusters},
    config::InsightsConfig,
    error::InsightsResult,
    rng::RngBank,
    salary_outliers::{SalaryOutlierAnalysis, SalaryOutliers},
    skill_gaps::SkillGapAnalysis,
    source::{RecordSnapshot, RecordSource},
    team_structure::{TeamStructure, TeamStructureAnalysis},
    turnover_risk::{TurnoverRisk, TurnoverRiskAnalysis},
    types::EpochMillis,
};
use serde::{Deserialize, Serialize};
use std::thread;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AiInsights {
    pub turnover_risk:        TurnoverRisk,
    pub performance_clusters: PerformanceClusters,
    pub salary_outliers:      SalaryOutliers,
    pub team_structure:       TeamStructure,
    pub skill_gaps:           Vec<String>,
}

pub struct InsightsEngine {
    pub config:   InsightsConfig,
    pub rng_bank: RngBank,
    pub clock:    AnalysisClock,
}

impl InsightsEngine {
    pub fn new(config: InsightsConfig, rng_bank: RngBank, clock: AnalysisClock) -> Self {
        Self { config, rng_bank, clock }
    }

    /// Production wiring: system clock, and a wall-clock seed unless one is given.
    pub fn build(config: InsightsConfig, seed: Option<u64>) -> Self {
        let rng_bank = match seed {
            Some(s) => RngBank::new(s),
            None    => RngBank::from_time(),
        };
        log::debug!("Insights engine seeded with {}", rng_bank.master_seed());
        Self::new(config, rng_bank, AnalysisClock::System)
    }

    /// Fetch once from `source`, then compute every view.
    pub fn ai_insights(&self, source: &dyn RecordSource) -> AiInsights {
        let snapshot = RecordSnapshot::fetch(source);
        self.insights_for(&snapshot)
    }

    /// Compute every view from an already-fetched snapshot.
    pub fn insights_for(&self, snapshot: &RecordSnapshot) -> AiInsights {
        let now_ms = self.clock.now_ms();

        thread::scope(|scope| {
            let turnover = scope.spawn(|| self.run(&TurnoverRiskAnalysis, snapshot, now_ms));
            let clusters = scope.spawn(|| self.run(&PerformanceClusterAnalysis, snapshot, now_ms));
            let outliers = scope.spawn(|| self.run(&SalaryOutlierAnalysis, snapshot, now_ms));
            let structure = scope.spawn(|| self.run(&TeamStructureAnalysis, snapshot, now_ms));
            let skills = scope.spawn(|| self.run(&SkillGapAnalysis, snapshot, now_ms));

            AiInsights {
                turnover_risk:        self.settle(&TurnoverRiskAnalysis, turnover.join()),
                performance_clusters: self.settle(&PerformanceClusterAnalysis, clusters.join()),
                salary_outliers:      self.settle(&SalaryOutlierAnalysis, outliers.join()),
                team_structure:       self.settle(&TeamStructureAnalysis, structure.join()),
                skill_gaps:           self.settle(&SkillGapAnalysis, skills.join()),
            }
        })
    }

    fn run<A: Analysis>(
        &self,
        analysis: &A,
        snapshot: &RecordSnapshot,
        now_ms: EpochMillis,
    ) -> InsightsResult<A::Output> {
        let mut ctx = AnalysisContext {
            now_ms,
            config: &self.config,
            rng: self.rng_bank.for_slot(analysis.slot()),
        };
        analysis.run(snapshot, &mut ctx)
    }

    fn settle<A: Analysis>(
        &self,
        analysis: &A,
        joined: thread::Result<InsightsResult<A::Output>>,
    ) -> A::Output {
        match joined {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                log::warn!("Analysis '{}' unavailable, using default: {e}", analysis.name());
                analysis.fallback(&self.config)
            }
            Err(_) => {
                log::warn!("Analysis '{}' panicked, using default", analysis.name());
                analysis.fallback(&self.config)
            }
        }
    }
}
