//! Analysis trait.
//!
//! RULE: Every insight view implements Analysis.
//! An analysis reads only the shared RecordSnapshot and its own
//! context; it never fetches, and never sees another analysis's output.

use crate::{
    config::InsightsConfig,
    error::InsightsResult,
    rng::{AnalysisRng, AnalysisSlot},
    source::RecordSnapshot,
    types::EpochMillis,
};

/// Per-run inputs an analysis may use besides the records.
pub struct AnalysisContext<'a> {
    pub now_ms: EpochMillis,
    pub config: &'a InsightsConfig,
    /// This analysis's own deterministic stream.
    pub rng:    AnalysisRng,
}

/// The contract every insight view must fulfill.
pub trait Analysis: Sync {
    type Output: Send;

    /// Stable slot. Also names the analysis in logs.
    fn slot(&self) -> AnalysisSlot;

    /// Compute this view from the snapshot.
    fn run(
        &self,
        snapshot: &RecordSnapshot,
        ctx: &mut AnalysisContext<'_>,
    ) -> InsightsResult<Self::Output>;

    /// The documented empty result used when `run` fails.
    fn fallback(&self, config: &InsightsConfig) -> Self::Output;

    fn name(&self) -> &'static str {
        self.slot().name()
    }
}
