//! Analysis clock: supplies "now" for tenure calculations.
//!
//! Production runs read the system clock once per aggregation.
//! Tests pin a fixed instant so tenure bands are reproducible.

use crate::types::{EpochMillis, MILLIS_PER_YEAR};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AnalysisClock {
    System,
    Fixed { now_ms: EpochMillis },
}

impl AnalysisClock {
    pub fn fixed(now_ms: EpochMillis) -> Self {
        Self::Fixed { now_ms }
    }

    /// Current instant in epoch milliseconds.
    pub fn now_ms(&self) -> EpochMillis {
        match self {
            Self::System         => chrono::Utc::now().timestamp_millis(),
            Self::Fixed { now_ms } => *now_ms,
        }
    }
}

impl Default for AnalysisClock {
    fn default() -> Self {
        Self::System
    }
}

/// Elapsed years between `start_ms` and `now_ms`.
/// Start dates in the future yield a negative tenure, which scores as "new".
/// Computed in f64 so any pair of i64 instants is valid.
pub fn tenure_years(start_ms: EpochMillis, now_ms: EpochMillis) -> f64 {
    (now_ms as f64 - start_ms as f64) / MILLIS_PER_YEAR
}

/// Instant `years` before `now_ms`. Test and demo helper.
pub fn years_before(now_ms: EpochMillis, years: f64) -> EpochMillis {
    now_ms.saturating_sub((years * MILLIS_PER_YEAR).round() as EpochMillis)
}
