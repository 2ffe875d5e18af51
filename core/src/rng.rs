//! Deterministic random number generation.
//!
//! RULE: No analysis may call a platform RNG directly.
//! All randomness flows through AnalysisRng instances derived
//! from the single master seed held by the InsightsEngine.
//!
//! Each analysis slot gets its own stream, seeded from
//! (master_seed XOR slot_index * golden-ratio constant), so adding
//! an analysis never perturbs an existing analysis's stream.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG for a single analysis.
pub struct AnalysisRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl AnalysisRng {
    /// Create an analysis RNG from the master seed and a stable
    /// slot index. The index must never change once assigned.
    pub fn new(master_seed: u64, slot_index: u64) -> Self {
        let derived_seed = master_seed ^ (slot_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Uniform float in [lo, hi).
    pub fn range_f64(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Pick `k` distinct indices from [0, n) by partial Fisher-Yates.
    /// Returns fewer than `k` only when `n < k`.
    pub fn sample_indices(&mut self, n: usize, k: usize) -> Vec<usize> {
        let mut pool: Vec<usize> = (0..n).collect();
        let take = k.min(n);
        for i in 0..take {
            let j = i + self.next_u64_below((n - i) as u64) as usize;
            pool.swap(i, j);
        }
        pool.truncate(take);
        pool
    }
}

/// All analysis RNGs for a single engine, indexed by stable slot.
#[derive(Debug, Clone, Copy)]
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    /// Seed from the wall clock. Used when the caller supplies no seed.
    pub fn from_time() -> Self {
        let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
        Self::new(nanos as u64)
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    pub fn for_slot(&self, slot: AnalysisSlot) -> AnalysisRng {
        AnalysisRng::new(self.master_seed, slot as u64).with_name(slot.name())
    }
}

/// Stable analysis slot assignments.
/// NEVER reorder or remove entries. Only append.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum AnalysisSlot {
    TurnoverRisk = 0,
    Clustering = 1,
    SalaryOutliers = 2,
    TeamStructure = 3,
    SkillGaps = 4,
    DemoPopulation = 5,
}

impl AnalysisSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::TurnoverRisk => "turnover_risk",
            Self::Clustering => "performance_clusters",
            Self::SalaryOutliers => "salary_outliers",
            Self::TeamStructure => "team_structure",
            Self::SkillGaps => "skill_gaps",
            Self::DemoPopulation => "demo_population",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = RngBank::new(7).for_slot(AnalysisSlot::Clustering);
        let mut b = RngBank::new(7).for_slot(AnalysisSlot::Clustering);
        for _ in 0..32 {
            assert_eq!(a.next_u64_below(1000), b.next_u64_below(1000));
        }
    }

    #[test]
    fn sample_indices_are_distinct_and_in_range() {
        let mut rng = AnalysisRng::new(99, 0);
        for n in 3..20 {
            let mut picked = rng.sample_indices(n, 3);
            assert_eq!(picked.len(), 3);
            assert!(picked.iter().all(|&i| i < n));
            picked.sort_unstable();
            picked.dedup();
            assert_eq!(picked.len(), 3, "indices must be distinct for n={n}");
        }
        assert_eq!(rng.sample_indices(2, 3).len(), 2);
    }
}
