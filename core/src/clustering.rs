//! Performance clustering: k-means over (tenure, salary ratio).
//!
//! Cluster index → cohort name is positional: index 0 is always called
//! "High Performers" whatever its centroid looks like. Callers that need
//! a ranked meaning must inspect `centroids` themselves.

use crate::{
    analysis::{Analysis, AnalysisContext},
    clock::tenure_years,
    config::InsightsConfig,
    error::InsightsResult,
    record::Person,
    rng::{AnalysisRng, AnalysisSlot},
    source::RecordSnapshot,
    stats::salary_ratios,
    types::EpochMillis,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const CLUSTER_NAMES: [&str; 3] = ["High Performers", "Core Team", "Developing Talent"];

// ── Generic k-means ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct KMeans<const D: usize> {
    /// Cluster index per input point, in input order.
    pub assignments: Vec<usize>,
    pub centroids:   Vec<[f64; D]>,
    pub iterations:  usize,
}

fn squared_distance<const D: usize>(a: &[f64; D], b: &[f64; D]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum()
}

fn nearest<const D: usize>(point: &[f64; D], centroids: &[[f64; D]]) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, c) in centroids.iter().enumerate() {
        let d = squared_distance(point, c);
        if d < best_dist {
            best = i;
            best_dist = d;
        }
    }
    best
}

/// Lloyd's algorithm with Forgy initialization: `k` distinct input points,
/// drawn from `rng`, seed the centroids. Stops when no assignment changes
/// or after `max_iterations` passes. An emptied cluster keeps its centroid.
///
/// Returns `None` when there are fewer points than clusters.
pub fn kmeans<const D: usize>(
    points: &[[f64; D]],
    k: usize,
    max_iterations: usize,
    rng: &mut AnalysisRng,
) -> Option<KMeans<D>> {
    if k == 0 || points.len() < k {
        return None;
    }

    let mut centroids: Vec<[f64; D]> = rng
        .sample_indices(points.len(), k)
        .into_iter()
        .map(|i| points[i])
        .collect();
    let mut assignments = vec![usize::MAX; points.len()];
    let mut iterations = 0;

    while iterations < max_iterations.max(1) {
        iterations += 1;

        let mut changed = false;
        for (slot, point) in assignments.iter_mut().zip(points) {
            let c = nearest(point, &centroids);
            if *slot != c {
                *slot = c;
                changed = true;
            }
        }
        if !changed {
            break;
        }

        let mut sums = vec![[0.0; D]; k];
        let mut counts = vec![0usize; k];
        for (&c, point) in assignments.iter().zip(points) {
            counts[c] += 1;
            for (s, x) in sums[c].iter_mut().zip(point) {
                *s += x;
            }
        }
        for ((centroid, sum), &count) in centroids.iter_mut().zip(&sums).zip(&counts) {
            if count > 0 {
                for (dst, s) in centroid.iter_mut().zip(sum) {
                    *dst = s / count as f64;
                }
            }
        }
    }

    Some(KMeans { assignments, centroids, iterations })
}

// ── Performance cohorts ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceClusters {
    pub cluster_names:     Vec<String>,
    pub cluster_counts:    Vec<usize>,
    pub cluster_employees: BTreeMap<String, Vec<Person>>,
}

impl PerformanceClusters {
    /// All three cohorts present, none populated.
    pub fn empty() -> Self {
        Self {
            cluster_names:     CLUSTER_NAMES.iter().map(|n| n.to_string()).collect(),
            cluster_counts:    vec![0; CLUSTER_NAMES.len()],
            cluster_employees: CLUSTER_NAMES
                .iter()
                .map(|n| (n.to_string(), Vec::new()))
                .collect(),
        }
    }

    pub fn members(&self, name: &str) -> &[Person] {
        self.cluster_employees.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Default for PerformanceClusters {
    fn default() -> Self {
        Self::empty()
    }
}

/// Feature vector per person: (tenure years, salary ratio to mean).
pub fn features(people: &[Person], now_ms: EpochMillis) -> Vec<[f64; 2]> {
    people
        .iter()
        .zip(salary_ratios(people))
        .map(|(p, ratio)| [tenure_years(p.hire_date_ms, now_ms), ratio])
        .collect()
}

pub fn cluster_people(
    people: &[Person],
    now_ms: EpochMillis,
    max_iterations: usize,
    rng: &mut AnalysisRng,
) -> PerformanceClusters {
    let mut result = PerformanceClusters::empty();
    let points = features(people, now_ms);

    let Some(fit) = kmeans(&points, CLUSTER_NAMES.len(), max_iterations, rng) else {
        log::debug!(
            "Skipping clustering: {} people is fewer than {} clusters",
            people.len(),
            CLUSTER_NAMES.len()
        );
        return result;
    };

    for (person, &cluster) in people.iter().zip(&fit.assignments) {
        let name = CLUSTER_NAMES[cluster];
        result.cluster_counts[cluster] += 1;
        result
            .cluster_employees
            .entry(name.to_string())
            .or_default()
            .push(person.clone());
    }
    log::debug!(
        "Clustered {} people in {} iterations with rng '{}': {:?}",
        people.len(),
        fit.iterations,
        rng.name,
        result.cluster_counts
    );
    result
}

pub struct PerformanceClusterAnalysis;

impl Analysis for PerformanceClusterAnalysis {
    type Output = PerformanceClusters;

    fn slot(&self) -> AnalysisSlot {
        AnalysisSlot::Clustering
    }

    fn run(
        &self,
        snapshot: &RecordSnapshot,
        ctx: &mut AnalysisContext<'_>,
    ) -> InsightsResult<PerformanceClusters> {
        let people = snapshot.people()?;
        Ok(cluster_people(
            people,
            ctx.now_ms,
            ctx.config.clustering.max_iterations,
            &mut ctx.rng,
        ))
    }

    fn fallback(&self, _config: &InsightsConfig) -> PerformanceClusters {
        PerformanceClusters::empty()
    }
}
