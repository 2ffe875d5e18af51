//! Workforce insights: heuristic analytics over employee and member records.
//!
//! The engine takes people, organizational units and roles from a
//! [`source::RecordSource`] and derives five independent views:
//! turnover risk, performance cohorts, salary outliers, team structure
//! and skill gaps. See [`insights::InsightsEngine`].

pub mod analysis;
pub mod clock;
pub mod clustering;
pub mod config;
pub mod demo;
pub mod error;
pub mod insights;
pub mod name_generator;
pub mod record;
pub mod rng;
pub mod salary_outliers;
pub mod skill_gaps;
pub mod source;
pub mod stats;
pub mod store;
pub mod team_structure;
pub mod turnover_risk;
pub mod types;
