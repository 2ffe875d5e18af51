//! Shared primitive types used across the analytics engine.

/// Milliseconds since the Unix epoch.
pub type EpochMillis = i64;

/// A stable, unique identifier for any record.
pub type EntityId = String;

/// Milliseconds in one 365-day year. Tenure is measured in these.
pub const MILLIS_PER_YEAR: f64 = 365.0 * 24.0 * 60.0 * 60.0 * 1000.0;
