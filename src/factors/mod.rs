//! Emission Factor Tables
//!
//! Two independent, immutable tables, one per calculator variant. They use
//! different tokens, units and magnitudes for similar behaviours and are
//! kept separate on purpose: reconciling them would change results.
//!
//! Lookups are exhaustive matches over the survey enums. The `Unanswered`
//! arm is the neutral element: 0 kg for additive weights, 1.0 for multipliers.

pub mod habits;
pub mod usage;

/// Neutral additive contribution for an unanswered question
pub const NO_EMISSIONS: f64 = 0.0;

/// Neutral multiplier for an unanswered question
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

/// Monthly inputs (packages, energy readings) are scaled by this to a year
pub const MONTHS_PER_YEAR: f64 = 12.0;
