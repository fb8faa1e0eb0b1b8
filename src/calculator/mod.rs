//! Footprint Calculator
//!
//! Turns a questionnaire answer set into an annual CO2e estimate. Both
//! variants implement the same `FootprintCalculator` interface but keep
//! their own question sets and factor tables.
//!
//! Includes both single and parallel (Rayon) batch computation.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::survey::Survey;

pub mod habits;
pub mod usage;

pub use habits::HabitsCalculator;
pub use usage::UsageCalculator;

/// Which questionnaire/calculator pair produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Habits,
    Usage,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Habits => "habits",
            Variant::Usage => "usage",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Variant::Habits => "Alışkanlıklarla Hesapla",
            Variant::Usage => "Tüketim Verileriyle Hesapla",
        }
    }
}

/// Annual footprint in whole kilograms of CO2e
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Footprint(u64);

impl Footprint {
    pub fn from_kg(kg: u64) -> Self {
        Footprint(kg)
    }

    /// Round an estimate to the nearest kilogram (half away from zero).
    /// NaN and negative estimates become 0; estimates beyond `u64::MAX`
    /// (including +inf) saturate.
    pub fn from_estimate(kg: f64) -> Self {
        if kg.is_nan() || kg <= 0.0 {
            Footprint(0)
        } else {
            Footprint(kg.round() as u64)
        }
    }

    pub fn kg(&self) -> u64 {
        self.0
    }

    pub fn tonnes(&self) -> f64 {
        self.0 as f64 / 1000.0
    }

    /// Tonnes with one decimal place, as shown on the results screen
    pub fn tonnes_display(&self) -> String {
        format!("{:.1}", self.tonnes())
    }
}

impl fmt::Display for Footprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ton CO₂", self.tonnes_display())
    }
}

/// One additive term of the estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub key: String,
    pub label: String,
    pub kg: f64,
}

/// Additive components plus the multiplier applied to their sum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionBreakdown {
    pub components: Vec<Component>,
    pub multiplier: f64,
}

impl EmissionBreakdown {
    pub fn new(multiplier: f64) -> Self {
        Self {
            components: Vec::with_capacity(4),
            multiplier,
        }
    }

    pub fn with(mut self, key: &str, label: &str, kg: f64) -> Self {
        self.components.push(Component {
            key: key.to_string(),
            label: label.to_string(),
            kg,
        });
        self
    }

    /// Sum of the additive components before the multiplier
    pub fn base_kg(&self) -> f64 {
        self.components.iter().map(|c| c.kg).sum()
    }

    /// Unrounded annual estimate
    pub fn estimate_kg(&self) -> f64 {
        self.base_kg() * self.multiplier
    }

    pub fn total(&self) -> Footprint {
        Footprint::from_estimate(self.estimate_kg())
    }
}

/// Common interface of the calculator variants.
///
/// Implementations are pure: no I/O, no hidden state, and every answer set
/// (including the all-empty default) yields a result.
pub trait FootprintCalculator: Send + Sync + 'static {
    type Answers: Survey + Serialize + for<'de> Deserialize<'de>;

    fn variant() -> Variant;

    /// Per-component contributions and the applied multiplier
    fn breakdown(answers: &Self::Answers) -> EmissionBreakdown;

    /// Static reduction tips shown with every result
    fn tips() -> &'static [&'static str];

    fn compute(answers: &Self::Answers) -> Footprint {
        let footprint = Self::breakdown(answers).total();
        tracing::debug!(
            variant = Self::variant().as_str(),
            kg = footprint.kg(),
            "Computed footprint"
        );
        footprint
    }
}

/// Compute footprints for many answer sets in parallel, preserving order.
pub fn compute_batch<C: FootprintCalculator>(answers: &[C::Answers]) -> Vec<Footprint> {
    answers
        .par_iter()
        .map(|a| C::breakdown(a).total())
        .collect()
}
