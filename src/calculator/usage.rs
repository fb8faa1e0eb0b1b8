//! Usage calculator
//!
//! transport = car km + public transport km + flight hours (per-unit factors)
//! energy    = annual electricity kWh + annual natural gas kWh
//! lifestyle = base food emissions × diet multiplier × recycling multiplier
//!
//! The three terms are summed and rounded once. No global multiplier.

use super::{EmissionBreakdown, FootprintCalculator, Variant};
use crate::advice;
use crate::factors::usage as factors;
use crate::factors::NEUTRAL_MULTIPLIER;
use crate::survey::UsageAnswers;

pub struct UsageCalculator;

impl UsageCalculator {
    pub fn transport_kg(answers: &UsageAnswers) -> f64 {
        let t = &answers.transportation;
        t.car_km * factors::CAR_KG_PER_KM
            + t.public_transport_km * factors::PUBLIC_TRANSPORT_KG_PER_KM
            + t.flight_hours * factors::FLIGHT_KG_PER_HOUR
    }

    /// Energy inputs are already annual; no further scaling here.
    pub fn energy_kg(answers: &UsageAnswers) -> f64 {
        let e = &answers.energy;
        e.electricity_kwh * factors::ELECTRICITY_KG_PER_KWH
            + e.natural_gas_kwh * factors::NATURAL_GAS_KG_PER_KWH
    }

    pub fn lifestyle_kg(answers: &UsageAnswers) -> f64 {
        let l = &answers.lifestyle;
        factors::BASE_FOOD_KG
            * factors::diet_multiplier(l.diet_type)
            * factors::recycling_multiplier(l.recycling_frequency)
    }
}

impl FootprintCalculator for UsageCalculator {
    type Answers = UsageAnswers;

    fn variant() -> Variant {
        Variant::Usage
    }

    fn breakdown(answers: &UsageAnswers) -> EmissionBreakdown {
        EmissionBreakdown::new(NEUTRAL_MULTIPLIER)
            .with("transport", "Ulaşım", Self::transport_kg(answers))
            .with("energy", "Enerji", Self::energy_kg(answers))
            .with("lifestyle", "Yaşam tarzı", Self::lifestyle_kg(answers))
    }

    fn tips() -> &'static [&'static str] {
        advice::usage_tips()
    }
}
