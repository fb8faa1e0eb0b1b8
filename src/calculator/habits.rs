//! Habits calculator
//!
//! Base emissions are the sum of meat, diet, package and transport weights.
//! Five behavioural multipliers (recycling, renewable energy, tree planting,
//! lights off, water usage) are multiplied together and applied to the sum.

use super::{EmissionBreakdown, FootprintCalculator, Variant};
use crate::advice;
use crate::factors::habits as factors;
use crate::survey::HabitsAnswers;

pub struct HabitsCalculator;

impl HabitsCalculator {
    /// Product of the five environmental-awareness multipliers
    pub fn total_multiplier(answers: &HabitsAnswers) -> f64 {
        let env = &answers.environment;
        factors::recycling_multiplier(env.recycling)
            * factors::renewable_energy_multiplier(env.renewable_energy)
            * factors::tree_planting_multiplier(env.tree_planting)
            * factors::lights_off_multiplier(env.lights_off)
            * factors::water_usage_multiplier(env.water_usage)
    }
}

impl FootprintCalculator for HabitsCalculator {
    type Answers = HabitsAnswers;

    fn variant() -> Variant {
        Variant::Habits
    }

    fn breakdown(answers: &HabitsAnswers) -> EmissionBreakdown {
        let consumption = &answers.consumption;

        EmissionBreakdown::new(Self::total_multiplier(answers))
            .with("meat", "Et tüketimi", factors::meat_frequency_kg(consumption.meat_frequency))
            .with("diet", "Beslenme", factors::daily_diet_kg(consumption.daily_diet))
            .with("packages", "Kargo", factors::packages_kg(consumption.monthly_packages))
            .with(
                "transport",
                "Ulaşım",
                factors::daily_transport_kg(answers.transportation.daily_transport),
            )
    }

    fn tips() -> &'static [&'static str] {
        advice::habits_tips()
    }
}
