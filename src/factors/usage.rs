//! Usage table: per-unit coefficients and lifestyle multipliers.

use super::NEUTRAL_MULTIPLIER;
use crate::survey::usage::{DietType, RecyclingFrequency};

/// kg CO2e per km driven by car
pub const CAR_KG_PER_KM: f64 = 0.21;

/// kg CO2e per km on public transport
pub const PUBLIC_TRANSPORT_KG_PER_KM: f64 = 0.05;

/// kg CO2e per hour of flight
pub const FLIGHT_KG_PER_HOUR: f64 = 90.0;

/// kg CO2e per kWh of electricity
pub const ELECTRICITY_KG_PER_KWH: f64 = 0.5;

/// kg CO2e per kWh of natural gas
pub const NATURAL_GAS_KG_PER_KWH: f64 = 0.2;

/// Annual food emissions before the diet and recycling adjustments
pub const BASE_FOOD_KG: f64 = 1500.0;

pub fn diet_multiplier(answer: DietType) -> f64 {
    match answer {
        DietType::Vegan => 0.5,
        DietType::Vegetarian => 0.7,
        DietType::Mixed => 1.0,
        DietType::MeatHeavy => 1.3,
        DietType::Unanswered => NEUTRAL_MULTIPLIER,
    }
}

pub fn recycling_multiplier(answer: RecyclingFrequency) -> f64 {
    match answer {
        RecyclingFrequency::Often => 0.9,
        RecyclingFrequency::Sometimes => 1.0,
        RecyclingFrequency::Never => 1.1,
        RecyclingFrequency::Unanswered => NEUTRAL_MULTIPLIER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifestyle_multipliers() {
        assert_eq!(diet_multiplier(DietType::Vegan), 0.5);
        assert_eq!(diet_multiplier(DietType::MeatHeavy), 1.3);
        assert_eq!(diet_multiplier(DietType::Unanswered), 1.0);
        assert_eq!(recycling_multiplier(RecyclingFrequency::Often), 0.9);
        assert_eq!(recycling_multiplier(RecyclingFrequency::Unanswered), 1.0);
    }

    #[test]
    fn test_coefficients_are_positive() {
        for coefficient in [
            CAR_KG_PER_KM,
            PUBLIC_TRANSPORT_KG_PER_KM,
            FLIGHT_KG_PER_HOUR,
            ELECTRICITY_KG_PER_KWH,
            NATURAL_GAS_KG_PER_KWH,
            BASE_FOOD_KG,
        ] {
            assert!(coefficient > 0.0);
        }
    }
}
