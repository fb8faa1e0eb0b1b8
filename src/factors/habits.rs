//! Habits table: annual kg CO2e per answer and behavioural multipliers.

use super::{MONTHS_PER_YEAR, NEUTRAL_MULTIPLIER, NO_EMISSIONS};
use crate::survey::habits::{DailyDiet, DailyTransport, MeatFrequency, WaterUsage, YesNo};

/// kg CO2e per delivered package
pub const PACKAGE_KG: f64 = 2.5;

/// Annual kg CO2e from meat consumption
pub fn meat_frequency_kg(answer: MeatFrequency) -> f64 {
    match answer {
        MeatFrequency::Daily => 1300.0,
        MeatFrequency::FiveToSixDays => 1100.0,
        MeatFrequency::ThreeToFourDays => 800.0,
        MeatFrequency::OneToTwoDays => 500.0,
        MeatFrequency::Never => 200.0,
        MeatFrequency::Unanswered => NO_EMISSIONS,
    }
}

/// Annual kg CO2e from everyday diet
pub fn daily_diet_kg(answer: DailyDiet) -> f64 {
    match answer {
        DailyDiet::FastFood => 500.0,
        DailyDiet::Processed => 300.0,
        DailyDiet::HomeCooked => 150.0,
        DailyDiet::Organic => 100.0,
        DailyDiet::Unanswered => NO_EMISSIONS,
    }
}

/// Annual kg CO2e from the main daily transport mode
pub fn daily_transport_kg(answer: DailyTransport) -> f64 {
    match answer {
        DailyTransport::Car => 2200.0,
        DailyTransport::Motorcycle => 1200.0,
        DailyTransport::PublicTransport => 800.0,
        DailyTransport::Bicycle => 50.0,
        DailyTransport::Walking => 20.0,
        DailyTransport::Unanswered => NO_EMISSIONS,
    }
}

/// Annual kg CO2e from package deliveries
pub fn packages_kg(monthly_packages: f64) -> f64 {
    monthly_packages * MONTHS_PER_YEAR * PACKAGE_KG
}

pub fn recycling_multiplier(answer: YesNo) -> f64 {
    match answer {
        YesNo::Yes => 0.9,
        YesNo::No => 1.1,
        YesNo::Unanswered => NEUTRAL_MULTIPLIER,
    }
}

pub fn renewable_energy_multiplier(answer: YesNo) -> f64 {
    match answer {
        YesNo::Yes => 0.8,
        YesNo::No => 1.2,
        YesNo::Unanswered => NEUTRAL_MULTIPLIER,
    }
}

pub fn tree_planting_multiplier(answer: YesNo) -> f64 {
    match answer {
        YesNo::Yes => 0.95,
        YesNo::No => 1.0,
        YesNo::Unanswered => NEUTRAL_MULTIPLIER,
    }
}

pub fn lights_off_multiplier(answer: YesNo) -> f64 {
    match answer {
        YesNo::Yes => 0.95,
        YesNo::No => 1.05,
        YesNo::Unanswered => NEUTRAL_MULTIPLIER,
    }
}

pub fn water_usage_multiplier(answer: WaterUsage) -> f64 {
    match answer {
        WaterUsage::Saving => 0.9,
        WaterUsage::Normal => 1.0,
        WaterUsage::Heavy => 1.1,
        WaterUsage::Unanswered => NEUTRAL_MULTIPLIER,
    }
}
