// Footprint Properties
//
// Purpose: Check calculator-wide properties through the public API
// Run with: cargo test --test footprint_properties

use carbon_footprint::survey::habits::{DailyDiet, DailyTransport, MeatFrequency, WaterUsage, YesNo};
use carbon_footprint::survey::usage::{DietType, RecyclingFrequency};
use carbon_footprint::{
    categorize_kg, compute_batch, Band, FootprintCalculator, HabitsAnswers, HabitsCalculator,
    Survey, UsageAnswers, UsageCalculator, WizardAction, WizardSession,
};

// ============================================================================
// Fixtures
// ============================================================================

/// A spread of habits answer sets covering every token once
fn habits_fixtures() -> Vec<HabitsAnswers> {
    let mut fixtures = vec![HabitsAnswers::default()];
    for (i, meat) in MeatFrequency::ALL.iter().enumerate() {
        let mut answers = HabitsAnswers::default();
        answers.consumption.meat_frequency = *meat;
        answers.consumption.daily_diet = DailyDiet::ALL[i % DailyDiet::ALL.len()];
        answers.consumption.monthly_packages = (i * 3) as f64;
        answers.transportation.daily_transport = DailyTransport::ALL[i % DailyTransport::ALL.len()];
        answers.environment.recycling = YesNo::ALL[i % 2];
        answers.environment.renewable_energy = YesNo::ALL[(i + 1) % 2];
        answers.environment.water_usage = WaterUsage::ALL[i % WaterUsage::ALL.len()];
        fixtures.push(answers);
    }
    fixtures
}

fn usage_fixtures() -> Vec<UsageAnswers> {
    let mut fixtures = vec![UsageAnswers::default()];
    for (i, diet) in DietType::ALL.iter().enumerate() {
        let mut answers = UsageAnswers::default();
        answers.transportation.car_km = 2500.0 * i as f64;
        answers.transportation.flight_hours = i as f64;
        answers.energy.electricity_kwh = 1200.0 * i as f64;
        answers.lifestyle.diet_type = *diet;
        answers.lifestyle.recycling_frequency =
            RecyclingFrequency::ALL[i % RecyclingFrequency::ALL.len()];
        fixtures.push(answers);
    }
    fixtures
}

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_empty_answers_are_constant() {
    assert_eq!(HabitsCalculator::compute(&HabitsAnswers::default()).kg(), 0);
    assert_eq!(UsageCalculator::compute(&UsageAnswers::default()).kg(), 1500);
}

#[test]
fn test_unrecognized_tokens_behave_like_empty() {
    let json = r#"{
        "consumption": { "meatFrequency": "sometimes", "dailyDiet": 42 },
        "environment": { "recycling": "maybe", "renewableEnergy": false, "waterUsage": null },
        "transportation": { "dailyTransport": "teleport" }
    }"#;
    let answers: HabitsAnswers = serde_json::from_str(json).unwrap();
    assert_eq!(answers.consumption.daily_diet, DailyDiet::Unanswered);
    assert_eq!(answers, HabitsAnswers::default());
    assert_eq!(HabitsCalculator::compute(&answers).kg(), 0);
}

// ============================================================================
// Literal Cases
// ============================================================================

#[test]
fn test_habits_literal_case() {
    let json = r#"{
        "consumption": { "meatFrequency": "hic", "dailyDiet": "organik", "monthlyPackages": 0 },
        "environment": {
            "recycling": "evet", "renewableEnergy": "evet", "treePlanting": "evet",
            "lightsOff": "evet", "waterUsage": "tasarruf"
        },
        "transportation": { "dailyTransport": "yuru" }
    }"#;
    let answers: HabitsAnswers = serde_json::from_str(json).unwrap();
    let breakdown = HabitsCalculator::breakdown(&answers);

    assert_eq!(breakdown.base_kg(), 320.0);
    assert_eq!(HabitsCalculator::compute(&answers).kg(), 187);
}

#[test]
fn test_usage_literal_case() {
    let json = r#"{
        "transportation": { "carKm": 1000, "publicTransportKm": 0, "flightHours": 0 },
        "energy": { "electricityKwh": 0, "naturalGasKwh": 0 },
        "lifestyle": { "dietType": "vegan", "recyclingFrequency": "cok" }
    }"#;
    let answers: UsageAnswers = serde_json::from_str(json).unwrap();
    assert_eq!(UsageCalculator::compute(&answers).kg(), 885);
}

// ============================================================================
// Monotonicity and Determinism
// ============================================================================

#[test]
fn test_habits_monotonic_in_packages() {
    for base in habits_fixtures() {
        let mut previous = 0;
        for packages in [0.0, 1.0, 2.5, 10.0, 40.0, 250.0] {
            let mut answers = base.clone();
            answers.consumption.monthly_packages = packages;
            let kg = HabitsCalculator::compute(&answers).kg();
            assert!(kg >= previous, "packages {} decreased result", packages);
            previous = kg;
        }
    }
}

#[test]
fn test_usage_monotonic_in_every_quantity() {
    type Setter = fn(&mut UsageAnswers, f64);
    let setters: [(&str, Setter); 5] = [
        ("carKm", |a, v| a.transportation.car_km = v),
        ("publicTransportKm", |a, v| a.transportation.public_transport_km = v),
        ("flightHours", |a, v| a.transportation.flight_hours = v),
        ("electricityKwh", |a, v| a.energy.electricity_kwh = v),
        ("naturalGasKwh", |a, v| a.energy.natural_gas_kwh = v),
    ];

    for base in usage_fixtures() {
        for (name, set) in &setters {
            let mut previous = 0;
            for value in [0.0, 1.0, 10.0, 100.0, 5000.0] {
                let mut answers = base.clone();
                set(&mut answers, value);
                let kg = UsageCalculator::compute(&answers).kg();
                assert!(kg >= previous, "{} = {} decreased result", name, value);
                previous = kg;
            }
        }
    }
}

#[test]
fn test_monotonic_up_to_extreme_quantities() {
    let packages = ["0", "1", "1e6", "1e12", "1e306", "1e308", "inf"];
    let mut previous = 0;
    for raw in packages {
        let mut answers = HabitsAnswers::default();
        answers.set_field("monthlyPackages", raw);
        let kg = HabitsCalculator::compute(&answers).kg();
        assert!(kg >= previous, "monthlyPackages {} decreased result", raw);
        assert!(kg > 0 || raw == "0");
        previous = kg;
    }

    let mut previous = 0;
    for value in [0.0, 1.0e12, 1.0e306, 1.0e308, f64::MAX] {
        let mut answers = HabitsAnswers::default();
        answers.consumption.monthly_packages = value;
        let kg = HabitsCalculator::compute(&answers).kg();
        assert!(kg >= previous, "monthly_packages {} decreased result", value);
        previous = kg;
    }

    for key in ["carKm", "flightHours", "electricityKwh", "naturalGasKwh"] {
        let mut previous = 0;
        for raw in ["0", "1e6", "1e12", "1e306", "1e308"] {
            let session = WizardSession::<UsageCalculator>::new().update(key, raw);
            let kg = UsageCalculator::compute(session.answers()).kg();
            assert!(kg >= previous, "{} = {} decreased result", key, raw);
            previous = kg;
        }
    }
}

#[test]
fn test_wizard_matches_direct_compute() {
    let typed = [
        ("carKm", "2.384"),
        ("publicTransportKm", "0.125"),
        ("flightHours", "1.5"),
        ("electricityKwh", "2.384"),
        ("naturalGasKwh", "0.125"),
        ("dietType", "vegan"),
        ("recyclingFrequency", "cok"),
    ];
    let direct = typed
        .iter()
        .fold(WizardSession::<UsageCalculator>::new(), |s, (k, v)| s.update(k, v));

    // Walk the wizard, rebuilding the session from its own form text on
    // every step the way the HTML form does.
    let mut session = direct.clone();
    for _ in 0..3 {
        let carried: Vec<(&str, String)> = UsageAnswers::questions()
            .iter()
            .map(|q| (q.key, session.answers().field(q.key).unwrap_or_default()))
            .collect();
        session = WizardSession::<UsageCalculator>::restore(
            session.step(),
            session.result(),
            carried.iter().map(|(k, v)| (*k, v.as_str())),
        )
        .apply(WizardAction::Next);
    }

    assert_eq!(session.answers(), direct.answers());
    assert_eq!(session.result(), Some(UsageCalculator::compute(direct.answers())));
}

#[test]
fn test_compute_is_deterministic() {
    for answers in habits_fixtures() {
        assert_eq!(HabitsCalculator::compute(&answers), HabitsCalculator::compute(&answers));
    }
    for answers in usage_fixtures() {
        assert_eq!(UsageCalculator::compute(&answers), UsageCalculator::compute(&answers));
    }
}

#[test]
fn test_batch_matches_single() {
    let fixtures = habits_fixtures();
    let batch = compute_batch::<HabitsCalculator>(&fixtures);
    let single: Vec<_> = fixtures.iter().map(HabitsCalculator::compute).collect();
    assert_eq!(batch, single);

    let fixtures = usage_fixtures();
    let batch = compute_batch::<UsageCalculator>(&fixtures);
    let single: Vec<_> = fixtures.iter().map(UsageCalculator::compute).collect();
    assert_eq!(batch, single);
}

// ============================================================================
// Categorizer
// ============================================================================

#[test]
fn test_band_boundaries() {
    assert_eq!(categorize_kg(3999.0), Band::Low);
    assert_eq!(categorize_kg(4000.0), Band::Medium);
    assert_eq!(categorize_kg(7999.0), Band::Medium);
    assert_eq!(categorize_kg(8000.0), Band::High);
}

// ============================================================================
// Wizard Reset
// ============================================================================

#[test]
fn test_reset_restores_empty_state_from_any_point() {
    let start = WizardSession::<HabitsCalculator>::new()
        .update("meatFrequency", "gunluk")
        .update("monthlyPackages", "12");

    let mut session = start;
    for action in [WizardAction::Next, WizardAction::Next, WizardAction::Next, WizardAction::Back] {
        session = session.apply(action);
        let reset = session.clone().apply(WizardAction::Reset);
        assert_eq!(reset, WizardSession::<HabitsCalculator>::new());
        assert_eq!(reset.result(), None);
        assert_eq!(reset.answers(), &HabitsAnswers::default());
    }
}
