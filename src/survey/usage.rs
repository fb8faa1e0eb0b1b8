//! Usage questionnaire: distances, flight time, household energy and lifestyle.
//!
//! Energy consumption is typed per month in the wizard and stored as an
//! annual figure, so everything downstream works with yearly quantities.

use serde::{Deserialize, Serialize};

use super::{
    deserialize_quantity, format_quantity, format_scaled_quantity, parse_quantity,
    sanitize_quantity, ChoiceOption, Question, QuestionKind, Step, Survey,
};
use crate::factors::MONTHS_PER_YEAR;

token_enum! {
    DietType {
        Vegan => "vegan",
        Vegetarian => "vejetaryen",
        Mixed => "karisik",
        MeatHeavy => "et-agirlikli",
    }
}

token_enum! {
    /// How often household waste is sorted for recycling
    RecyclingFrequency {
        Often => "cok",
        Sometimes => "bazen",
        Never => "hic",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Transportation {
    #[serde(deserialize_with = "deserialize_quantity")]
    pub car_km: f64,
    #[serde(deserialize_with = "deserialize_quantity")]
    pub public_transport_km: f64,
    #[serde(deserialize_with = "deserialize_quantity")]
    pub flight_hours: f64,
}

/// Annual household energy use in kWh
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Energy {
    #[serde(deserialize_with = "deserialize_quantity")]
    pub electricity_kwh: f64,
    #[serde(deserialize_with = "deserialize_quantity")]
    pub natural_gas_kwh: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Lifestyle {
    pub diet_type: DietType,
    pub recycling_frequency: RecyclingFrequency,
}

/// Complete answer set for the usage calculator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageAnswers {
    pub transportation: Transportation,
    pub energy: Energy,
    pub lifestyle: Lifestyle,
}

impl UsageAnswers {
    /// Store a monthly electricity reading as its annual total.
    pub fn set_monthly_electricity(&mut self, kwh_per_month: f64) {
        self.energy.electricity_kwh = sanitize_quantity(kwh_per_month * MONTHS_PER_YEAR);
    }

    /// Store a monthly natural gas reading as its annual total.
    pub fn set_monthly_natural_gas(&mut self, kwh_per_month: f64) {
        self.energy.natural_gas_kwh = sanitize_quantity(kwh_per_month * MONTHS_PER_YEAR);
    }
}

// ============================================================================
// Question Catalogue
// ============================================================================

static STEPS: &[Step] = &[
    Step { title: "Ulaşım", description: "Araç, toplu taşıma ve uçuş kullanımınız" },
    Step { title: "Enerji", description: "Evinizin aylık enerji tüketimi" },
    Step { title: "Yaşam Tarzı", description: "Beslenme ve geri dönüşüm alışkanlıklarınız" },
    Step { title: "Sonuçlar", description: "Karbon ayak iziniz" },
];

static DIET_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption { token: "vegan", label: "Vegan" },
    ChoiceOption { token: "vejetaryen", label: "Vejetaryen" },
    ChoiceOption { token: "karisik", label: "Karışık beslenme" },
    ChoiceOption { token: "et-agirlikli", label: "Et ağırlıklı beslenme" },
];

static RECYCLING_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption { token: "cok", label: "Her zaman" },
    ChoiceOption { token: "bazen", label: "Bazen" },
    ChoiceOption { token: "hic", label: "Hiç" },
];

static QUESTIONS: &[Question] = &[
    Question {
        key: "carKm",
        step: 0,
        label: "Yılda araba ile kaç km yol yapıyorsunuz?",
        placeholder: "0",
        kind: QuestionKind::Quantity { unit: "km/yıl" },
    },
    Question {
        key: "publicTransportKm",
        step: 0,
        label: "Yılda toplu taşıma ile kaç km yol yapıyorsunuz?",
        placeholder: "0",
        kind: QuestionKind::Quantity { unit: "km/yıl" },
    },
    Question {
        key: "flightHours",
        step: 0,
        label: "Yılda kaç saat uçuyorsunuz?",
        placeholder: "0",
        kind: QuestionKind::Quantity { unit: "saat/yıl" },
    },
    Question {
        key: "electricityKwh",
        step: 1,
        label: "Aylık elektrik tüketiminiz ne kadar?",
        placeholder: "0",
        kind: QuestionKind::Quantity { unit: "kWh/ay" },
    },
    Question {
        key: "naturalGasKwh",
        step: 1,
        label: "Aylık doğalgaz tüketiminiz ne kadar?",
        placeholder: "0",
        kind: QuestionKind::Quantity { unit: "kWh/ay" },
    },
    Question {
        key: "dietType",
        step: 2,
        label: "Beslenme tarzınız nedir?",
        placeholder: "Beslenme tarzınızı seçin",
        kind: QuestionKind::Choice(DIET_OPTIONS),
    },
    Question {
        key: "recyclingFrequency",
        step: 2,
        label: "Ne sıklıkla geri dönüşüm yapıyorsunuz?",
        placeholder: "Geri dönüşüm sıklığınızı seçin",
        kind: QuestionKind::Choice(RECYCLING_OPTIONS),
    },
];

impl Survey for UsageAnswers {
    fn steps() -> &'static [Step] {
        STEPS
    }

    fn questions() -> &'static [Question] {
        QUESTIONS
    }

    // Energy fields read and write monthly values; storage is annual. The
    // monthly text always converts back to the exact stored value.
    fn field(&self, key: &str) -> Option<String> {
        let value = match key {
            "carKm" => format_quantity(self.transportation.car_km),
            "publicTransportKm" => format_quantity(self.transportation.public_transport_km),
            "flightHours" => format_quantity(self.transportation.flight_hours),
            "electricityKwh" => {
                format_scaled_quantity(self.energy.electricity_kwh, MONTHS_PER_YEAR)
            }
            "naturalGasKwh" => {
                format_scaled_quantity(self.energy.natural_gas_kwh, MONTHS_PER_YEAR)
            }
            "dietType" => self.lifestyle.diet_type.as_token().to_string(),
            "recyclingFrequency" => self.lifestyle.recycling_frequency.as_token().to_string(),
            _ => return None,
        };
        Some(value)
    }

    fn set_field(&mut self, key: &str, raw: &str) {
        match key {
            "carKm" => self.transportation.car_km = parse_quantity(raw),
            "publicTransportKm" => self.transportation.public_transport_km = parse_quantity(raw),
            "flightHours" => self.transportation.flight_hours = parse_quantity(raw),
            "electricityKwh" => self.set_monthly_electricity(parse_quantity(raw)),
            "naturalGasKwh" => self.set_monthly_natural_gas(parse_quantity(raw)),
            "dietType" => self.lifestyle.diet_type = DietType::from_token(raw),
            "recyclingFrequency" => {
                self.lifestyle.recycling_frequency = RecyclingFrequency::from_token(raw)
            }
            _ => {}
        }
    }
}
