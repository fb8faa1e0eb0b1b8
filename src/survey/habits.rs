//! Habits questionnaire: consumption, environmental awareness, transportation.

use serde::{Deserialize, Serialize};

use super::{
    deserialize_quantity, format_quantity, parse_quantity, ChoiceOption, Question, QuestionKind,
    Step, Survey,
};

token_enum! {
    /// How many days a week meat is eaten
    MeatFrequency {
        Daily => "gunluk",
        FiveToSixDays => "5-6-gun",
        ThreeToFourDays => "3-4-gun",
        OneToTwoDays => "1-2-gun",
        Never => "hic",
    }
}

token_enum! {
    /// Dominant everyday diet
    DailyDiet {
        FastFood => "fast-food",
        Processed => "islenmis",
        HomeCooked => "evde",
        Organic => "organik",
    }
}

token_enum! {
    /// Yes/no answer used by the behavioural questions
    YesNo {
        Yes => "evet",
        No => "hayir",
    }
}

token_enum! {
    WaterUsage {
        Saving => "tasarruf",
        Normal => "normal",
        Heavy => "fazla",
    }
}

token_enum! {
    /// Main means of getting around day to day
    DailyTransport {
        Car => "araba",
        Motorcycle => "motosiklet",
        PublicTransport => "toplu-tasima",
        Bicycle => "bisiklet",
        Walking => "yuru",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Consumption {
    pub meat_frequency: MeatFrequency,
    pub daily_diet: DailyDiet,
    #[serde(deserialize_with = "deserialize_quantity")]
    pub monthly_packages: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Environment {
    pub recycling: YesNo,
    pub renewable_energy: YesNo,
    pub tree_planting: YesNo,
    pub lights_off: YesNo,
    pub water_usage: WaterUsage,
}

/// Kilometre fields are part of the record but no question collects them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Transportation {
    pub daily_transport: DailyTransport,
    #[serde(deserialize_with = "deserialize_quantity")]
    pub car_km: f64,
    #[serde(deserialize_with = "deserialize_quantity")]
    pub public_transport_km: f64,
}

/// Complete answer set for the habits calculator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HabitsAnswers {
    pub consumption: Consumption,
    pub environment: Environment,
    pub transportation: Transportation,
}

// ============================================================================
// Question Catalogue
// ============================================================================

static STEPS: &[Step] = &[
    Step { title: "Tüketim Alışkanlıkları", description: "Beslenme ve kargo alışkanlıklarınız" },
    Step { title: "Çevre Bilinci", description: "Geri dönüşüm ve çevre dostu davranışlarınız" },
    Step { title: "Ulaşım", description: "Günlük ulaşım tercihleriniz" },
    Step { title: "Sonuçlar", description: "Karbon ayak iziniz" },
];

static MEAT_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption { token: "gunluk", label: "Her gün" },
    ChoiceOption { token: "5-6-gun", label: "Haftada 5-6 gün" },
    ChoiceOption { token: "3-4-gun", label: "Haftada 3-4 gün" },
    ChoiceOption { token: "1-2-gun", label: "Haftada 1-2 gün" },
    ChoiceOption { token: "hic", label: "Hiç tüketmem" },
];

static DIET_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption { token: "fast-food", label: "Çoğunlukla fast food" },
    ChoiceOption { token: "islenmis", label: "İşlenmiş gıdalar" },
    ChoiceOption { token: "evde", label: "Evde yapılan yemekler" },
    ChoiceOption { token: "organik", label: "Organik/yerel gıdalar" },
];

static RECYCLING_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption { token: "evet", label: "Evet, düzenli yapıyorum" },
    ChoiceOption { token: "hayir", label: "Hayır, yapmıyorum" },
];

static RENEWABLE_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption { token: "evet", label: "Evet, kullanıyorum" },
    ChoiceOption { token: "hayir", label: "Hayır, kullanmıyorum" },
];

static LIGHTS_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption { token: "evet", label: "Evet, her zaman kapatırım" },
    ChoiceOption { token: "hayir", label: "Hayır, genelde açık bırakırım" },
];

static TREE_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption { token: "evet", label: "Evet, katılıyorum" },
    ChoiceOption { token: "hayir", label: "Hayır, katılmıyorum" },
];

static WATER_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption { token: "tasarruf", label: "Tasarruflu kullanırım" },
    ChoiceOption { token: "normal", label: "Normal kullanırım" },
    ChoiceOption { token: "fazla", label: "Fazla kullanırım" },
];

static TRANSPORT_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption { token: "araba", label: "Araba" },
    ChoiceOption { token: "motosiklet", label: "Motosiklet" },
    ChoiceOption { token: "toplu-tasima", label: "Toplu Taşıma" },
    ChoiceOption { token: "bisiklet", label: "Bisiklet" },
    ChoiceOption { token: "yuru", label: "Yürüyüş" },
];

static QUESTIONS: &[Question] = &[
    Question {
        key: "meatFrequency",
        step: 0,
        label: "Haftada ne sıklıkla et tüketiyorsunuz?",
        placeholder: "Et tüketim sıklığınızı seçin",
        kind: QuestionKind::Choice(MEAT_OPTIONS),
    },
    Question {
        key: "dailyDiet",
        step: 0,
        label: "Günlük beslenme alışkanlığınız nasıldır?",
        placeholder: "Beslenme tarzınızı seçin",
        kind: QuestionKind::Choice(DIET_OPTIONS),
    },
    Question {
        key: "monthlyPackages",
        step: 0,
        label: "Ayda kaç kargo alırsınız?",
        placeholder: "0",
        kind: QuestionKind::Quantity { unit: "adet/ay" },
    },
    Question {
        key: "recycling",
        step: 1,
        label: "Geri dönüşüm yapıyor musunuz?",
        placeholder: "Geri dönüşüm durumunuzu seçin",
        kind: QuestionKind::Choice(RECYCLING_OPTIONS),
    },
    Question {
        key: "renewableEnergy",
        step: 1,
        label: "Yenilenebilir enerji kaynakları kullanıyor musunuz?",
        placeholder: "Yenilenebilir enerji kullanımınızı seçin",
        kind: QuestionKind::Choice(RENEWABLE_OPTIONS),
    },
    Question {
        key: "lightsOff",
        step: 1,
        label: "Odadan çıktığında ışıklarını kapatır mısın?",
        placeholder: "Işık kullanım alışkanlığınızı seçin",
        kind: QuestionKind::Choice(LIGHTS_OPTIONS),
    },
    Question {
        key: "treePlanting",
        step: 1,
        label: "Ağaç dikme etkinliklerine katılır mısın?",
        placeholder: "Ağaç dikme etkinliklerine katılımınızı seçin",
        kind: QuestionKind::Choice(TREE_OPTIONS),
    },
    Question {
        key: "waterUsage",
        step: 1,
        label: "Su tüketimini nasıl sağlarsınız?",
        placeholder: "Su kullanım alışkanlığınızı seçin",
        kind: QuestionKind::Choice(WATER_OPTIONS),
    },
    Question {
        key: "dailyTransport",
        step: 2,
        label: "Günlük ulaşımda hangi araçları kullanıyorsunuz?",
        placeholder: "Ana ulaşım aracınızı seçin",
        kind: QuestionKind::Choice(TRANSPORT_OPTIONS),
    },
];

impl Survey for HabitsAnswers {
    fn steps() -> &'static [Step] {
        STEPS
    }

    fn questions() -> &'static [Question] {
        QUESTIONS
    }

    fn field(&self, key: &str) -> Option<String> {
        let value = match key {
            "meatFrequency" => self.consumption.meat_frequency.as_token().to_string(),
            "dailyDiet" => self.consumption.daily_diet.as_token().to_string(),
            "monthlyPackages" => format_quantity(self.consumption.monthly_packages),
            "recycling" => self.environment.recycling.as_token().to_string(),
            "renewableEnergy" => self.environment.renewable_energy.as_token().to_string(),
            "treePlanting" => self.environment.tree_planting.as_token().to_string(),
            "lightsOff" => self.environment.lights_off.as_token().to_string(),
            "waterUsage" => self.environment.water_usage.as_token().to_string(),
            "dailyTransport" => self.transportation.daily_transport.as_token().to_string(),
            _ => return None,
        };
        Some(value)
    }

    fn set_field(&mut self, key: &str, raw: &str) {
        match key {
            "meatFrequency" => self.consumption.meat_frequency = MeatFrequency::from_token(raw),
            "dailyDiet" => self.consumption.daily_diet = DailyDiet::from_token(raw),
            "monthlyPackages" => self.consumption.monthly_packages = parse_quantity(raw),
            "recycling" => self.environment.recycling = YesNo::from_token(raw),
            "renewableEnergy" => self.environment.renewable_energy = YesNo::from_token(raw),
            "treePlanting" => self.environment.tree_planting = YesNo::from_token(raw),
            "lightsOff" => self.environment.lights_off = YesNo::from_token(raw),
            "waterUsage" => self.environment.water_usage = WaterUsage::from_token(raw),
            "dailyTransport" => {
                self.transportation.daily_transport = DailyTransport::from_token(raw)
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        for meat in MeatFrequency::ALL {
            assert_eq!(MeatFrequency::from_token(meat.as_token()), *meat);
        }
        for transport in DailyTransport::ALL {
            assert_eq!(DailyTransport::from_token(transport.as_token()), *transport);
        }
    }

    #[test]
    fn test_unknown_tokens_are_unanswered() {
        assert_eq!(MeatFrequency::from_token(""), MeatFrequency::Unanswered);
        assert_eq!(MeatFrequency::from_token("haftalik"), MeatFrequency::Unanswered);
        assert_eq!(YesNo::from_token("belki"), YesNo::Unanswered);
        assert_eq!(WaterUsage::default(), WaterUsage::Unanswered);
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{
            "consumption": { "meatFrequency": "hic", "dailyDiet": "organik", "monthlyPackages": "4" },
            "environment": { "recycling": "evet", "waterUsage": "bilinmiyor" },
            "transportation": { "dailyTransport": "yuru" }
        }"#;
        let answers: HabitsAnswers = serde_json::from_str(json).unwrap();

        assert_eq!(answers.consumption.meat_frequency, MeatFrequency::Never);
        assert_eq!(answers.consumption.daily_diet, DailyDiet::Organic);
        assert_eq!(answers.consumption.monthly_packages, 4.0);
        assert_eq!(answers.environment.recycling, YesNo::Yes);
        assert_eq!(answers.environment.renewable_energy, YesNo::Unanswered);
        assert_eq!(answers.environment.water_usage, WaterUsage::Unanswered);
        assert_eq!(answers.transportation.daily_transport, DailyTransport::Walking);

        let back = serde_json::to_value(&answers).unwrap();
        assert_eq!(back["consumption"]["meatFrequency"], "hic");
        assert_eq!(back["environment"]["renewableEnergy"], "");
    }

    #[test]
    fn test_non_string_tokens_are_unanswered() {
        let json = r#"{
            "consumption": { "meatFrequency": true, "dailyDiet": 42 },
            "environment": { "recycling": { "value": "evet" }, "waterUsage": null }
        }"#;
        let answers: HabitsAnswers = serde_json::from_str(json).unwrap();
        assert_eq!(answers, HabitsAnswers::default());
    }

    #[test]
    fn test_packages_read_back_exactly() {
        for typed in ["2.384", "0.125", "7"] {
            let mut answers = HabitsAnswers::default();
            answers.set_field("monthlyPackages", typed);
            let shown = answers.field("monthlyPackages").unwrap();
            assert_eq!(shown, typed);

            let mut copy = HabitsAnswers::default();
            copy.set_field("monthlyPackages", &shown);
            assert_eq!(copy, answers);
        }
    }

    #[test]
    fn test_empty_object_is_default() {
        let answers: HabitsAnswers = serde_json::from_str("{}").unwrap();
        assert_eq!(answers, HabitsAnswers::default());
    }

    #[test]
    fn test_set_field_and_read_back() {
        let mut answers = HabitsAnswers::default();
        answers.set_field("meatFrequency", "3-4-gun");
        answers.set_field("monthlyPackages", "6");
        answers.set_field("unknownField", "whatever");

        assert_eq!(answers.field("meatFrequency").as_deref(), Some("3-4-gun"));
        assert_eq!(answers.field("monthlyPackages").as_deref(), Some("6"));
        assert_eq!(answers.field("unknownField"), None);
    }

    #[test]
    fn test_every_question_has_a_field() {
        let answers = HabitsAnswers::default();
        for question in HabitsAnswers::questions() {
            assert!(answers.field(question.key).is_some(), "missing field {}", question.key);
            assert!(question.step < HabitsAnswers::results_step());
        }
        assert_eq!(HabitsAnswers::steps().len(), 4);
        let environment = HabitsAnswers::questions().iter().filter(|q| q.step == 1).count();
        assert_eq!(environment, 5);
    }
}
