//! Questionnaire Answers
//!
//! Typed answer records for both calculator variants, plus the question
//! catalogue the wizard renders from.
//!
//! - `habits`: consumption / environment / transportation questionnaire
//! - `usage`: transportation / energy / lifestyle questionnaire
//!
//! Every categorical question is a closed enum with an explicit `Unanswered`
//! variant. Empty and unrecognized tokens land there instead of failing, and
//! numeric quantities fall back to zero.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Declare a categorical answer enum backed by wire tokens.
///
/// Generates the enum (with a default `Unanswered` variant), token
/// conversions in both directions and token-based serde impls.
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            $( $variant, )+
            #[default]
            Unanswered,
        }

        impl $name {
            /// Every answerable variant, in questionnaire order.
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            pub fn as_token(&self) -> &'static str {
                match self {
                    $( $name::$variant => $token, )+
                    $name::Unanswered => "",
                }
            }

            pub fn from_token(token: &str) -> Self {
                match token.trim() {
                    $( $token => $name::$variant, )+
                    _ => $name::Unanswered,
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_token())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let token = $crate::survey::deserialize_token(deserializer)?;
                Ok(token.as_deref().map($name::from_token).unwrap_or_default())
            }
        }
    };
}

pub mod habits;
pub mod usage;

pub use habits::HabitsAnswers;
pub use usage::UsageAnswers;

// ============================================================================
// Question Catalogue
// ============================================================================

/// One screen of the wizard
#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
}

/// A selectable answer for a choice question
#[derive(Debug, Clone, Copy)]
pub struct ChoiceOption {
    pub token: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub enum QuestionKind {
    /// Pick one token from a fixed list
    Choice(&'static [ChoiceOption]),
    /// Free numeric input (unit shown next to the field)
    Quantity { unit: &'static str },
}

/// A single question, keyed by its camelCase field name
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub key: &'static str,
    pub step: usize,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: QuestionKind,
}

/// A questionnaire answer record the wizard can edit field by field.
pub trait Survey: Default + Clone + std::fmt::Debug + Send + Sync + 'static {
    /// Wizard steps in order. The last one is the results screen.
    fn steps() -> &'static [Step];

    /// All questions, in display order.
    fn questions() -> &'static [Question];

    /// Current value of a field as it appears in the form.
    /// Returns None for unknown keys.
    fn field(&self, key: &str) -> Option<String>;

    /// Apply one form edit. Unknown keys are ignored.
    fn set_field(&mut self, key: &str, raw: &str);

    /// Index of the results step
    fn results_step() -> usize {
        Self::steps().len().saturating_sub(1)
    }
}

// ============================================================================
// Quantity Parsing
// ============================================================================

/// Largest accepted quantity (km, hours, kWh or packages). Larger inputs
/// are clamped here so every total stays finite.
pub const MAX_QUANTITY: f64 = 1.0e12;

/// Clamp a quantity to `[0, MAX_QUANTITY]`. NaN and negatives become 0.
#[inline]
pub fn sanitize_quantity(value: f64) -> f64 {
    if value.is_nan() || value <= 0.0 {
        0.0
    } else {
        value.min(MAX_QUANTITY)
    }
}

/// Parse a typed quantity. Empty or non-numeric text counts as 0.
pub fn parse_quantity(raw: &str) -> f64 {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .map(sanitize_quantity)
        .unwrap_or(0.0)
}

/// Render a stored quantity as form text ("" for zero).
///
/// Uses the shortest text that parses back to the same value, so a field
/// carried through the wizard is never rounded.
pub fn format_quantity(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else {
        value.to_string()
    }
}

/// Shortest decimal text `t` with `parse_quantity(t) * scale == value`.
///
/// Used for fields stored in a different unit than they are typed in.
/// Falls back to the plain quotient when no such text exists.
pub fn format_scaled_quantity(value: f64, scale: f64) -> String {
    if value == 0.0 {
        return String::new();
    }
    let typed = value / scale;
    (0..=17)
        .map(|decimals| format!("{:.*}", decimals, typed))
        .find(|text| sanitize_quantity(parse_quantity(text) * scale) == value)
        .unwrap_or_else(|| typed.to_string())
}

/// Deserialize a quantity from a JSON number, a numeric string or null.
/// Any other JSON value counts as 0.
pub(crate) fn deserialize_quantity<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
        Other(IgnoredAny),
    }

    let value = match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => sanitize_quantity(n),
        NumberOrText::Text(s) => parse_quantity(&s),
        NumberOrText::Other(_) => 0.0,
    };
    Ok(value)
}

/// Deserialize a categorical token. Anything but a JSON string (null,
/// numbers, arrays, objects) yields None and so `Unanswered`.
pub(crate) fn deserialize_token<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TokenOrOther {
        Token(String),
        Other(IgnoredAny),
    }

    Ok(match TokenOrOther::deserialize(deserializer)? {
        TokenOrOther::Token(token) => Some(token),
        TokenOrOther::Other(_) => None,
    })
}
