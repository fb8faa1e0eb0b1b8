//! Footprint Categorization
//!
//! Maps an annual total onto one of three ordinal bands. Thresholds and
//! texts are shared by both calculator variants.
//!
//! Thresholds:
//! - Low: total < 4000 kg
//! - Medium: 4000 <= total < 8000 kg
//! - High: total >= 8000 kg

use serde::{Deserialize, Serialize};

use crate::calculator::Footprint;

pub const LOW_UPPER_KG: f64 = 4000.0;
pub const MEDIUM_UPPER_KG: f64 = 8000.0;

/// Severity band, ordered from best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Low,
    Medium,
    High,
}

impl Band {
    /// Label shown on the results badge
    pub fn label(&self) -> &'static str {
        match self {
            Band::Low => "Düşük",
            Band::Medium => "Orta",
            Band::High => "Yüksek",
        }
    }

    /// Display tone used by the results badge
    pub fn tier(&self) -> &'static str {
        match self {
            Band::Low => "leaf",
            Band::Medium => "earth",
            Band::High => "destructive",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Band::Low => "Tebrikler! Karbon ayak iziniz ortalamanın altında.",
            Band::Medium => "Ortalama seviyedesiniz. Bazı iyileştirmeler yapabilirsiniz.",
            Band::High => "Karbon ayak izinizi azaltmak için harekete geçme zamanı.",
        }
    }
}

/// Band plus the texts the results screen shows for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAssessment {
    pub band: Band,
    pub label: String,
    pub tier: String,
    pub description: String,
}

impl From<Band> for CategoryAssessment {
    fn from(band: Band) -> Self {
        Self {
            band,
            label: band.label().to_string(),
            tier: band.tier().to_string(),
            description: band.description().to_string(),
        }
    }
}

/// Classify an annual total in kg CO2e.
///
/// Total over all inputs: NaN and negative totals fall into Low.
pub fn categorize_kg(total_kg: f64) -> Band {
    if total_kg >= MEDIUM_UPPER_KG {
        Band::High
    } else if total_kg >= LOW_UPPER_KG {
        Band::Medium
    } else {
        Band::Low
    }
}

pub fn assess(footprint: Footprint) -> CategoryAssessment {
    categorize_kg(footprint.kg() as f64).into()
}
