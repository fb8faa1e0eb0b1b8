//! Result presentation value: total, band, breakdown and tips in one
//! serializable record. Used by the JSON API and the results screen.

use serde::{Deserialize, Serialize};

use crate::assessment::{assess, CategoryAssessment};
use crate::calculator::{EmissionBreakdown, Footprint, FootprintCalculator, Variant};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintReport {
    pub variant: Variant,
    pub total_kg: u64,
    pub tonnes: f64,
    pub tonnes_display: String,
    pub assessment: CategoryAssessment,
    pub breakdown: EmissionBreakdown,
    pub tips: Vec<String>,
}

impl FootprintReport {
    /// Compute and describe a footprint in one go
    pub fn build<C: FootprintCalculator>(answers: &C::Answers) -> Self {
        let footprint = C::compute(answers);
        Self::from_footprint::<C>(footprint, answers)
    }

    /// Describe an already computed footprint. The breakdown is derived
    /// from the answers; the total is taken as given.
    pub fn from_footprint<C: FootprintCalculator>(
        footprint: Footprint,
        answers: &C::Answers,
    ) -> Self {
        Self {
            variant: C::variant(),
            total_kg: footprint.kg(),
            tonnes: footprint.tonnes(),
            tonnes_display: footprint.tonnes_display(),
            assessment: assess(footprint),
            breakdown: C::breakdown(answers),
            tips: C::tips().iter().map(|t| t.to_string()).collect(),
        }
    }
}
