//! Carbon Footprint Calculator
//!
//! Estimates an annual CO2e footprint from a lifestyle questionnaire, puts it
//! in a Low/Medium/High band and pairs it with reduction tips.
//!
//! Two independent calculator variants share one interface:
//! - `habits`: consumption, environmental awareness and daily transport
//!   (weighted sum × behavioural multipliers)
//! - `usage`: distances, flight hours, household energy and lifestyle
//!   (per-unit coefficients)
//!
//! Module layout:
//! - `survey/`: typed answers and the question catalogue
//! - `factors/`: emission factor tables, one per variant
//! - `calculator/`: footprint computation (single and parallel batch)
//! - `assessment`, `advice`, `report`: result presentation
//! - `session`: wizard state machine
//! - `web/`, `api_server`: HTTP surface (feature `api`)

pub mod survey;
pub mod factors;
pub mod calculator;
pub mod assessment;
pub mod advice;
pub mod report;
pub mod session;
pub mod config;

pub mod api_server;

#[cfg(feature = "api")]
pub mod web;

// Re-export commonly used types
pub use calculator::{compute_batch, Footprint, FootprintCalculator, HabitsCalculator, UsageCalculator, Variant};
pub use assessment::{assess, categorize_kg, Band, CategoryAssessment};
pub use report::FootprintReport;
pub use session::{WizardAction, WizardSession};
pub use survey::{HabitsAnswers, Survey, UsageAnswers};

#[cfg(feature = "api")]
pub use api_server::{AppState, create_router};
