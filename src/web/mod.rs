//! HTML surface: landing page and the step-by-step calculator wizard.

pub mod handlers;
pub mod view_models;
