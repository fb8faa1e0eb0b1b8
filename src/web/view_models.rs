//! Template-ready view of a wizard session.
//!
//! Everything the templates need is flattened into plain strings, bools and
//! vectors here so the templates stay free of logic.

use crate::calculator::FootprintCalculator;
use crate::report::FootprintReport;
use crate::session::WizardSession;
use crate::survey::{QuestionKind, Survey};

#[derive(Debug, Clone)]
pub struct StepView {
    pub number: usize,
    pub title: &'static str,
    pub active: bool,
    pub completed: bool,
}

#[derive(Debug, Clone)]
pub struct OptionView {
    pub token: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// One question. Questions of other steps render as hidden inputs so the
/// form always carries the full answer set.
#[derive(Debug, Clone)]
pub struct FieldView {
    pub key: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub unit: &'static str,
    pub value: String,
    pub visible: bool,
    pub is_choice: bool,
    pub options: Vec<OptionView>,
}

#[derive(Debug, Clone)]
pub struct ComponentView {
    pub label: String,
    pub kg_display: String,
}

#[derive(Debug, Clone, Default)]
pub struct ReportView {
    pub tonnes_display: String,
    pub label: String,
    pub tier: String,
    pub description: String,
    pub components: Vec<ComponentView>,
    pub show_multiplier: bool,
    pub multiplier_display: String,
    pub tips: Vec<String>,
}

impl From<FootprintReport> for ReportView {
    fn from(report: FootprintReport) -> Self {
        let multiplier = report.breakdown.multiplier;
        Self {
            tonnes_display: report.tonnes_display,
            label: report.assessment.label,
            tier: report.assessment.tier,
            description: report.assessment.description,
            components: report
                .breakdown
                .components
                .into_iter()
                .map(|c| ComponentView {
                    label: c.label,
                    kg_display: format!("{:.0}", c.kg),
                })
                .collect(),
            show_multiplier: (multiplier - 1.0).abs() > f64::EPSILON,
            multiplier_display: format!("{:.2}", multiplier),
            tips: report.tips,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WizardView {
    pub variant_slug: &'static str,
    pub variant_name: &'static str,
    pub step_index: usize,
    pub step_title: &'static str,
    pub step_description: &'static str,
    pub steps: Vec<StepView>,
    pub fields: Vec<FieldView>,
    pub is_first: bool,
    pub is_results: bool,
    pub is_last_question: bool,
    /// Stored result in kg, or "" when unset
    pub result_kg: String,
    pub has_report: bool,
    pub report: ReportView,
}

impl WizardView {
    pub fn from_session<C: FootprintCalculator>(session: &WizardSession<C>) -> Self {
        let variant = C::variant();
        let current = session.step();
        let info = session.step_info();

        let steps = C::Answers::steps()
            .iter()
            .enumerate()
            .map(|(idx, step)| StepView {
                number: idx + 1,
                title: step.title,
                active: idx == current,
                completed: idx < current,
            })
            .collect();

        let answers = session.answers();
        let fields = C::Answers::questions()
            .iter()
            .map(|q| {
                let value = answers.field(q.key).unwrap_or_default();
                let (is_choice, unit, options) = match q.kind {
                    QuestionKind::Choice(choices) => (
                        true,
                        "",
                        choices
                            .iter()
                            .map(|c| OptionView {
                                token: c.token,
                                label: c.label,
                                selected: c.token == value,
                            })
                            .collect(),
                    ),
                    QuestionKind::Quantity { unit } => (false, unit, Vec::new()),
                };
                FieldView {
                    key: q.key,
                    label: q.label,
                    placeholder: q.placeholder,
                    unit,
                    value,
                    visible: q.step == current,
                    is_choice,
                    options,
                }
            })
            .collect();

        let report = if session.is_results_step() { session.report() } else { None };

        Self {
            variant_slug: variant.as_str(),
            variant_name: variant.display_name(),
            step_index: current,
            step_title: info.title,
            step_description: info.description,
            steps,
            fields,
            is_first: session.is_first_step(),
            is_results: session.is_results_step(),
            is_last_question: session.is_last_question_step(),
            result_kg: session.result().map(|f| f.kg().to_string()).unwrap_or_default(),
            has_report: report.is_some(),
            report: report.map(ReportView::from).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{HabitsCalculator, UsageCalculator};

    #[test]
    fn test_first_step_view() {
        let session = WizardSession::<HabitsCalculator>::new().update("dailyDiet", "evde");
        let view = WizardView::from_session(&session);

        assert_eq!(view.variant_slug, "habits");
        assert!(view.is_first);
        assert!(!view.has_report);
        assert_eq!(view.result_kg, "");
        assert_eq!(view.steps.len(), 4);
        assert!(view.steps[0].active);

        let visible: Vec<&str> = view.fields.iter().filter(|f| f.visible).map(|f| f.key).collect();
        assert_eq!(visible, vec!["meatFrequency", "dailyDiet", "monthlyPackages"]);

        let diet = view.fields.iter().find(|f| f.key == "dailyDiet").unwrap();
        assert!(diet.is_choice);
        assert!(diet.options.iter().any(|o| o.token == "evde" && o.selected));
    }

    #[test]
    fn test_results_view() {
        let session = WizardSession::<UsageCalculator>::new()
            .update("carKm", "1000")
            .update("dietType", "vegan")
            .update("recyclingFrequency", "cok")
            .advance()
            .advance()
            .advance();
        let view = WizardView::from_session(&session);

        assert!(view.is_results);
        assert!(view.has_report);
        assert_eq!(view.result_kg, "885");
        assert_eq!(view.report.tonnes_display, "0.9");
        assert_eq!(view.report.label, "Düşük");
        assert!(!view.report.show_multiplier);
        assert_eq!(view.report.tips.len(), 4);
        assert!(view.fields.iter().all(|f| !f.visible));
        assert!(view.steps[..3].iter().all(|s| s.completed));
    }
}
