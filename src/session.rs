//! Wizard Session
//!
//! Explicit state for one pass through a questionnaire: current step,
//! answers so far and the computed result. Every transition consumes the
//! session and returns the next one, so a handler owns its state and there
//! is nothing global to mutate.

use std::fmt;

use crate::calculator::{Footprint, FootprintCalculator};
use crate::report::FootprintReport;
use crate::survey::{Step, Survey};

/// User navigation intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    Next,
    Back,
    Reset,
}

impl WizardAction {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "next" => Some(WizardAction::Next),
            "back" => Some(WizardAction::Back),
            "reset" => Some(WizardAction::Reset),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WizardAction::Next => "next",
            WizardAction::Back => "back",
            WizardAction::Reset => "reset",
        }
    }
}

pub struct WizardSession<C: FootprintCalculator> {
    step: usize,
    answers: C::Answers,
    result: Option<Footprint>,
}

impl<C: FootprintCalculator> WizardSession<C> {
    /// Fresh session: first step, empty answers, no result
    pub fn new() -> Self {
        Self {
            step: 0,
            answers: C::Answers::default(),
            result: None,
        }
    }

    /// Rebuild a session from state carried by a client (e.g. a form post).
    ///
    /// Field edits are applied in order; out-of-range steps are clamped to
    /// the results step.
    pub fn restore<'a, I>(step: usize, result: Option<Footprint>, fields: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut answers = C::Answers::default();
        for (key, raw) in fields {
            answers.set_field(key, raw);
        }
        Self {
            step: step.min(Self::last_step()),
            answers,
            result,
        }
    }

    fn last_step() -> usize {
        C::Answers::results_step()
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn step_info(&self) -> &'static Step {
        &C::Answers::steps()[self.step]
    }

    pub fn answers(&self) -> &C::Answers {
        &self.answers
    }

    pub fn result(&self) -> Option<Footprint> {
        self.result
    }

    pub fn is_first_step(&self) -> bool {
        self.step == 0
    }

    pub fn is_results_step(&self) -> bool {
        self.step == Self::last_step()
    }

    /// True on the step whose "next" triggers the calculation
    pub fn is_last_question_step(&self) -> bool {
        self.step + 1 == Self::last_step()
    }

    /// Apply one field edit
    pub fn update(mut self, key: &str, raw: &str) -> Self {
        self.answers.set_field(key, raw);
        self
    }

    /// Move forward. Leaving the last question step computes the result.
    /// No-op on the results step.
    pub fn advance(mut self) -> Self {
        let last = Self::last_step();
        let leaving = self.step;
        if self.step < last {
            self.step += 1;
        }
        if last > 0 && leaving == last - 1 {
            self.result = Some(C::compute(&self.answers));
        }
        self
    }

    /// Move back one step. The stored result is kept.
    pub fn retreat(mut self) -> Self {
        if self.step > 0 {
            self.step -= 1;
        }
        self
    }

    /// Discard everything and start over
    pub fn reset(self) -> Self {
        tracing::debug!(variant = C::variant().as_str(), "Wizard reset");
        Self::new()
    }

    pub fn apply(self, action: WizardAction) -> Self {
        match action {
            WizardAction::Next => self.advance(),
            WizardAction::Back => self.retreat(),
            WizardAction::Reset => self.reset(),
        }
    }

    /// Results-screen content, once a result exists
    pub fn report(&self) -> Option<FootprintReport> {
        self.result
            .map(|footprint| FootprintReport::from_footprint::<C>(footprint, &self.answers))
    }
}

impl<C: FootprintCalculator> Default for WizardSession<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: FootprintCalculator> Clone for WizardSession<C> {
    fn clone(&self) -> Self {
        Self {
            step: self.step,
            answers: self.answers.clone(),
            result: self.result,
        }
    }
}

impl<C: FootprintCalculator> fmt::Debug for WizardSession<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WizardSession")
            .field("variant", &C::variant())
            .field("step", &self.step)
            .field("answers", &self.answers)
            .field("result", &self.result)
            .finish()
    }
}

impl<C: FootprintCalculator> PartialEq for WizardSession<C>
where
    C::Answers: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.step == other.step && self.answers == other.answers && self.result == other.result
    }
}
