use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::step::Step;
use crate::validation::{validate, FieldError, ValidationReport};
use crate::values::FormValues;

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Editing,
    /// Holds the values frozen at the moment of a successful submit.
    Submitted(FormValues),
}

impl Default for Mode {
    fn default() -> Self {
        Self::Editing
    }
}

/// Notifications for the UI, drained with `SignupManager::take_events`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FormEvent {
    Advanced(Step),
    Retreated(Step),
    Submitted,
    SubmitRejected { error_count: usize },
    Edited,
    /// The host should discard everything, as a page reload would.
    ReloadRequested,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    // Current wizard position
    pub current_step: Step,

    // Field values and which ones may show their error
    pub values: FormValues,
    pub touched: BTreeSet<Field>,

    // Recomputed after every change
    pub validation: ValidationReport,

    // Submission
    pub mode: Mode,
    pub is_submitting: bool,

    // Derived navigation flags
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub can_submit: bool,
    pub progress_percentage: u8,
}

impl Default for FormState {
    fn default() -> Self {
        let values = FormValues::default();
        let validation = validate(&values);
        let mut state = Self {
            current_step: Step::default(),
            values,
            touched: BTreeSet::new(),
            validation,
            mode: Mode::default(),
            is_submitting: false,
            can_go_back: false,
            can_go_forward: false,
            can_submit: false,
            progress_percentage: 0,
        };
        state.refresh_flags();
        state
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.mode, Mode::Submitted(_))
    }

    pub fn snapshot(&self) -> Option<&FormValues> {
        match &self.mode {
            Mode::Submitted(values) => Some(values),
            Mode::Editing => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validation.is_valid()
    }

    /// Message to render under `field`, if it has been touched and fails.
    pub fn visible_error(&self, field: Field) -> Option<FieldError> {
        if self.touched.contains(&field) {
            self.validation.error(field)
        } else {
            None
        }
    }

    pub fn visible_errors(&self) -> Vec<(Field, FieldError)> {
        Field::ALL
            .iter()
            .filter_map(|&field| self.visible_error(field).map(|error| (field, error)))
            .collect()
    }

    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    pub fn touch_all(&mut self) {
        self.touched.extend(Field::ALL);
    }

    pub fn revalidate(&mut self) {
        self.validation = validate(&self.values);
    }

    pub fn inputs_enabled(&self) -> bool {
        !self.is_submitting && !self.is_submitted()
    }

    pub fn refresh_flags(&mut self) {
        let editing = !self.is_submitted();
        self.can_go_back = editing && !self.current_step.is_first();
        self.can_go_forward = editing && !self.current_step.is_last();
        self.can_submit = editing
            && self.current_step.is_last()
            && self.validation.is_valid()
            && !self.is_submitting;
        self.progress_percentage = self.current_step.progress_percentage();
    }
}
