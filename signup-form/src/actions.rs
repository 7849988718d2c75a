use crate::field::Field;
use crate::step::Step;

#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    // Field input
    SetField { field: Field, value: String },
    Touch(Field),

    // Step control
    Advance,
    Retreat,
    JumpToStep(Step),

    // Submission lifecycle
    Submit,
    Edit,
    ConfirmAnyway,
    Reset,
}

impl FormAction {
    pub fn set(field: Field, value: impl Into<String>) -> Self {
        FormAction::SetField {
            field,
            value: value.into(),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FormAction::SetField { .. } => "Updating field value",
            FormAction::Touch(_) => "Marking field as touched",
            FormAction::Advance => "Advancing to next step",
            FormAction::Retreat => "Going back to previous step",
            FormAction::JumpToStep(_) => "Jumping to specific step",
            FormAction::Submit => "Submitting form",
            FormAction::Edit => "Returning to edit mode",
            FormAction::ConfirmAnyway => "Confirming and resetting form",
            FormAction::Reset => "Resetting form",
        }
    }

    /// Actions only meaningful while the summary is showing.
    pub fn requires_submitted(&self) -> bool {
        matches!(self, FormAction::Edit | FormAction::ConfirmAnyway)
    }

    /// Actions only meaningful while the stepper is showing.
    pub fn requires_editing(&self) -> bool {
        match self {
            FormAction::SetField { .. }
            | FormAction::Touch(_)
            | FormAction::Advance
            | FormAction::Retreat
            | FormAction::JumpToStep(_)
            | FormAction::Submit => true,

            FormAction::Edit | FormAction::ConfirmAnyway | FormAction::Reset => false,
        }
    }
}
