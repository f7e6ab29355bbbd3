use super::state::Field;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardAction {
    // Data updates
    EditField { field: Field, value: String },

    // Navigation
    Advance,
    Retreat,

    // Terminal action, independent of the current step
    Submit,

    // Housekeeping
    Reset,
    ClearErrors,
}

impl WizardAction {
    pub fn description(&self) -> &'static str {
        match self {
            WizardAction::EditField { .. } => "Editing field",
            WizardAction::Advance => "Advancing to next step",
            WizardAction::Retreat => "Going back to previous step",
            WizardAction::Submit => "Submitting form",
            WizardAction::Reset => "Resetting form",
            WizardAction::ClearErrors => "Clearing validation errors",
        }
    }

    pub fn edit(field: Field, value: impl Into<String>) -> Self {
        WizardAction::EditField {
            field,
            value: value.into(),
        }
    }
}
