use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::util::errors::{FieldValidationError, WizardError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Password,
    Address,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Password, Field::Address];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Password => "password",
            Field::Address => "address",
        }
    }

    /// Input label shown next to the field.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Username",
            Field::Password => "Type password",
            Field::Address => "Type an address",
        }
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, Field::Password)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "password" => Ok(Field::Password),
            "address" => Ok(Field::Address),
            other => Err(WizardError::UnknownField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRecord {
    pub name: String,
    pub password: String,
    pub address: String,
}

impl FormRecord {
    pub fn new(
        name: impl Into<String>,
        password: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
            address: address.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Password => &self.password,
            Field::Address => &self.address,
        }
    }

    /// Returns true if the stored value changed.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> bool {
        let value = value.into();
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Password => &mut self.password,
            Field::Address => &mut self.address,
        };
        if *slot == value {
            return false;
        }
        *slot = value;
        true
    }
}

/// The three panels of the form, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WizardStep {
    #[default]
    Username,
    Password,
    Address,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [
        WizardStep::Username,
        WizardStep::Password,
        WizardStep::Address,
    ];

    pub fn index(&self) -> usize {
        match self {
            WizardStep::Username => 0,
            WizardStep::Password => 1,
            WizardStep::Address => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The field edited on this step's panel.
    pub fn field(&self) -> Field {
        match self {
            WizardStep::Username => Field::Name,
            WizardStep::Password => Field::Password,
            WizardStep::Address => Field::Address,
        }
    }

    pub fn next(&self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(&self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn is_first(&self) -> bool {
        self.previous().is_none()
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }
}

/// Latest error message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, error: FieldValidationError) {
        self.0.insert(error.field, error.message);
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl FromIterator<FieldValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = FieldValidationError>>(iter: I) -> Self {
        let mut errors = Self::new();
        for error in iter {
            errors.insert(error);
        }
        errors
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    // Current panel
    pub current_step: WizardStep,

    // Values typed so far
    pub record: FormRecord,

    // Latest validation outcome
    pub errors: ValidationErrors,

    // Navigation
    pub can_go_back: bool,
    pub can_go_forward: bool,

    // Set by a successful submit, cleared by the next edit
    pub submitted: bool,
}

impl Default for WizardState {
    fn default() -> Self {
        let mut state = Self {
            current_step: WizardStep::default(),
            record: FormRecord::default(),
            errors: ValidationErrors::default(),
            can_go_back: false,
            can_go_forward: false,
            submitted: false,
        };
        state.update_navigation();
        state
    }
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    pub fn set_error(&mut self, error: FieldValidationError) {
        self.errors.insert(error);
    }

    pub fn clear_error(&mut self, field: Field) {
        self.errors.remove(field);
    }

    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn update_navigation(&mut self) {
        self.can_go_back = !self.current_step.is_first();
        self.can_go_forward = !self.current_step.is_last();
    }

    /// Horizontal offset of the panel strip, as a percentage of one panel.
    pub fn panel_offset_percent(&self) -> u32 {
        self.current_step.index() as u32 * 100
    }
}
