//! Three-step signup form: a step controller gated by a declarative field
//! schema, publishing state snapshots to whatever renders it.

pub mod config;
pub mod meta;
pub mod util;
pub mod wizard;

pub use config::{FormConfig, UiConfig, ValidationMode, WizardConfig};
pub use meta::{Constraint, FieldRule, Pattern, Schema};
pub use util::errors::{FieldValidationError, WizardError};
pub use wizard::{
    Field, FieldValidator, FormRecord, LogNotifier, Notifier, SubscriptionId, ValidationErrors,
    WizardAction, WizardManager, WizardState, WizardStep,
};
