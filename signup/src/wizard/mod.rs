pub mod actions;
pub mod manager;
pub mod notifier;
pub mod state;
pub mod validator;

#[cfg(test)]
mod tests;

pub use actions::WizardAction;
pub use manager::{SubscriptionId, WizardManager};
pub use notifier::{LogNotifier, Notifier};
pub use state::{Field, FormRecord, ValidationErrors, WizardState, WizardStep};
pub use validator::FieldValidator;
