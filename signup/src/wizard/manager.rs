use std::collections::VecDeque;

use super::notifier::{LogNotifier, Notifier};
use super::{
    Field, FieldValidator, FormRecord, ValidationErrors, WizardAction, WizardState, WizardStep,
};
use crate::config::{ValidationMode, WizardConfig};
use crate::util::errors::{FieldValidationError, WizardError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&WizardState)>;

/// Step controller and state store for the signup form.
///
/// Renderers either call the operations directly (`advance`, `retreat`,
/// `submit`, `edit_field`) or `dispatch` actions and call `update` once per
/// frame. Every operation that changes the state publishes the new
/// [`WizardState`] to all subscribers.
pub struct WizardManager {
    // Current state - single source of truth
    state: WizardState,

    validator: FieldValidator,
    mode: ValidationMode,
    notifier: Box<dyn Notifier>,

    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,

    // Action queue for sequential processing
    pending_actions: VecDeque<WizardAction>,
}

impl Default for WizardManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardManager {
    pub fn new() -> Self {
        Self::with_validator(FieldValidator::default())
    }

    pub fn with_validator(validator: FieldValidator) -> Self {
        Self {
            state: WizardState::default(),
            validator,
            mode: ValidationMode::default(),
            notifier: Box::new(LogNotifier),
            listeners: Vec::new(),
            next_subscription: 0,
            pending_actions: VecDeque::new(),
        }
    }

    /// Build a manager from configuration, loading the schema file if one is
    /// configured.
    pub fn from_config(config: &WizardConfig) -> Result<Self, WizardError> {
        let schema = config.load_schema()?;
        Ok(Self::with_validator(FieldValidator::new(schema)).with_mode(config.form.validation_mode))
    }

    pub fn with_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    /// UI reads this - immutable reference
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn current_step(&self) -> WizardStep {
        self.state.current_step
    }

    pub fn record(&self) -> &FormRecord {
        &self.state.record
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.state.errors
    }

    pub fn validator(&self) -> &FieldValidator {
        &self.validator
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&WizardState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// UI calls this - just queues the action
    pub fn dispatch(&mut self, action: WizardAction) {
        log::debug!("Dispatching action: {}", action.description());
        self.pending_actions.push_back(action);
    }

    /// Call this each frame - drains the queue in FIFO order, running each
    /// action to completion. Returns how many actions were processed.
    pub fn update(&mut self) -> usize {
        let mut processed = 0;
        while let Some(action) = self.pending_actions.pop_front() {
            log::debug!("Processing action: {}", action.description());
            self.apply(action);
            processed += 1;
        }
        processed
    }

    pub fn has_pending_actions(&self) -> bool {
        !self.pending_actions.is_empty()
    }

    pub fn clear_pending_actions(&mut self) {
        self.pending_actions.clear();
    }

    /// Run one action immediately, bypassing the queue.
    pub fn apply(&mut self, action: WizardAction) {
        match action {
            WizardAction::EditField { field, value } => self.edit_field(field, value),
            WizardAction::Advance => {
                let _ = self.advance();
            }
            WizardAction::Retreat => {
                self.retreat();
            }
            WizardAction::Submit => {
                let _ = self.submit();
            }
            WizardAction::Reset => self.reset(),
            WizardAction::ClearErrors => self.clear_errors(),
        }
    }

    pub fn edit_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        self.transact(|m| m.handle_edit_field(field, value));
    }

    /// Move forward if the current step's field validates. At the last step
    /// this is a no-op and returns that step.
    pub fn advance(&mut self) -> Result<WizardStep, FieldValidationError> {
        self.transact(Self::handle_advance)
    }

    /// Move back one step; a no-op on the first step.
    pub fn retreat(&mut self) -> WizardStep {
        self.transact(Self::handle_retreat)
    }

    /// Validate the whole record and hand it to the notifier. Not gated on
    /// the current step.
    pub fn submit(&mut self) -> Result<FormRecord, ValidationErrors> {
        self.transact(Self::handle_submit)
    }

    pub fn reset(&mut self) {
        self.transact(|m| {
            m.state = WizardState::default();
            m.pending_actions.clear();
            log::info!("Form state reset");
        })
    }

    pub fn clear_errors(&mut self) {
        self.transact(|m| m.state.clear_errors())
    }
}

// Action handler implementations
impl WizardManager {
    /// Run `op` and publish the resulting state if anything changed.
    fn transact<T>(&mut self, op: impl FnOnce(&mut Self) -> T) -> T {
        let before = self.state.clone();
        let result = op(self);
        self.state.update_navigation();
        if self.state != before {
            self.publish();
        }
        result
    }

    fn publish(&mut self) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }

    fn handle_edit_field(&mut self, field: Field, value: String) {
        if !self.state.record.set(field, value) {
            return;
        }
        self.state.submitted = false;

        if self.mode == ValidationMode::OnChange {
            match self.validator.validate_field(&self.state.record, field) {
                Ok(()) => self.state.clear_error(field),
                Err(error) => self.state.set_error(error),
            }
        }
    }

    fn handle_advance(&mut self) -> Result<WizardStep, FieldValidationError> {
        let step = self.state.current_step;
        let Some(next) = step.next() else {
            log::debug!("Advance ignored: {:?} is the last step", step);
            return Ok(step);
        };

        let field = step.field();
        if let Err(error) = self.validator.validate_field(&self.state.record, field) {
            log::warn!("Cannot advance from {:?}: {}", step, error);
            self.state.set_error(error.clone());
            return Err(error);
        }

        self.state.clear_error(field);
        self.state.current_step = next;
        log::info!("Advanced to step: {:?}", next);
        Ok(next)
    }

    fn handle_retreat(&mut self) -> WizardStep {
        let step = self.state.current_step;
        match step.previous() {
            Some(previous) => {
                self.state.current_step = previous;
                log::info!("Went back to step: {:?}", previous);
                previous
            }
            None => step,
        }
    }

    fn handle_submit(&mut self) -> Result<FormRecord, ValidationErrors> {
        match self.validator.validate_all(&self.state.record) {
            Ok(record) => {
                self.state.clear_errors();
                self.state.submitted = true;
                log::info!("Form submitted from step: {:?}", self.state.current_step);
                self.notifier.notify(record.clone());
                Ok(record)
            }
            Err(errors) => {
                log::warn!("Submit rejected: {}", errors);
                self.state.errors = errors.clone();
                Err(errors)
            }
        }
    }
}
