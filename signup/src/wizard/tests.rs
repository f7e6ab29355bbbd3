use std::cell::RefCell;
use std::rc::Rc;

use crate::config::ValidationMode;
use crate::wizard::{
    Field, FieldValidator, FormRecord, WizardAction, WizardManager, WizardState, WizardStep,
};

const TOO_SHORT: &str = "Password is too short - should be 8 chars minimum.";
const NO_LETTER: &str = "Password can only contain Latin letters.";

fn filled_manager() -> WizardManager {
    let mut manager = WizardManager::new();
    manager.edit_field(Field::Name, "alice");
    manager.edit_field(Field::Password, "secret12");
    manager.edit_field(Field::Address, "1 Main St");
    manager
}

fn recorded_states(manager: &mut WizardManager) -> Rc<RefCell<Vec<WizardState>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    manager.subscribe(move |state| sink.borrow_mut().push(state.clone()));
    seen
}

#[test]
fn test_manager_initialization() {
    let manager = WizardManager::new();
    let state = manager.state();

    assert_eq!(state.current_step, WizardStep::Username);
    assert_eq!(state.record, FormRecord::default());
    assert!(!state.has_errors());
    assert!(!state.can_go_back);
    assert!(state.can_go_forward);
    assert!(!state.submitted);
    assert_eq!(state.panel_offset_percent(), 0);
}

#[test]
fn test_validate_field_empty_name_fails() {
    let validator = FieldValidator::default();
    let err = validator
        .validate_field(&FormRecord::default(), Field::Name)
        .unwrap_err();

    assert_eq!(err.field, Field::Name);
    assert_eq!(err.message, "name is a required field");
}

#[test]
fn test_short_passwords_report_too_short() {
    let validator = FieldValidator::default();
    for password in ["a", "abc", "1234567", "!!!!!!!", "abcdefg"] {
        let record = FormRecord::new("alice", password, "1 Main St");
        let err = validator.validate_field(&record, Field::Password).unwrap_err();
        assert_eq!(err.message, TOO_SHORT, "password {:?}", password);
    }
}

#[test]
fn test_letterless_passwords_fail_pattern() {
    let validator = FieldValidator::default();
    for password in ["12345678", "!@#$%^&*()", "ąęółśżźćń"] {
        let record = FormRecord::new("alice", password, "1 Main St");
        let err = validator.validate_field(&record, Field::Password).unwrap_err();
        assert_eq!(err.message, NO_LETTER, "password {:?}", password);
    }
}

#[test]
fn test_passwords_with_a_latin_letter_pass() {
    let validator = FieldValidator::default();
    for password in ["abc12345", "secret12", "1234567x", "Z!!!!!!!", "abcdefgh"] {
        let record = FormRecord::new("alice", password, "1 Main St");
        assert!(
            validator.validate_field(&record, Field::Password).is_ok(),
            "password {:?}",
            password
        );
    }
}

#[test]
fn test_empty_password_reports_required_first() {
    let validator = FieldValidator::default();
    let err = validator
        .validate_field(&FormRecord::default(), Field::Password)
        .unwrap_err();
    assert_eq!(err.message, "No password provided.");
}

#[test]
fn test_validate_all_collects_every_failing_field() {
    let validator = FieldValidator::default();
    let errors = validator
        .validate_all(&FormRecord::new("", "short", ""))
        .unwrap_err();

    assert_eq!(errors.len(), 3);
    assert_eq!(errors.get(Field::Name), Some("name is a required field"));
    assert_eq!(errors.get(Field::Password), Some(TOO_SHORT));
    assert_eq!(errors.get(Field::Address), Some("address is a required field"));
}

#[test]
fn test_validate_all_returns_record_unchanged() {
    let record = FormRecord::new("alice", "secret12", "1 Main St");
    let validated = FieldValidator::default().validate_all(&record).unwrap();
    assert_eq!(validated, record);
}

#[test]
fn test_advance_blocked_on_empty_name() {
    let mut manager = WizardManager::new();

    let err = manager.advance().unwrap_err();

    assert_eq!(err.field, Field::Name);
    assert_eq!(manager.current_step(), WizardStep::Username);
    assert_eq!(
        manager.state().error_for(Field::Name),
        Some("name is a required field")
    );
}

#[test]
fn test_workflow_progression() {
    let mut manager = filled_manager();

    assert_eq!(manager.advance().unwrap(), WizardStep::Password);
    assert!(manager.state().can_go_back);
    assert_eq!(manager.state().panel_offset_percent(), 100);

    assert_eq!(manager.advance().unwrap(), WizardStep::Address);
    assert!(!manager.state().can_go_forward);
    assert_eq!(manager.state().panel_offset_percent(), 200);
}

#[test]
fn test_advance_blocked_on_weak_password() {
    let mut manager = WizardManager::new();
    manager.edit_field(Field::Name, "alice");
    manager.edit_field(Field::Password, "12345678");
    manager.advance().unwrap();

    let err = manager.advance().unwrap_err();

    assert_eq!(err.message, NO_LETTER);
    assert_eq!(manager.current_step(), WizardStep::Password);
}

#[test]
fn test_advance_is_noop_on_last_step() {
    let mut manager = filled_manager();
    manager.advance().unwrap();
    manager.advance().unwrap();

    // address is not validated by advance, even when empty
    manager.edit_field(Field::Address, "");
    manager.clear_errors();
    for _ in 0..3 {
        assert_eq!(manager.advance().unwrap(), WizardStep::Address);
    }
    assert!(!manager.state().has_errors());
}

#[test]
fn test_retreat_is_noop_on_first_step() {
    let mut manager = WizardManager::new();
    for _ in 0..3 {
        assert_eq!(manager.retreat(), WizardStep::Username);
    }
    assert_eq!(manager.current_step(), WizardStep::Username);
}

#[test]
fn test_retreat_never_validates() {
    let mut manager = filled_manager();
    manager.advance().unwrap();
    manager.advance().unwrap();
    manager.edit_field(Field::Name, "");
    manager.clear_errors();

    assert_eq!(manager.retreat(), WizardStep::Password);
    assert_eq!(manager.retreat(), WizardStep::Username);
    assert!(!manager.state().has_errors());
}

#[test]
fn test_successful_advance_clears_field_error() {
    let mut manager = WizardManager::new();
    manager.advance().unwrap_err();
    assert!(manager.state().error_for(Field::Name).is_some());

    manager.edit_field(Field::Name, "alice");
    manager.advance().unwrap();

    assert!(manager.state().error_for(Field::Name).is_none());
}

#[test]
fn test_on_change_mode_revalidates_edited_field() {
    let mut manager = WizardManager::new();

    manager.edit_field(Field::Password, "abc");
    assert_eq!(manager.state().error_for(Field::Password), Some(TOO_SHORT));

    manager.edit_field(Field::Password, "abcdefgh");
    assert_eq!(manager.state().error_for(Field::Password), None);

    // other fields are untouched
    assert_eq!(manager.state().error_for(Field::Name), None);
}

#[test]
fn test_on_submit_mode_leaves_errors_alone_while_editing() {
    let mut manager = WizardManager::new().with_mode(ValidationMode::OnSubmit);

    manager.edit_field(Field::Password, "abc");
    assert!(!manager.state().has_errors());

    manager.advance().unwrap_err();
    manager.edit_field(Field::Name, "alice");
    // the stale error stays until the next validation attempt
    assert!(manager.state().error_for(Field::Name).is_some());
}

#[test]
fn test_submit_notifies_once_with_record() {
    let submitted = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&submitted);
    let mut manager = filled_manager()
        .with_notifier(move |record: FormRecord| sink.borrow_mut().push(record));

    let record = manager.submit().unwrap();

    assert_eq!(record, FormRecord::new("alice", "secret12", "1 Main St"));
    assert_eq!(submitted.borrow().as_slice(), &[record]);
    assert!(manager.state().submitted);
}

#[test]
fn test_submit_is_not_step_gated() {
    let submitted = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&submitted);
    let mut manager =
        filled_manager().with_notifier(move |_record: FormRecord| *sink.borrow_mut() += 1);

    assert_eq!(manager.current_step(), WizardStep::Username);
    manager.submit().unwrap();
    assert_eq!(*submitted.borrow(), 1);
}

#[test]
fn test_failed_submit_surfaces_all_errors_without_notifying() {
    let submitted = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&submitted);
    let mut manager =
        WizardManager::new().with_notifier(move |_record: FormRecord| *sink.borrow_mut() += 1);
    manager.edit_field(Field::Name, "alice");

    let errors = manager.submit().unwrap_err();

    assert_eq!(errors.len(), 2);
    assert_eq!(manager.errors(), &errors);
    assert!(!manager.state().submitted);
    assert_eq!(*submitted.borrow(), 0);
}

#[test]
fn test_edit_after_submit_clears_submitted_flag() {
    let mut manager = filled_manager();
    manager.submit().unwrap();

    manager.edit_field(Field::Address, "2 Side St");

    assert!(!manager.state().submitted);
}

#[test]
fn test_listeners_receive_snapshots_for_changes_only() {
    let mut manager = WizardManager::new();
    let seen = recorded_states(&mut manager);

    manager.retreat(); // no-op
    manager.edit_field(Field::Name, "alice");
    manager.edit_field(Field::Name, "alice"); // unchanged value
    manager.advance().unwrap();

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].record.name, "alice");
    assert_eq!(seen[1].current_step, WizardStep::Password);
}

#[test]
fn test_failed_advance_publishes_error() {
    let mut manager = WizardManager::new();
    let seen = recorded_states(&mut manager);

    manager.advance().unwrap_err();
    // same error again: nothing new to publish
    manager.advance().unwrap_err();

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].current_step, WizardStep::Username);
    assert!(seen[0].error_for(Field::Name).is_some());
}

#[test]
fn test_unsubscribe_stops_delivery() {
    let mut manager = WizardManager::new();
    let count = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    let id = manager.subscribe(move |_| *sink.borrow_mut() += 1);

    manager.edit_field(Field::Name, "a");
    assert!(manager.unsubscribe(id));
    assert!(!manager.unsubscribe(id));
    manager.edit_field(Field::Name, "ab");

    assert_eq!(*count.borrow(), 1);
}

#[test]
fn test_listeners_called_in_subscription_order() {
    let mut manager = WizardManager::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    for tag in ["first", "second"] {
        let sink = Rc::clone(&order);
        manager.subscribe(move |_| sink.borrow_mut().push(tag));
    }

    manager.edit_field(Field::Name, "alice");

    assert_eq!(order.borrow().as_slice(), &["first", "second"]);
}

#[test]
fn test_action_queuing() {
    let mut manager = WizardManager::new();

    manager.dispatch(WizardAction::edit(Field::Name, "alice"));
    manager.dispatch(WizardAction::Advance);
    manager.dispatch(WizardAction::edit(Field::Password, "secret12"));
    manager.dispatch(WizardAction::Advance);

    assert!(manager.has_pending_actions());
    // nothing happens until update runs
    assert_eq!(manager.current_step(), WizardStep::Username);

    assert_eq!(manager.update(), 4);
    assert!(!manager.has_pending_actions());
    assert_eq!(manager.current_step(), WizardStep::Address);
}

#[test]
fn test_queued_advance_before_edit_is_blocked() {
    let mut manager = WizardManager::new();

    manager.dispatch(WizardAction::Advance);
    manager.dispatch(WizardAction::edit(Field::Name, "alice"));
    manager.update();

    assert_eq!(manager.current_step(), WizardStep::Username);
    // the on-change validation of the edit cleared the advance error
    assert!(manager.state().error_for(Field::Name).is_none());
}

#[test]
fn test_reset_restores_initial_state() {
    let mut manager = filled_manager();
    manager.advance().unwrap();
    manager.submit().unwrap();
    manager.dispatch(WizardAction::Advance);

    manager.reset();

    assert_eq!(manager.state(), &WizardState::default());
    assert!(!manager.has_pending_actions());
}

#[test]
fn test_step_navigation_helpers() {
    assert_eq!(WizardStep::Username.next(), Some(WizardStep::Password));
    assert_eq!(WizardStep::Address.next(), None);
    assert_eq!(WizardStep::Username.previous(), None);
    assert_eq!(WizardStep::from_index(2), Some(WizardStep::Address));
    assert_eq!(WizardStep::from_index(3), None);
    assert_eq!(WizardStep::Password.field(), Field::Password);
}

#[test]
fn test_field_parsing() {
    assert_eq!("address".parse::<Field>().unwrap(), Field::Address);
    assert!("email".parse::<Field>().is_err());
    assert_eq!(Field::Password.to_string(), "password");
}
