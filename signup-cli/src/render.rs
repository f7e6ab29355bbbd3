use std::fmt::Write as _;

use signup::{Field, FormRecord, WizardState, WizardStep};

/// Text rendering of the current panel, with the field's error underneath.
pub fn render_panel(state: &WizardState) -> String {
    let step = state.current_step;
    let field = step.field();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "-- step {}/{}: {} --",
        step.index() + 1,
        WizardStep::ALL.len(),
        field.label()
    );
    let _ = writeln!(out, "{}: {}", field.label(), display_value(&state.record, field));
    if let Some(message) = state.error_for(field) {
        let _ = writeln!(out, "  ! {}", message);
    }

    // errors for fields on other panels, e.g. after a failed submit
    for (other, message) in state.errors.iter().filter(|(f, _)| *f != field) {
        let _ = writeln!(out, "  ! {}: {}", other, message);
    }

    let prev = if state.can_go_back { "[prev]" } else { "(prev)" };
    let next = if state.can_go_forward { "[next]" } else { "(next)" };
    let _ = write!(out, "{} {}", prev, next);
    if step.is_last() {
        let _ = write!(out, " [save]");
    }
    out.push('\n');
    out
}

pub fn display_value(record: &FormRecord, field: Field) -> String {
    let value = record.get(field);
    if field.is_secret() {
        "*".repeat(value.chars().count())
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signup::{FieldValidationError, WizardManager};

    #[test]
    fn test_first_panel() {
        let state = WizardState::default();
        assert_eq!(
            render_panel(&state),
            "-- step 1/3: Username --\nUsername: \n(prev) [next]\n"
        );
    }

    #[test]
    fn test_password_is_masked() {
        let mut manager = WizardManager::new();
        manager.edit_field(Field::Name, "alice");
        manager.edit_field(Field::Password, "secret12");
        manager.advance().unwrap();

        let panel = render_panel(manager.state());

        assert!(panel.contains("Type password: ********"));
        assert!(!panel.contains("secret12"));
        assert!(panel.ends_with("[prev] [next]\n"));
    }

    #[test]
    fn test_errors_listed_under_field() {
        let mut state = WizardState::default();
        state.current_step = WizardStep::Address;
        state.update_navigation();
        state.set_error(FieldValidationError::new(Field::Address, "address is a required field"));
        state.set_error(FieldValidationError::new(Field::Name, "name is a required field"));

        let panel = render_panel(&state);

        assert!(panel.contains("  ! address is a required field\n"));
        assert!(panel.contains("  ! name: name is a required field\n"));
        assert!(panel.ends_with("[prev] (next) [save]\n"));
    }
}
