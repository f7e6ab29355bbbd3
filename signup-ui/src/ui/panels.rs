use egui::{Align, Id, Layout, Rect, RichText, UiBuilder};
use signup::{WizardAction, WizardState, WizardStep};

use super::ERROR_TEXT;

/// Lay the three panels out side by side, shifted left by `offset` panel
/// widths, and clip them to `area`.
pub fn render_panel_strip(
    ui: &mut egui::Ui,
    area: Rect,
    offset: f32,
    state: &WizardState,
    actions: &mut Vec<WizardAction>,
) {
    for step in WizardStep::ALL {
        let left = area.left() + (step.index() as f32 - offset) * area.width();
        let panel_rect = Rect::from_min_size(egui::pos2(left, area.top()), area.size());
        if !panel_rect.intersects(area) {
            continue;
        }

        let mut panel_ui = ui.new_child(
            UiBuilder::new()
                .max_rect(panel_rect)
                .layout(Layout::top_down(Align::Center)),
        );
        panel_ui.set_clip_rect(area);
        render_step_panel(&mut panel_ui, step, state, actions);
    }
}

fn render_step_panel(
    ui: &mut egui::Ui,
    step: WizardStep,
    state: &WizardState,
    actions: &mut Vec<WizardAction>,
) {
    let field = step.field();

    ui.add_space(ui.available_height() * 0.35);
    ui.label(RichText::new(field.label()).strong());

    let mut value = state.record.get(field).to_string();
    let response = ui.add(
        egui::TextEdit::singleline(&mut value)
            .id(Id::new(("signup_field", field.as_str())))
            .password(field.is_secret())
            .desired_width(240.0),
    );
    if response.changed() {
        actions.push(WizardAction::edit(field, value));
    }

    if let Some(message) = state.error_for(field) {
        ui.colored_label(ERROR_TEXT, message);
    }

    if step.is_last() {
        ui.add_space(8.0);
        let submitted_with_enter =
            response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button(RichText::new("Save").strong()).clicked() || submitted_with_enter {
            actions.push(WizardAction::Submit);
        }
    }
}
