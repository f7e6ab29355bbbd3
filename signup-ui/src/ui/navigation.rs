use egui::{Align2, Color32, Id, RichText};
use signup::{WizardAction, WizardState};

use super::DISABLED_FILL;

/// prev/next buttons floating at the right edge. Boundary buttons stay
/// clickable but are drawn greyed out.
pub fn render_navigation(
    ctx: &egui::Context,
    state: &WizardState,
    actions: &mut Vec<WizardAction>,
) {
    egui::Area::new(Id::new("signup_navigation"))
        .anchor(Align2::RIGHT_CENTER, [-60.0, 0.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if nav_button(ui, "prev", state.can_go_back).clicked() {
                    actions.push(WizardAction::Retreat);
                }
                if nav_button(ui, "next", state.can_go_forward).clicked() {
                    actions.push(WizardAction::Advance);
                }
            });
        });
}

fn nav_button(ui: &mut egui::Ui, label: &str, active: bool) -> egui::Response {
    let (fill, text) = if active {
        (Color32::BLACK, Color32::WHITE)
    } else {
        (DISABLED_FILL, Color32::GRAY)
    };
    ui.add(egui::Button::new(RichText::new(label).strong().color(text)).fill(fill))
}
