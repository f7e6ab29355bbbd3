use std::cell::RefCell;
use std::rc::Rc;

use eframe::egui;
use signup::{Field, FormRecord, UiConfig, WizardAction, WizardManager};

use crate::ui::{self, navigation, panels};

/// Main window: a sliding strip of three panels over a [`WizardManager`].
pub struct SignupApp {
    manager: WizardManager,
    ui_config: UiConfig,

    // Set by the notifier, cleared when the confirmation window is closed
    confirmation: Rc<RefCell<Option<FormRecord>>>,
}

impl SignupApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        manager: WizardManager,
        ui_config: UiConfig,
    ) -> Self {
        let confirmation = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&confirmation);
        let mut manager = manager.with_notifier(move |record: FormRecord| {
            log::info!("Showing confirmation for {}", record.name);
            *sink.borrow_mut() = Some(record);
        });

        let ctx = cc.egui_ctx.clone();
        manager.subscribe(move |_state| ctx.request_repaint());

        Self {
            manager,
            ui_config,
            confirmation,
        }
    }

    fn render_confirmation(&mut self, ctx: &egui::Context) {
        let Some(record) = self.confirmation.borrow().clone() else {
            return;
        };

        let mut open = true;
        egui::Window::new("Saved")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_TOP, [0.0, 24.0])
            .open(&mut open)
            .show(ctx, |ui| {
                egui::Grid::new("submitted_values")
                    .num_columns(2)
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| {
                        for field in Field::ALL {
                            ui.label(egui::RichText::new(field.label()).strong());
                            ui.label(record.get(field));
                            ui.end_row();
                        }
                    });
            });

        if !open {
            self.confirmation.borrow_mut().take();
        }
    }
}

impl eframe::App for SignupApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions: Vec<WizardAction> = Vec::new();
        let state = self.manager.state();

        let target = state.panel_offset_percent() as f32 / 100.0;
        let offset = ctx.animate_value_with_time(
            egui::Id::new("signup_panel_offset"),
            target,
            self.ui_config.transition_ms as f32 / 1000.0,
        );

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(ui::BACKGROUND))
            .show(ctx, |ui| {
                let area = ui.max_rect();
                panels::render_panel_strip(ui, area, offset, state, &mut actions);
            });
        navigation::render_navigation(ctx, state, &mut actions);

        for action in actions {
            self.manager.dispatch(action);
        }
        self.manager.update();

        self.render_confirmation(ctx);
    }
}
