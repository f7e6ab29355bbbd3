// Pure render functions: each one reads WizardState, draws it, and pushes
// WizardActions for the app to dispatch. None of them touch the manager.

pub mod navigation;
pub mod panels;

use egui::Color32;

pub const BACKGROUND: Color32 = Color32::from_rgb(0xEE, 0xE2, 0xD7);
pub const DISABLED_FILL: Color32 = Color32::from_rgb(0xD1, 0xC7, 0xBD);
pub const ERROR_TEXT: Color32 = Color32::from_rgb(0xEF, 0x44, 0x44);
