// Pure render functions. Each one:
// 1. Reads FormState (immutable)
// 2. Renders UI based on state
// 3. Pushes FormActions for the app to dispatch to SignupManager

pub mod stepper;
pub mod summary;

use eframe::egui;

pub const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 70, 70);
pub const FIELD_SPACING: f32 = 6.0;
