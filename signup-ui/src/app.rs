use eframe::egui;
use signup_form::{FormAction, FormEvent, Mode, SignupManager};

use crate::config::UiConfig;
use crate::ui::{stepper, summary};
use crate::wasm_utils;

/// Signup wizard application
pub struct SignupApp {
    manager: SignupManager,
    title: String,
}

impl SignupApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &UiConfig) -> Self {
        wasm_utils::set_panic_hook();
        wasm_utils::console_log("Starting signup form");

        let visuals = if config.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        cc.egui_ctx.set_visuals(visuals);

        Self {
            manager: SignupManager::new(),
            title: config.window_title.clone(),
        }
    }

    fn apply(&mut self, actions: Vec<FormAction>) -> bool {
        let changed = !actions.is_empty();
        for action in actions {
            self.manager.dispatch(action);
        }
        self.manager.process_all();

        for event in self.manager.take_events() {
            match event {
                FormEvent::ReloadRequested => wasm_utils::reload_page(),
                other => log::debug!("Form event: {:?}", other),
            }
        }

        changed
    }
}

impl eframe::App for SignupApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading(self.title.as_str());
                ui.separator();
                ui.add_space(8.0);

                let state = self.manager.state();
                match &state.mode {
                    Mode::Editing => stepper::render(ui, state, &mut actions),
                    Mode::Submitted(snapshot) => summary::render(ui, snapshot, &mut actions),
                }
            });
        });

        if self.apply(actions) {
            ctx.request_repaint();
        }
    }
}
