use eframe::egui;
use signup_form::{Field, FormAction, FormState, Step};

use super::{ERROR_COLOR, FIELD_SPACING};

/// Field group for the current step plus its navigation row.
pub fn render(ui: &mut egui::Ui, state: &FormState, actions: &mut Vec<FormAction>) {
    let step = state.current_step;

    ui.horizontal(|ui| {
        ui.strong(format!("Paso {} de {}", step.number(), Step::LAST.number()));
        ui.separator();
        ui.label(step.title());
    });
    ui.add(
        egui::ProgressBar::new(f32::from(state.progress_percentage) / 100.0)
            .desired_height(4.0),
    );
    ui.add_space(10.0);

    for &field in step.fields() {
        field_input(ui, state, field, actions);
        ui.add_space(FIELD_SPACING);
    }

    ui.add_space(10.0);
    navigation(ui, state, actions);
}

fn field_input(ui: &mut egui::Ui, state: &FormState, field: Field, actions: &mut Vec<FormAction>) {
    ui.label(field.label());

    let mut buffer = state.values.get(field).to_string();
    let edit = egui::TextEdit::singleline(&mut buffer)
        .id(egui::Id::new(("signup_field", field.name())))
        .password(field.is_secret())
        .desired_width(f32::INFINITY);
    let response = ui.add_enabled(state.inputs_enabled(), edit);

    if response.changed() {
        actions.push(FormAction::SetField {
            field,
            value: buffer,
        });
    } else if response.lost_focus() {
        actions.push(FormAction::Touch(field));
    }

    if let Some(error) = state.visible_error(field) {
        ui.colored_label(ERROR_COLOR, error.to_string());
    }
}

fn navigation(ui: &mut egui::Ui, state: &FormState, actions: &mut Vec<FormAction>) {
    ui.horizontal(|ui| {
        if state.can_go_back && ui.button("Anterior").clicked() {
            actions.push(FormAction::Retreat);
        }

        if state.current_step.is_last() {
            let save = ui.add_enabled(state.can_submit, egui::Button::new("Guardar"));
            if save.clicked() {
                actions.push(FormAction::Submit);
            }
        } else if state.can_go_forward && ui.button("Siguiente").clicked() {
            actions.push(FormAction::Advance);
        }
    });
}
