use eframe::egui;
use signup_form::{FormAction, FormValues};

/// Read-only confirmation panel shown after a successful submit.
pub fn render(ui: &mut egui::Ui, snapshot: &FormValues, actions: &mut Vec<FormAction>) {
    ui.heading("Confirma!");
    ui.add_space(8.0);

    egui::Grid::new("summary_grid")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .striped(true)
        .show(ui, |ui| {
            for (field, value) in snapshot.summary_rows() {
                ui.strong(field.label());
                ui.label(value);
                ui.end_row();
            }
        });

    ui.add_space(12.0);

    ui.horizontal(|ui| {
        if ui.button("Editar").clicked() {
            actions.push(FormAction::Edit);
        }
        if ui.button("Confirmar").clicked() {
            actions.push(FormAction::ConfirmAnyway);
        }
    });
}
