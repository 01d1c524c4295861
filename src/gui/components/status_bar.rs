// src/gui/components/status_bar.rs
use eframe::egui;

use crate::controller::LoadState;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    ui.horizontal(|ui| {
        match app.controller.load_state() {
            LoadState::Loading => {
                ui.spinner();
                ui.label(format!("Loading {}…", app.dataset_path.display()));
            }
            LoadState::Ready => {
                ui.label(format!(
                    "{} districts from {}",
                    app.controller.dataset().len(),
                    app.dataset_path.display()
                ));
            }
            LoadState::Failed(err) => {
                ui.colored_label(
                    ui.visuals().error_fg_color,
                    format!("Failed to load {}: {err}", app.dataset_path.display()),
                );
            }
        }
    });
}
