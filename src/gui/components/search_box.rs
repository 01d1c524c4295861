// src/gui/components/search_box.rs
//
// Search input plus the suggestion dropdown floating under it.
// Every edit re-runs the search; a primary click outside the input and the
// dropdown closes it without selecting anything.

use eframe::egui::{self, Id, Order, Rect, TextEdit};

use crate::controller::UiEvent;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let resp = ui.add(
        TextEdit::singleline(app.controller.input_mut())
            .hint_text("Search for a district…")
            .desired_width(f32::INFINITY),
    );

    if resp.changed() {
        let text = app.controller.input().to_owned();
        app.controller.dispatch(UiEvent::TextChanged(text));
    }

    let mut search_region: Rect = resp.rect;
    let mut picked: Option<usize> = None;

    if app.controller.panel_open() {
        let rows: Vec<(usize, String)> = app
            .controller
            .suggestion_rows()
            .into_iter()
            .map(|(ix, name)| (ix, name.to_owned()))
            .collect();

        let width = resp.rect.width();
        let area = egui::Area::new(Id::new("district_suggestions"))
            .order(Order::Foreground)
            .fixed_pos(resp.rect.left_bottom())
            .show(ui.ctx(), |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_min_width(width);
                    for (ix, name) in &rows {
                        if ui.selectable_label(false, name.as_str()).clicked() {
                            picked = Some(*ix);
                        }
                    }
                });
            });
        search_region = search_region.union(area.response.rect);
    }

    if let Some(ix) = picked {
        logf!("UI: Suggestion picked (row {ix})");
        app.controller.dispatch(UiEvent::SuggestionActivated(ix));
        return;
    }

    if app.controller.panel_open() {
        let outside = ui.input(|i| {
            i.pointer.primary_clicked()
                && i.pointer
                    .interact_pos()
                    .is_some_and(|pos| !search_region.contains(pos))
        });
        if outside {
            app.controller.dispatch(UiEvent::OutsideInteraction);
        }
    }
}
