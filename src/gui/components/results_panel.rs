// src/gui/components/results_panel.rs
//
// Heading, chart and per-year values for the selected district.
// Hidden until the first selection.

use eframe::egui::{self, Align, Layout, RichText};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;
use crate::series::ChartSeries;

const TABLE_H: f32 = 150.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if !app.controller.results_visible() {
        return;
    }

    ui.add_space(8.0);
    ui.heading(app.controller.heading());

    if let Some(err) = app.controller.last_error() {
        ui.colored_label(ui.visuals().error_fg_color, err);
    }

    let before = app.state.gui.show_values_table;
    ui.checkbox(&mut app.state.gui.show_values_table, "Show values");
    if app.state.gui.show_values_table != before {
        logf!("UI: show_values_table → {}", app.state.gui.show_values_table);
    }

    let table_h = if app.state.gui.show_values_table { TABLE_H } else { 0.0 };
    let chart_h = (ui.available_height() - table_h - 8.0).max(160.0);
    app.controller.chart().surface().draw(ui, chart_h);

    if app.state.gui.show_values_table {
        if let Some(series) = app.controller.series() {
            values_table(ui, series);
        }
    }
}

fn values_table(ui: &mut egui::Ui, series: &ChartSeries) {
    ui.add_space(8.0);
    TableBuilder::new(ui)
        .id_salt("values_table")
        .striped(true)
        .max_scroll_height(TABLE_H)
        .column(Column::initial(100.0).resizable(false))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.label(RichText::new("Year").strong());
            });
            header.col(|ui| {
                ui.label(RichText::new("Rate (%)").strong());
            });
        })
        .body(|mut body| {
            for p in series.points() {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(p.label);
                    });
                    row.col(|ui| {
                        ui.with_layout(Layout::left_to_right(Align::Center), |ui| match p.value {
                            Some(v) => ui.label(format!("{v}")),
                            None => ui.weak("n/a"),
                        });
                    });
                });
            }
        });
}
