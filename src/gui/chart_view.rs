// src/gui/chart_view.rs
//
// egui_plot-backed chart surface. egui is immediate mode, so "creating" a
// chart means storing its spec; the plot is drawn from it every frame until
// the handle is destroyed.

use std::ops::RangeInclusive;

use eframe::egui::{self, Color32};
use egui_plot::{GridMark, Legend, Line, Plot, PlotPoint, PlotPoints, Points};

use crate::chart::{ChartError, ChartKind, ChartSpec, ChartSurface};

const LINE: Color32 = Color32::from_rgb(99, 102, 241);
const POINT: Color32 = Color32::from_rgb(236, 72, 153);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlotHandle(u64);

#[derive(Default)]
pub struct PlotSurface {
    active: Option<(PlotHandle, ChartSpec)>,
    next_id: u64,
}

impl PlotSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_none()
    }

    pub fn spec(&self) -> Option<&ChartSpec> {
        self.active.as_ref().map(|(_, spec)| spec)
    }

    /// Draw the live chart, if any, filling `height` px.
    pub fn draw(&self, ui: &mut egui::Ui, height: f32) {
        let Some((handle, spec)) = &self.active else {
            return;
        };

        let n = spec.labels.len().max(1);
        let (y_lo, y_hi) = spec.y_range();

        let x_spec = spec.clone();
        let tip_spec = spec.clone();

        // Plot id follows the handle so a new chart never inherits old bounds.
        let mut plot = Plot::new(("absence_chart", handle.0))
            .height(height)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .include_x(-0.25)
            .include_x(n as f64 - 0.75)
            .include_y(y_hi)
            .y_axis_label(spec.options.y_axis_title.clone())
            .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
                x_spec.label_at(mark.value).map(str::to_string).unwrap_or_default()
            })
            .label_formatter(move |_name: &str, pos: &PlotPoint| hover_text(&tip_spec, pos));
        if spec.options.begin_at_zero {
            plot = plot.include_y(0.0);
        } else {
            plot = plot.include_y(y_lo);
        }
        if spec.options.show_legend {
            plot = plot.legend(Legend::default());
        }

        let name = spec.options.series_name.clone();
        let segments = spec.segments();
        let kind = spec.kind;
        plot.show(ui, |plot_ui| match kind {
            ChartKind::Line => {
                for seg in &segments {
                    let pts: Vec<[f64; 2]> = seg.iter().map(|&(ix, v)| [ix as f64, v]).collect();
                    plot_ui.line(
                        Line::new(name.clone(), PlotPoints::from(pts.clone()))
                            .color(LINE)
                            .width(3.0),
                    );
                    plot_ui.points(
                        Points::new(name.clone(), PlotPoints::from(pts))
                            .color(POINT)
                            .radius(5.0),
                    );
                }
            }
        });
    }
}

/// Tooltip near a present point, nothing elsewhere.
fn hover_text(spec: &ChartSpec, pos: &PlotPoint) -> String {
    spec.tooltip_near(pos.x, pos.y).unwrap_or_default()
}

impl ChartSurface for PlotSurface {
    type Handle = PlotHandle;

    fn create(&mut self, spec: &ChartSpec) -> Result<PlotHandle, ChartError> {
        if let Some((old, _)) = &self.active {
            // Adapter always destroys first; anything left here is a leak.
            logw!("Chart: Surface still held {:?} at create; replacing", old);
        }
        self.next_id += 1;
        let handle = PlotHandle(self.next_id);
        self.active = Some((handle, spec.clone()));
        Ok(handle)
    }

    fn destroy(&mut self, handle: PlotHandle) {
        if matches!(&self.active, Some((h, _)) if *h == handle) {
            self.active = None;
        }
    }
}
