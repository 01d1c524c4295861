// src/chart/svg.rs
//
// Chart surface that renders to an SVG file (CLI output).
// Each `create` (re)writes the file; `destroy` only forgets the handle.

use std::io;
use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;

use super::{ChartError, ChartKind, ChartSpec, ChartSurface};
use crate::config::consts::SVG_SIZE;

const LINE: RGBColor = RGBColor(99, 102, 241);
const POINT: RGBColor = RGBColor(236, 72, 153);
const AXIS_TEXT: RGBColor = RGBColor(71, 85, 105);

#[derive(Debug, PartialEq, Eq)]
pub struct SvgChart {
    pub path: PathBuf,
}

pub struct SvgSurface {
    path: PathBuf,
    title: Option<String>,
    size: (u32, u32),
    written: usize,
}

impl SvgSurface {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), title: None, size: SVG_SIZE, written: 0 }
    }

    /// Caption drawn above the plot (district name).
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of files written so far.
    pub fn written(&self) -> usize {
        self.written
    }
}

impl ChartSurface for SvgSurface {
    type Handle = SvgChart;

    fn create(&mut self, spec: &ChartSpec) -> Result<SvgChart, ChartError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let root = SVGBackend::new(&self.path, self.size).into_drawing_area();
        draw(&root, spec, self.title.as_deref()).map_err(draw_err)?;
        root.present().map_err(draw_err)?;

        self.written += 1;
        logd!("Chart: SVG written → {}", self.path.display());
        Ok(SvgChart { path: self.path.clone() })
    }

    fn destroy(&mut self, handle: SvgChart) {
        logd!("Chart: SVG handle released ({})", handle.path.display());
    }
}

fn draw(
    root: &DrawingArea<SVGBackend<'_>, Shift>,
    spec: &ChartSpec,
    title: Option<&str>,
) -> Result<(), DrawingAreaErrorKind<io::Error>> {
    root.fill(&WHITE)?;

    let n = spec.labels.len().max(1);
    let (y_lo, y_hi) = spec.y_range();

    let mut builder = ChartBuilder::on(root);
    builder.margin(16).x_label_area_size(36).y_label_area_size(56);
    if let Some(t) = title {
        builder.caption(t, ("sans-serif", 22));
    }
    let mut chart = builder.build_cartesian_2d(-0.25f64..(n as f64 - 0.75), y_lo..y_hi)?;

    let x_fmt = |x: &f64| spec.label_at(*x).map(str::to_string).unwrap_or_default();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n)
        .x_label_formatter(&x_fmt)
        .y_desc(spec.options.y_axis_title.as_str())
        .label_style(("sans-serif", 14).into_font().color(&AXIS_TEXT))
        .draw()?;

    match spec.kind {
        ChartKind::Line => {
            for (i, seg) in spec.segments().iter().enumerate() {
                let line = chart.draw_series(LineSeries::new(
                    seg.iter().map(|&(ix, v)| (ix as f64, v)),
                    LINE.stroke_width(3),
                ))?;
                // One legend entry per series, not per segment.
                if spec.options.show_legend && i == 0 {
                    line.label(spec.options.series_name.as_str()).legend(|(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], LINE.stroke_width(3))
                    });
                }
                chart.draw_series(
                    seg.iter()
                        .map(|&(ix, v)| Circle::new((ix as f64, v), 5, POINT.filled())),
                )?;
            }
        }
    }

    if spec.options.show_legend {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", 14).into_font().color(&AXIS_TEXT))
            .draw()?;
    }

    Ok(())
}

fn draw_err(e: DrawingAreaErrorKind<io::Error>) -> ChartError {
    ChartError::Draw(e.to_string())
}
