// src/chart/mod.rs
//! Chart adapter.
//!
//! The rest of the crate only hands `(labels, values)` to a [`ChartAdapter`].
//! What actually draws is a [`ChartSurface`]: the egui plot in the GUI, or an
//! SVG file in the CLI. The adapter owns the one live chart handle and always
//! destroys it before creating the next.

use std::error::Error;
use std::fmt;
use std::io;

use crate::config::options::ChartOptions;

pub mod svg;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Line,
}

/// Everything a surface needs to draw one chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub values: Vec<Option<f64>>,
    pub options: ChartOptions,
}

impl ChartSpec {
    pub fn line<L: AsRef<str>>(labels: &[L], values: &[Option<f64>], options: ChartOptions) -> Self {
        Self {
            kind: ChartKind::Line,
            labels: labels.iter().map(|l| l.as_ref().to_string()).collect(),
            values: values.to_vec(),
            options,
        }
    }

    /// Runs of consecutive present values as `(x index, y)`.
    /// Absent values split the line instead of dropping to zero.
    pub fn segments(&self) -> Vec<Vec<(usize, f64)>> {
        let mut out = Vec::new();
        let mut cur = Vec::new();
        for (ix, v) in self.values.iter().enumerate() {
            match v {
                Some(y) => cur.push((ix, *y)),
                None if !cur.is_empty() => out.push(std::mem::take(&mut cur)),
                None => {}
            }
        }
        if !cur.is_empty() {
            out.push(cur);
        }
        out
    }

    /// Y bounds covering every present value, padded 10% at the top.
    pub fn y_range(&self) -> (f64, f64) {
        let present = self.values.iter().flatten().copied();
        let (lo, hi) = present.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        if !lo.is_finite() {
            return (0.0, 1.0);
        }
        let lo = if self.options.begin_at_zero { lo.min(0.0) } else { lo };
        let span = (hi - lo).max(1.0);
        (lo, hi + span * 0.1)
    }

    pub fn label_at(&self, x: f64) -> Option<&str> {
        let ix = x.round();
        if (x - ix).abs() > 1e-6 || ix < 0.0 {
            return None;
        }
        self.labels.get(ix as usize).map(String::as_str)
    }

    /// Tooltip for the point at `ix`; `None` over a gap.
    pub fn tooltip_at(&self, ix: usize) -> Option<String> {
        let value = self.values.get(ix).copied().flatten()?;
        let label = self.labels.get(ix)?;
        Some(format!("{label}\n{}", self.options.tooltip(value)))
    }

    /// Tooltip for a cursor at plot coordinates `(x, y)`, only when it sits
    /// on a present point: within 0.3 of its column and 5% of the y span.
    pub fn tooltip_near(&self, x: f64, y: f64) -> Option<String> {
        let ix = x.round();
        if ix < 0.0 || (x - ix).abs() > 0.3 {
            return None;
        }
        let value = self.values.get(ix as usize).copied().flatten()?;
        let (lo, hi) = self.y_range();
        if (y - value).abs() > (hi - lo) * 0.05 {
            return None;
        }
        self.tooltip_at(ix as usize)
    }
}

/* ---------------- Errors ---------------- */

#[derive(Debug)]
pub enum ChartError {
    ShapeMismatch { labels: usize, values: usize },
    Draw(String),
    Io(io::Error),
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::ShapeMismatch { labels, values } => {
                write!(f, "chart needs one value per label (labels={labels}, values={values})")
            }
            ChartError::Draw(msg) => write!(f, "chart drawing failed: {msg}"),
            ChartError::Io(e) => write!(f, "chart output failed: {e}"),
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ChartError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ChartError {
    fn from(e: io::Error) -> Self {
        ChartError::Io(e)
    }
}

/* ---------------- Surface + adapter ---------------- */

/// A drawing target that can hold chart instances.
pub trait ChartSurface {
    type Handle;

    fn create(&mut self, spec: &ChartSpec) -> Result<Self::Handle, ChartError>;

    /// Release everything `create` acquired for this handle.
    fn destroy(&mut self, handle: Self::Handle);
}

pub struct ChartAdapter<S: ChartSurface> {
    surface: S,
    active: Option<S::Handle>,
    options: ChartOptions,
}

impl<S: ChartSurface> ChartAdapter<S> {
    pub fn new(surface: S, options: ChartOptions) -> Self {
        Self { surface, active: None, options }
    }

    /// Replace the live chart with one for `(labels, values)`.
    pub fn update<L: AsRef<str>>(&mut self, labels: &[L], values: &[Option<f64>]) -> Result<(), ChartError> {
        self.clear();

        if labels.len() != values.len() {
            return Err(ChartError::ShapeMismatch { labels: labels.len(), values: values.len() });
        }

        let spec = ChartSpec::line(labels, values, self.options.clone());
        match self.surface.create(&spec) {
            Ok(handle) => {
                self.active = Some(handle);
                Ok(())
            }
            Err(e) => {
                loge!("Chart: create failed: {e}");
                Err(e)
            }
        }
    }

    /// Destroy the live chart, if any.
    pub fn clear(&mut self) {
        if let Some(handle) = self.active.take() {
            self.surface.destroy(handle);
        }
    }

    pub fn live_instances(&self) -> usize {
        usize::from(self.active.is_some())
    }

    pub fn active(&self) -> Option<&S::Handle> {
        self.active.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }
}

impl<S: ChartSurface> Drop for ChartAdapter<S> {
    fn drop(&mut self) {
        self.clear();
    }
}
