// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct AppOptions {
    pub dataset: DatasetOptions,
    pub search: SearchOptions,
    pub chart: ChartOptions,
}

impl AppOptions {
    /// Defaults, with the dataset path taken from `ABSENCE_DATA` when set.
    pub fn from_env() -> Self {
        let mut opts = Self::default();
        if let Some(p) = std::env::var_os(DATASET_ENV).filter(|v| !v.is_empty()) {
            opts.dataset.set_path(PathBuf::from(p));
        }
        opts
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetOptions {
    path: PathBuf,
}

impl Default for DatasetOptions {
    fn default() -> Self {
        Self { path: PathBuf::from(DEFAULT_DATASET) }
    }
}

impl DatasetOptions {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = path.into();
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    /// Queries shorter than this (in chars, after trimming) never search.
    pub min_query_chars: usize,
    pub max_suggestions: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            min_query_chars: MIN_QUERY_CHARS,
            max_suggestions: MAX_SUGGESTIONS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    pub begin_at_zero: bool,
    pub show_legend: bool,
    pub series_name: String,
    pub y_axis_title: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            begin_at_zero: true,
            show_legend: false,
            series_name: s!(CHART_TITLE),
            y_axis_title: s!(Y_AXIS_TITLE),
        }
    }
}

impl ChartOptions {
    /// Tooltip body for one hovered point.
    pub fn tooltip(&self, value: f64) -> String {
        format!("Rate: {value}%")
    }
}
