// src/config/consts.rs

// Dataset
pub const DEFAULT_DATASET: &str = "district_data.csv";
pub const DATASET_ENV: &str = "ABSENCE_DATA";
pub const NAME_COLUMN: &str = "clean_name";
pub const NA_TOKEN: &str = "NA";

// Search
pub const MIN_QUERY_CHARS: usize = 2;
pub const MAX_SUGGESTIONS: usize = 10;

// Chart
pub const CHART_TITLE: &str = "Chronic Absenteeism Rate (%)";
pub const Y_AXIS_TITLE: &str = "Percent Absent";
pub const SVG_SIZE: (u32, u32) = (800, 480);

// Logging
pub const LOG_FILE: &str = ".store/debug.log";
pub const LOG_ENV: &str = "ABSENCE_LOG";

// Window
pub const WINDOW_TITLE: &str = "District Absenteeism Search";
pub const WINDOW_W: f32 = 900.0;
pub const WINDOW_H: f32 = 640.0;
