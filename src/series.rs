// src/series.rs
use crate::config::consts::NA_TOKEN;
use crate::dataset::DistrictRecord;
use crate::years::YEARS;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesPoint {
    pub label: &'static str,
    /// `None` is a gap in the chart, never zero.
    pub value: Option<f64>,
}

/// Six points, oldest → newest.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    points: Vec<SeriesPoint>,
}

/// Reads the leading decimal number of a cell, ignoring any trailing text
/// (`"12.5%"` → 12.5). `NA`, empty, non-numeric and non-finite cells all
/// read as absent.
pub fn parse_cell(raw: &str) -> Option<f64> {
    let cell = raw.trim();
    if cell.is_empty() || cell == NA_TOKEN {
        return None;
    }
    let end = numeric_prefix_len(cell);
    if end == 0 {
        return None;
    }
    cell[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Byte length of the longest `[+-]digits[.digits][e[+-]digits]` prefix,
/// or 0 when it holds no digit.
fn numeric_prefix_len(s: &str) -> usize {
    let b = s.as_bytes();
    let digits = |mut i: usize| {
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = 0;
    if matches!(b.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_end = digits(i);
    let mut end = int_end;
    let mut any = int_end > i;

    if b.get(end) == Some(&b'.') {
        let frac_end = digits(end + 1);
        if frac_end > end + 1 || any {
            any |= frac_end > end + 1;
            end = frac_end;
        }
    }
    if !any {
        return 0;
    }

    if matches!(b.get(end), Some(b'e' | b'E')) {
        let mut j = end + 1;
        if matches!(b.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_end = digits(j);
        if exp_end > j {
            end = exp_end;
        }
    }
    end
}

impl ChartSeries {
    pub fn for_record(record: &DistrictRecord) -> Self {
        let mut unreadable = Vec::new();
        let points = YEARS
            .iter()
            .map(|y| {
                let raw = record.value(y.key).unwrap_or_default();
                let value = parse_cell(raw);
                if value.is_none() && !is_blank_or_na(raw) {
                    unreadable.push(y.key);
                }
                SeriesPoint { label: y.label, value }
            })
            .collect();

        if !unreadable.is_empty() {
            logd!("Series: {:?} has unreadable cells {:?}; shown as gaps", record.name(), unreadable);
        }
        Self { points }
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.points.iter().map(|p| p.label).collect()
    }

    pub fn values(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn present(&self) -> usize {
        self.points.iter().filter(|p| p.value.is_some()).count()
    }
}

fn is_blank_or_na(raw: &str) -> bool {
    let cell = raw.trim();
    cell.is_empty() || cell == NA_TOKEN
}
