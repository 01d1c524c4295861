// src/dataset.rs
//
// District dataset: CSV → ordered, immutable records.
//
// - First row is the header and must contain `clean_name`.
// - Blank lines are skipped; short/long rows are tolerated (missing cells
//   read as absent, surplus cells are dropped).
// - Any I/O, UTF-8 or CSV syntax error fails the whole load. No partial data.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::config::consts::NAME_COLUMN;
use crate::years;

/// One CSV row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistrictRecord {
    name: String,
    year_values: HashMap<String, String>,
}

impl DistrictRecord {
    pub fn new(name: impl Into<String>, year_values: HashMap<String, String>) -> Self {
        Self { name: name.into(), year_values }
    }

    /// Build from `(year_key, cell)` pairs.
    pub fn with_values<I, K, V>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let year_values = values.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self::new(name, year_values)
    }

    /// Empty when the name cell was missing or blank.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }

    /// Raw cell for a column, exactly as read.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.year_values.get(key).map(String::as_str)
    }

    pub fn year_values(&self) -> &HashMap<String, String> {
        &self.year_values
    }
}

#[derive(Clone, Debug, Default)]
pub struct Dataset {
    records: Vec<DistrictRecord>,
    missing_year_keys: Vec<&'static str>,
}

impl Dataset {
    pub fn from_records(records: Vec<DistrictRecord>) -> Self {
        Self { records, missing_year_keys: Vec::new() }
    }

    pub fn records(&self) -> &[DistrictRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&DistrictRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Year-key columns the header did not carry. Their cells render as gaps.
    pub fn missing_year_keys(&self) -> &[&'static str] {
        &self.missing_year_keys
    }

    /// Records with a non-empty name, in dataset order.
    pub fn named(&self) -> impl Iterator<Item = &DistrictRecord> {
        self.records.iter().filter(|r| r.has_name())
    }

    /// First exact name hit; falls back to a case-insensitive match.
    pub fn find_by_name(&self, name: &str) -> Option<&DistrictRecord> {
        let name = name.trim();
        self.named()
            .find(|r| r.name() == name)
            .or_else(|| {
                let lower = name.to_lowercase();
                self.named().find(|r| r.name().to_lowercase() == lower)
            })
    }
}

/* ---------------- Errors ---------------- */

#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: io::Error },
    Csv(csv::Error),
    MissingColumn(&'static str),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => write!(f, "cannot read {}: {}", path.display(), source),
            LoadError::Csv(e) => write!(f, "malformed CSV: {e}"),
            LoadError::MissingColumn(col) => write!(f, "header has no `{col}` column"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Csv(e) => Some(e),
            LoadError::MissingColumn(_) => None,
        }
    }
}

impl From<csv::Error> for LoadError {
    fn from(e: csv::Error) -> Self {
        LoadError::Csv(e)
    }
}

/* ---------------- Loading ---------------- */

pub fn load(path: &Path) -> Result<Dataset, LoadError> {
    logd!("Dataset: Opening {}", path.display());
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let ds = from_reader(file)?;
    logf!("Dataset: Loaded {} (records={})", path.display(), ds.len());
    Ok(ds)
}

pub fn from_reader<R: Read>(reader: R) -> Result<Dataset, LoadError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| if i == 0 { h.trim_start_matches('\u{feff}').to_string() } else { h.to_string() })
        .collect();

    let name_ix = headers
        .iter()
        .position(|h| h == NAME_COLUMN)
        .ok_or(LoadError::MissingColumn(NAME_COLUMN))?;

    let missing_year_keys: Vec<&'static str> = years::keys()
        .filter(|k| !headers.iter().any(|h| h == k))
        .collect();
    for k in &missing_year_keys {
        logd!("Dataset: Header lacks year column {k}");
    }

    let mut records = Vec::new();
    let mut row = StringRecord::new();
    while rdr.read_record(&mut row)? {
        records.push(record_from_row(&headers, name_ix, &row));
    }

    Ok(Dataset { records, missing_year_keys })
}

fn record_from_row(headers: &[String], name_ix: usize, row: &StringRecord) -> DistrictRecord {
    let name = row.get(name_ix).map(str::trim).unwrap_or_default();
    let mut year_values = HashMap::with_capacity(headers.len());
    for (i, (h, cell)) in headers.iter().zip(row.iter()).enumerate() {
        if i == name_ix {
            continue;
        }
        // repeated header: first column wins
        year_values.entry(h.clone()).or_insert_with(|| cell.to_string());
    }
    DistrictRecord::new(name, year_values)
}
