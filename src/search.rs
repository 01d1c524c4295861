// src/search.rs
//
// Name search over the dataset. No index: every query is a linear scan in
// dataset order, which is fast enough for a few thousand districts.

use crate::config::options::SearchOptions;
use crate::dataset::Dataset;

/// Lowercase + trim.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Result of one query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Suggestions {
    /// Normalized query below the threshold; nothing was scanned.
    #[default]
    TooShort,
    /// Record indices into the dataset, dataset order, capped.
    Matches(Vec<usize>),
}

impl Suggestions {
    pub fn indices(&self) -> &[usize] {
        match self {
            Suggestions::TooShort => &[],
            Suggestions::Matches(ix) => ix,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.indices().is_empty()
    }

    pub fn len(&self) -> usize {
        self.indices().len()
    }
}

/// Case-insensitive substring match on district name.
/// Records with an empty name never match.
pub fn suggest(ds: &Dataset, raw_query: &str, opts: &SearchOptions) -> Suggestions {
    let query = normalize_query(raw_query);
    if query.chars().count() < opts.min_query_chars {
        return Suggestions::TooShort;
    }

    let matches = ds
        .records()
        .iter()
        .enumerate()
        .filter(|(_, r)| r.has_name() && r.name().to_lowercase().contains(&query))
        .map(|(ix, _)| ix)
        .take(opts.max_suggestions)
        .collect();

    Suggestions::Matches(matches)
}
