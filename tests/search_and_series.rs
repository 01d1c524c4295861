// tests/search_and_series.rs
//
// Suggestion filtering and series extraction, no UI involved.
//
use absence_search::config::options::SearchOptions;
use absence_search::dataset::{Dataset, DistrictRecord};
use absence_search::search::{normalize_query, suggest, Suggestions};
use absence_search::series::{parse_cell, ChartSeries};
use absence_search::years;

fn named(names: &[&str]) -> Dataset {
    Dataset::from_records(
        names
            .iter()
            .map(|n| DistrictRecord::with_values(*n, Vec::<(String, String)>::new()))
            .collect(),
    )
}

fn names_of(ds: &Dataset, s: &Suggestions) -> Vec<String> {
    s.indices().iter().map(|&i| ds.get(i).unwrap().name().to_string()).collect()
}

#[test]
fn short_queries_never_search() {
    let ds = named(&["A", "Ab", "Abc"]);
    let opts = SearchOptions::default();
    for q in ["", " ", "a", "  a  ", "é"] {
        assert_eq!(suggest(&ds, q, &opts), Suggestions::TooShort, "query {q:?}");
    }
    assert_eq!(normalize_query("  LiN "), "lin");
}

#[test]
fn substring_case_insensitive_dataset_order() {
    let ds = named(&["Berlin Heights", "Lincoln Unified", "", "North Lincoln", "Oakland"]);
    let s = suggest(&ds, "  LIN ", &SearchOptions::default());
    assert_eq!(names_of(&ds, &s), vec!["Berlin Heights", "Lincoln Unified", "North Lincoln"]);
}

#[test]
fn matches_are_capped_at_ten() {
    let names: Vec<String> = (0..25).map(|i| format!("District {i:02}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let ds = named(&refs);
    let s = suggest(&ds, "district", &SearchOptions::default());
    assert_eq!(s.len(), 10);
    assert_eq!(s.indices(), &(0..10).collect::<Vec<_>>()[..]);
}

#[test]
fn duplicates_are_separate_suggestions() {
    let ds = named(&["Lincoln Unified", "Lincoln Unified"]);
    let s = suggest(&ds, "lincoln", &SearchOptions::default());
    assert_eq!(s.indices(), &[0, 1]);
}

#[test]
fn no_match_is_empty_not_too_short() {
    let ds = named(&["Lincoln Unified"]);
    let s = suggest(&ds, "zzz-nonexistent", &SearchOptions::default());
    assert_eq!(s, Suggestions::Matches(vec![]));
    assert!(s.is_empty());
}

#[test]
fn cell_parsing_policy() {
    assert_eq!(parse_cell("12.5"), Some(12.5));
    assert_eq!(parse_cell(" 7 "), Some(7.0));
    assert_eq!(parse_cell("0"), Some(0.0));
    assert_eq!(parse_cell("NA"), None);
    assert_eq!(parse_cell(""), None);
    assert_eq!(parse_cell("n/a"), None);
    assert_eq!(parse_cell("NaN"), None);
    assert_eq!(parse_cell("inf"), None);
}

#[test]
fn cells_read_their_leading_number() {
    assert_eq!(parse_cell("12.5%"), Some(12.5));
    assert_eq!(parse_cell("8 pct"), Some(8.0));
    assert_eq!(parse_cell("-3.25abc"), Some(-3.25));
    assert_eq!(parse_cell(".5"), Some(0.5));
    assert_eq!(parse_cell("4."), Some(4.0));
    assert_eq!(parse_cell("1.5e1x"), Some(15.0));
    assert_eq!(parse_cell("2e"), Some(2.0));
    assert_eq!(parse_cell("abc"), None);
    assert_eq!(parse_cell("."), None);
    assert_eq!(parse_cell("-"), None);
    assert_eq!(parse_cell("Infinity"), None);
    assert_eq!(parse_cell("1e999"), None);
}

#[test]
fn series_is_six_points_oldest_first() {
    let rec = DistrictRecord::with_values(
        "Lincoln Unified",
        [
            ("20242025", "12.5"),
            ("20232024", "NA"),
            ("20222023", "18.2"),
            ("20212022", ""),
            ("20202021", "bogus"),
            // 20192020 missing entirely
        ],
    );
    let series = ChartSeries::for_record(&rec);

    assert_eq!(series.labels(), years::labels());
    assert_eq!(
        series.labels(),
        vec!["2019-20", "2020-21", "2021-22", "2022-23", "2023-24", "2024-25"]
    );
    assert_eq!(series.values(), vec![None, None, None, Some(18.2), None, Some(12.5)]);
    assert_eq!(series.present(), 2);
}
