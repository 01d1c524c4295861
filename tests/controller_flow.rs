// tests/controller_flow.rs
//
// Event-level behaviour of the search controller with a counting chart
// surface standing in for the plot widget.
//
use std::path::Path;

use absence_search::chart::{ChartError, ChartSpec, ChartSurface};
use absence_search::config::options::AppOptions;
use absence_search::controller::{LoadState, SearchController, UiEvent};
use absence_search::dataset::{self, Dataset, DistrictRecord, LoadError};

#[derive(Default)]
struct CountingSurface {
    live: usize,
    max_live: usize,
    created: usize,
    destroyed: usize,
    last: Option<ChartSpec>,
}

impl ChartSurface for CountingSurface {
    type Handle = usize;

    fn create(&mut self, spec: &ChartSpec) -> Result<usize, ChartError> {
        self.live += 1;
        self.max_live = self.max_live.max(self.live);
        self.created += 1;
        self.last = Some(spec.clone());
        Ok(self.created)
    }

    fn destroy(&mut self, _handle: usize) {
        self.live -= 1;
        self.destroyed += 1;
    }
}

fn lincoln_dataset() -> Dataset {
    Dataset::from_records(vec![
        DistrictRecord::with_values(
            "Lincoln Unified",
            [
                ("20242025", "12.5"),
                ("20232024", "NA"),
                ("20222023", "18.2"),
                ("20212022", "21.4"),
                ("20202021", "9.7"),
                ("20192020", "11.0"),
            ],
        ),
        DistrictRecord::with_values("Oakland Unified", [("20242025", "33.5")]),
        DistrictRecord::with_values("", [("20242025", "1.0")]),
    ])
}

fn controller() -> SearchController<CountingSurface> {
    SearchController::with_dataset(CountingSurface::default(), &AppOptions::default(), lincoln_dataset())
}

fn type_text(c: &mut SearchController<CountingSurface>, text: &str) {
    c.dispatch(UiEvent::TextChanged(text.to_string()));
}

#[test]
fn lincoln_scenario_end_to_end() {
    let mut c = controller();

    type_text(&mut c, "lin");
    assert!(c.panel_open());
    let rows = c.suggestion_rows();
    assert_eq!(rows, vec![(0, "Lincoln Unified")]);

    c.dispatch(UiEvent::SuggestionActivated(0));
    assert_eq!(c.input(), "Lincoln Unified");
    assert!(!c.panel_open());
    assert!(c.results_visible());
    assert_eq!(c.heading(), "Lincoln Unified");
    assert_eq!(c.render_count(), 1);

    let spec = c.chart().surface().last.clone().unwrap();
    assert_eq!(
        spec.labels,
        vec!["2019-20", "2020-21", "2021-22", "2022-23", "2023-24", "2024-25"]
    );
    assert_eq!(spec.values[4], None);
    assert_eq!(spec.values[5], Some(12.5));
    assert_eq!(spec.values[0], Some(11.0));
    assert!(spec.options.begin_at_zero);
    assert!(!spec.options.show_legend);
}

#[test]
fn one_character_query_hides_panel() {
    let mut c = controller();
    type_text(&mut c, "unified");
    assert!(c.panel_open());

    type_text(&mut c, "u");
    assert!(!c.panel_open());
    assert!(c.suggestions().is_empty());
    assert!(c.suggestion_rows().is_empty());
}

#[test]
fn no_match_keeps_previous_results() {
    let mut c = controller();
    type_text(&mut c, "oak");
    c.dispatch(UiEvent::SuggestionActivated(1));
    assert_eq!(c.heading(), "Oakland Unified");

    type_text(&mut c, "zzz-nonexistent");
    assert!(!c.panel_open());
    assert_eq!(c.render_count(), 1);
    assert!(c.results_visible());
    assert_eq!(c.heading(), "Oakland Unified");
    assert_eq!(c.chart().live_instances(), 1);
}

#[test]
fn outside_click_closes_without_selecting() {
    let mut c = controller();
    type_text(&mut c, "unified");
    assert!(c.panel_open());

    c.dispatch(UiEvent::OutsideInteraction);
    assert!(!c.panel_open());
    assert_eq!(c.render_count(), 0);
    assert!(!c.results_visible());
    assert_eq!(c.input(), "unified");

    // a stale row can't be activated once the panel is closed
    c.dispatch(UiEvent::SuggestionActivated(0));
    assert_eq!(c.render_count(), 0);
}

#[test]
fn nameless_rows_are_never_suggested() {
    let mut c = controller();
    type_text(&mut c, "  ");
    assert!(!c.panel_open());
    type_text(&mut c, "ni");
    assert_eq!(c.suggestions(), &[0, 1]);
}

#[test]
fn only_one_chart_alive_after_many_selections() {
    let mut c = controller();
    for i in 0..7 {
        let (q, ix) = if i % 2 == 0 { ("lincoln", 0) } else { ("oakland", 1) };
        type_text(&mut c, q);
        c.dispatch(UiEvent::SuggestionActivated(ix));
    }
    let s = c.chart().surface();
    assert_eq!(s.created, 7);
    assert_eq!(s.destroyed, 6);
    assert_eq!(s.live, 1);
    assert_eq!(s.max_live, 1);
    assert_eq!(c.chart().live_instances(), 1);
    assert_eq!(c.render_count(), 7);
}

#[test]
fn activation_outside_current_suggestions_is_ignored() {
    let mut c = controller();
    type_text(&mut c, "lincoln");
    c.dispatch(UiEvent::SuggestionActivated(1));
    assert_eq!(c.render_count(), 0);
    assert!(c.panel_open());
}

#[test]
fn search_is_inert_before_and_after_failed_load() {
    let mut c = SearchController::new(CountingSurface::default(), &AppOptions::default());
    assert_eq!(c.load_state(), &LoadState::Loading);
    type_text(&mut c, "lincoln");
    assert!(!c.panel_open());

    let err = dataset::load(Path::new("no/such/district_data.csv")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    c.on_loaded(Err(err));
    assert!(matches!(c.load_state(), LoadState::Failed(msg) if msg.contains("district_data.csv")));

    type_text(&mut c, "lincoln");
    assert!(!c.panel_open());
    assert_eq!(c.render_count(), 0);
}
