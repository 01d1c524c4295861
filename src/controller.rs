// src/controller.rs
//
// Search + selection state, free of any UI toolkit.
//
// The GUI forwards three events here (text changed, suggestion activated,
// click outside the search box) and reads back what to show. The dataset
// and the live chart handle are owned here, not by widgets.

use crate::chart::{ChartAdapter, ChartSurface};
use crate::config::options::{AppOptions, SearchOptions};
use crate::dataset::{Dataset, DistrictRecord, LoadError};
use crate::search::{self, Suggestions};
use crate::series::ChartSeries;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    TextChanged(String),
    /// Dataset index of the activated suggestion row.
    SuggestionActivated(usize),
    OutsideInteraction,
}

pub struct SearchController<S: ChartSurface> {
    dataset: Dataset,
    load_state: LoadState,
    search: SearchOptions,

    // search box
    input: String,
    suggestions: Suggestions,
    panel_open: bool,

    // results panel
    heading: String,
    results_visible: bool,
    series: Option<ChartSeries>,
    chart: ChartAdapter<S>,
    renders: usize,
    last_error: Option<String>,
}

impl<S: ChartSurface> SearchController<S> {
    pub fn new(surface: S, options: &AppOptions) -> Self {
        Self {
            dataset: Dataset::default(),
            load_state: LoadState::Loading,
            search: options.search.clone(),
            input: s!(),
            suggestions: Suggestions::default(),
            panel_open: false,
            heading: s!(),
            results_visible: false,
            series: None,
            chart: ChartAdapter::new(surface, options.chart.clone()),
            renders: 0,
            last_error: None,
        }
    }

    /// Controller over an already loaded dataset.
    pub fn with_dataset(surface: S, options: &AppOptions, dataset: Dataset) -> Self {
        let mut c = Self::new(surface, options);
        c.on_loaded(Ok(dataset));
        c
    }

    /// Completion of the (one) dataset load. A failure leaves search inert.
    pub fn on_loaded(&mut self, result: Result<Dataset, LoadError>) {
        match result {
            Ok(ds) => {
                logf!("Controller: Dataset ready (records={})", ds.len());
                self.dataset = ds;
                self.load_state = LoadState::Ready;
            }
            Err(e) => {
                loge!("Controller: Dataset load failed: {e}");
                self.dataset = Dataset::default();
                self.load_state = LoadState::Failed(e.to_string());
            }
        }
    }

    pub fn dispatch(&mut self, event: UiEvent) {
        match event {
            UiEvent::TextChanged(text) => self.on_text_changed(text),
            UiEvent::SuggestionActivated(ix) => self.on_suggestion_activated(ix),
            UiEvent::OutsideInteraction => self.on_outside_interaction(),
        }
    }

    fn on_text_changed(&mut self, text: String) {
        self.input = text;
        self.suggestions = search::suggest(&self.dataset, &self.input, &self.search);
        self.panel_open = !self.suggestions.is_empty();
        logd!("Search: {:?} → {} suggestion(s)", self.input, self.suggestions.len());
    }

    fn on_suggestion_activated(&mut self, ix: usize) {
        if !self.panel_open || !self.suggestions.indices().contains(&ix) {
            logw!("Search: Ignoring activation of row {ix} (not a visible suggestion)");
            return;
        }
        let Some(record) = self.dataset.get(ix).cloned() else {
            return;
        };

        self.input = record.name().to_string();
        self.close_panel();
        self.render(&record);
    }

    fn on_outside_interaction(&mut self) {
        if self.panel_open {
            logd!("Search: Outside click, closing suggestions");
        }
        self.close_panel();
    }

    fn close_panel(&mut self) {
        self.panel_open = false;
    }

    /// Show `record` in the results panel and redraw the chart.
    pub fn render(&mut self, record: &DistrictRecord) {
        self.heading = record.name().to_string();
        self.results_visible = true;

        let series = ChartSeries::for_record(record);
        logf!(
            "Render: {:?} ({}/{} years present)",
            self.heading,
            series.present(),
            series.points().len()
        );

        self.last_error = match self.chart.update(&series.labels(), &series.values()) {
            Ok(()) => None,
            Err(e) => Some(e.to_string()),
        };
        self.series = Some(series);
        self.renders += 1;
    }

    /* ---------- read side ---------- */

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Text box binding. Call `dispatch(TextChanged)` after edits.
    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn suggestions(&self) -> &[usize] {
        self.suggestions.indices()
    }

    /// `(dataset index, name)` for each visible suggestion row.
    pub fn suggestion_rows(&self) -> Vec<(usize, &str)> {
        if !self.panel_open {
            return Vec::new();
        }
        self.suggestions
            .indices()
            .iter()
            .filter_map(|&ix| self.dataset.get(ix).map(|r| (ix, r.name())))
            .collect()
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    pub fn series(&self) -> Option<&ChartSeries> {
        self.series.as_ref()
    }

    pub fn chart(&self) -> &ChartAdapter<S> {
        &self.chart
    }

    pub fn chart_mut(&mut self) -> &mut ChartAdapter<S> {
        &mut self.chart
    }

    /// Renders performed so far.
    pub fn render_count(&self) -> usize {
        self.renders
    }

    /// Last chart error, cleared by the next successful render.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
