// src/gui/app.rs
use std::{
    error::Error,
    path::PathBuf,
    sync::mpsc::{self, Receiver, TryRecvError},
    thread,
};

use eframe::egui;

use crate::{
    config::{consts::WINDOW_TITLE, state::AppState},
    controller::SearchController,
    dataset::{self, Dataset, LoadError},
};

use super::chart_view::PlotSurface;

type LoadResult = Result<Dataset, LoadError>;

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(App::new(&cc.egui_ctx, state)))),
    )?;
    Ok(())
}

pub struct App {
    // options + GUI toggles (UI thread only)
    pub state: AppState,

    // search/selection state and the live chart
    pub controller: SearchController<PlotSurface>,

    pub dataset_path: PathBuf,

    // pending background load; None once delivered
    loading: Option<Receiver<LoadResult>>,
}

impl App {
    pub fn new(ctx: &egui::Context, state: AppState) -> Self {
        let controller = SearchController::new(PlotSurface::new(), &state.options);
        let dataset_path = state.options.dataset.path().to_path_buf();
        let loading = Some(spawn_load(ctx.clone(), dataset_path.clone()));

        logf!("Init: dataset={}", dataset_path.display());

        Self { state, controller, dataset_path, loading }
    }

    /// Hand over the load result once the worker has finished.
    fn poll_load(&mut self) {
        let Some(rx) = &self.loading else { return };
        match rx.try_recv() {
            Ok(result) => {
                self.controller.on_loaded(result);
                self.loading = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                loge!("Load: Worker exited without a result");
                self.controller.on_loaded(Err(LoadError::Io {
                    path: self.dataset_path.clone(),
                    source: std::io::Error::other("loader thread exited"),
                }));
                self.loading = None;
            }
        }
    }
}

fn spawn_load(ctx: egui::Context, path: PathBuf) -> Receiver<LoadResult> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let result = dataset::load(&path);
        if tx.send(result).is_err() {
            logd!("Load: UI gone before dataset arrived");
        }
        ctx.request_repaint();
    });
    rx
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            crate::gui::components::status_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Chronic Absenteeism by District");
            ui.add_space(4.0);

            crate::gui::components::search_box::draw(ui, self);

            ui.separator();

            crate::gui::components::results_panel::draw(ui, self);
        });
    }
}
