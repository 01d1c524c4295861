// src/gui/mod.rs
pub mod app;
pub mod chart_view;
pub mod components;

pub use app::run;
