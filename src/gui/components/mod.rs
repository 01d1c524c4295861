// src/gui/components/mod.rs
pub mod results_panel;
pub mod search_box;
pub mod status_bar;
