// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod years;
pub mod dataset;
pub mod search;
pub mod series;
pub mod chart;
pub mod controller;

pub mod cli;
pub mod gui;
