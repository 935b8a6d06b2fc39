// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod data;
pub mod specs;

pub mod cache;
pub mod cli;
pub mod gui;
pub mod normalize;
pub mod pipeline;
pub mod progress;
pub mod scrape;
pub mod selection;
pub mod store;
