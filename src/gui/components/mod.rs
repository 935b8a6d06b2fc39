// src/gui/components/mod.rs
pub mod charts;
pub mod filter_bar;
pub mod metrics;
pub mod review_table;
