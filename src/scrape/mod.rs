// src/scrape/mod.rs
mod films;

pub use films::{collect_reviews, run, run_with, ScrapeSummary};
