// src/cli.rs
use std::error::Error;

use crate::{
    config::options::{ExtractOptions, NormalizeOptions},
    data::CleanReview,
    normalize::{self, NormalizeError, Normalized},
    pipeline::{self, PipelineError, ProcessRunner, Step},
    progress::Progress,
    scrape::{self, ScrapeSummary},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// No arguments: every step, each in a child process
    Pipeline,
    /// One step, in-process
    Step(Step),
    Help,
}

pub fn parse_args<I>(args: I) -> Result<Command, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let cmd = match args.next() {
        None => Command::Pipeline,
        Some(a) => match a.as_str() {
            "-h" | "--help" => Command::Help,
            other => Step::from_arg(other)
                .map(Command::Step)
                .ok_or_else(|| format!("Unknown arg: {}", other))?,
        },
    };
    if let Some(extra) = args.next() {
        return Err(format!("Unexpected arg: {}", extra).into());
    }
    Ok(cmd)
}

pub fn usage() -> &'static str {
    include_str!("cli_help.txt")
}

/// Extract then normalize, each as a child of the current executable.
pub fn run_pipeline() -> Result<(), PipelineError> {
    println!("Starting pipeline…");
    let mut runner = ProcessRunner::current_exe().map_err(|source| PipelineError::Spawn {
        step: Step::ORDER[0],
        source,
    })?;
    pipeline::run_steps(&Step::ORDER, &mut runner)?;
    println!("Pipeline finished.");
    Ok(())
}

pub fn run_extract() -> Result<ScrapeSummary, Box<dyn Error>> {
    let opts = ExtractOptions::default();
    let mut progress = ConsoleProgress;
    let summary = scrape::run(&opts, Some(&mut progress))?;
    println!(
        "\nDataset saved to {} ({} rows, {} film(s) ok, {} failed)",
        summary.out_path.display(), summary.rows, summary.films_ok, summary.films_failed
    );
    Ok(summary)
}

pub fn run_normalize() -> Result<Normalized, NormalizeError> {
    let opts = NormalizeOptions::default();
    println!("Loading raw file: {}", opts.in_path.display());

    let out = normalize::run(&opts)?;

    println!("Duplicates removed: {}", out.duplicates_removed);
    println!("Clean dataset saved: {} ({} rows)", opts.out_path.display(), out.rows.len());
    for line in preview_lines(&out.rows, opts.preview_rows) {
        println!("{line}");
    }
    Ok(out)
}

/// A few rows as aligned text, for a quick look after normalizing.
pub fn preview_lines(rows: &[CleanReview], n: usize) -> Vec<String> {
    const TEXT_W: usize = 60;

    let mut lines = vec![format!("{:<28} {:>5} {:<8} {}", "film_title", "note", "sentiment", "clean_review")];
    for r in rows.iter().take(n) {
        let note = r.user_note.map(|v| format!("{v:.1}")).unwrap_or_default();
        let mut text: String = r.clean_review.chars().take(TEXT_W).collect();
        if r.clean_review.chars().count() > TEXT_W { text.push('…'); }
        let title: String = r.film_title.chars().take(28).collect();
        lines.push(format!("{:<28} {:>5} {:<8} {}", title, note, r.sentiment.label(), text));
    }
    lines
}

/// Prints one line per film as the scrape goes.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, _url: &str, title: &str, count: usize) {
        println!("[INFO] {count} review(s) collected for {title}");
    }
    fn item_failed(&mut self, url: &str, err: &str) {
        println!("[ERROR] Could not scrape {url}: {err}");
    }
}
