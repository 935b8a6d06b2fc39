// src/normalize/mod.rs
//
// Raw dataset → clean dataset.
//
// Every raw row gets a cleaned text and a sentiment; rows repeating an earlier
// (film_title, clean_review) pair are dropped, first one wins, order kept.
// The rating plays no part in the duplicate key.

mod text;

pub use text::clean_text;

use std::{collections::HashSet, error::Error, fmt, path::PathBuf};

use crate::{
    config::options::NormalizeOptions,
    data::{CleanReview, RawReview, Sentiment},
    store,
};

pub struct Normalized {
    pub rows: Vec<CleanReview>,
    pub duplicates_removed: usize,
}

/// Pure transform; no I/O.
pub fn normalize(raw: Vec<RawReview>) -> Normalized {
    let mut seen: HashSet<(String, String)> = HashSet::with_capacity(raw.len());
    let mut rows = Vec::with_capacity(raw.len());
    let mut duplicates_removed = 0usize;

    for r in raw {
        let clean_review = clean_text(r.review.as_str());
        if !seen.insert((r.film_title.clone(), clean_review.clone())) {
            duplicates_removed += 1;
            continue;
        }
        rows.push(CleanReview {
            sentiment: Sentiment::from_note(r.user_note),
            film_title: r.film_title,
            user_note: r.user_note,
            film_url: r.film_url,
            review: r.review,
            clean_review,
        });
    }

    Normalized { rows, duplicates_removed }
}

#[derive(Debug)]
pub enum NormalizeError {
    /// Raw dataset absent; nothing was written.
    MissingInput(PathBuf),
    Io(Box<dyn Error>),
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeError::MissingInput(p) => write!(f, "Input file not found: {}", p.display()),
            NormalizeError::Io(e) => write!(f, "{e}"),
        }
    }
}

impl Error for NormalizeError {}

impl From<Box<dyn Error>> for NormalizeError {
    fn from(e: Box<dyn Error>) -> Self { NormalizeError::Io(e) }
}

/// Full normalizer step: read raw file, transform, write clean file.
pub fn run(opts: &NormalizeOptions) -> Result<Normalized, NormalizeError> {
    if !opts.in_path.exists() {
        loge!("Normalize: missing input {}", opts.in_path.display());
        return Err(NormalizeError::MissingInput(opts.in_path.clone()));
    }

    logf!("Normalize: Loading {}", opts.in_path.display());
    let raw = store::load_raw(&opts.in_path)?;
    let before = raw.len();

    let out = normalize(raw);
    logf!(
        "Normalize: {} → {} row(s), {} duplicate(s) removed",
        before, out.rows.len(), out.duplicates_removed
    );

    store::save_clean(&opts.out_path, &out.rows)?;
    logf!("Normalize: Saved → {}", opts.out_path.display());
    Ok(out)
}
