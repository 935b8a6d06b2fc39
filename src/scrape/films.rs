// src/scrape/films.rs
use std::{error::Error, path::PathBuf};

use crate::{
    config::options::ExtractOptions,
    core::net::{Fetcher, HttpFetcher},
    data::RawReview,
    progress::Progress,
    specs::{film_page, rating::RatingResolver, rating::SiblingNoteResolver},
    store,
};

/// What one extractor run produced.
pub struct ScrapeSummary {
    pub rows: usize,
    pub films_ok: usize,
    pub films_failed: usize,
    pub out_path: PathBuf,
}

/// Visit every film URL in order and collect their reviews.
///
/// A film that cannot be fetched is logged and contributes nothing; this
/// function itself never fails.
pub fn collect_reviews(
    urls: &[String],
    fetcher: &dyn Fetcher,
    resolver: &dyn RatingResolver,
    max_blocks: usize,
    mut progress: Option<&mut dyn Progress>,
) -> Vec<RawReview> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(urls.len());
    }

    let mut rows: Vec<RawReview> = Vec::new();

    for url in urls {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Scraping {url}"));
        }
        match film_page::fetch_and_extract(url, fetcher, resolver, max_blocks) {
            Ok(bundle) => {
                let count = bundle.reviews.len();
                logf!("Scrape: {} review(s) for {} ({})", count, bundle.title, bundle.listing_url);

                rows.extend(bundle.reviews.into_iter().map(|r| RawReview {
                    film_title: bundle.title.clone(),
                    film_url: url.clone(),
                    user_note: r.user_note,
                    review: r.review,
                }));

                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(url, &bundle.title, count);
                }
            }
            Err(e) => {
                loge!("Scrape: {url}: {e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(url, &e.to_string());
                }
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    rows
}

/// Full extractor step: fetch over HTTP, collect, write the raw dataset.
pub fn run(
    opts: &ExtractOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<ScrapeSummary, Box<dyn Error>> {
    let fetcher = HttpFetcher::new(&opts.user_agent, opts.timeout)?;
    run_with(opts, &fetcher, &SiblingNoteResolver, progress)
}

/// Same as `run`, with the fetcher and resolver supplied by the caller.
pub fn run_with(
    opts: &ExtractOptions,
    fetcher: &dyn Fetcher,
    resolver: &dyn RatingResolver,
    progress: Option<&mut dyn Progress>,
) -> Result<ScrapeSummary, Box<dyn Error>> {
    logf!("Scrape: Begin {} film(s)", opts.urls.len());

    let mut counter = Counter { ok: 0, failed: 0, inner: progress };
    let rows = collect_reviews(&opts.urls, fetcher, resolver, opts.max_blocks, Some(&mut counter));

    store::save_raw(&opts.out_path, &rows)?;
    logf!("Scrape: Saved {} row(s) → {}", rows.len(), opts.out_path.display());

    Ok(ScrapeSummary {
        rows: rows.len(),
        films_ok: counter.ok,
        films_failed: counter.failed,
        out_path: opts.out_path.clone(),
    })
}

/// Counts outcomes while forwarding to the caller's sink.
struct Counter<'a> {
    ok: usize,
    failed: usize,
    inner: Option<&'a mut dyn Progress>,
}

impl Progress for Counter<'_> {
    fn begin(&mut self, total: usize) {
        if let Some(p) = self.inner.as_deref_mut() { p.begin(total); }
    }
    fn log(&mut self, msg: &str) {
        if let Some(p) = self.inner.as_deref_mut() { p.log(msg); }
    }
    fn item_done(&mut self, url: &str, title: &str, count: usize) {
        self.ok += 1;
        if let Some(p) = self.inner.as_deref_mut() { p.item_done(url, title, count); }
    }
    fn item_failed(&mut self, url: &str, err: &str) {
        self.failed += 1;
        if let Some(p) = self.inner.as_deref_mut() { p.item_failed(url, err); }
    }
    fn finish(&mut self) {
        if let Some(p) = self.inner.as_deref_mut() { p.finish(); }
    }
}
