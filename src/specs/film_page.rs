// src/specs/film_page.rs
//! Film home page: title, and the way to its spectator reviews.
//!
//! - Title: first `h1`, placeholder when missing. Never an error.
//! - Reviews link: first `a[href]` whose text or href mentions "spectateur"
//!   (case-insensitive), made absolute against the home URL. Without one, the
//!   home page is treated as the listing itself.

use std::error::Error;
use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::config::consts::{SPECTATOR_MARKER, UNKNOWN_TITLE};
use crate::core::html::{absolute_url, contains_ci, visible_text};
use crate::core::net::Fetcher;
use super::rating::RatingResolver;
use super::reviews::{extract_reviews, ReviewBlock};

static ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("static selector"));
static H1: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1").expect("static selector"));

pub struct FilmBundle {
    pub title: String,
    /// Listing page actually read (home URL when no link was found)
    pub listing_url: String,
    pub reviews: Vec<ReviewBlock>,
}

pub fn fetch_and_extract(
    url: &str,
    fetcher: &dyn Fetcher,
    resolver: &dyn RatingResolver,
    max_blocks: usize,
) -> Result<FilmBundle, Box<dyn Error>> {
    let home_body = fetcher.get(url)?;

    let home = Html::parse_document(&home_body);
    let title = extract_title(&home);

    let (listing_url, reviews) = match find_spectator_link(&home, url) {
        Some(link) => {
            logd!("Film: {} → reviews at {}", url, link);
            let body = fetcher.get(&link)?;
            let doc = Html::parse_document(&body);
            let reviews = extract_reviews(&doc, resolver, max_blocks);
            (link, reviews)
        }
        None => {
            logd!("Film: {} has no spectator link, reading home page", url);
            (s!(url), extract_reviews(&home, resolver, max_blocks))
        }
    };

    Ok(FilmBundle { title, listing_url, reviews })
}

/// Text of the first `h1`, or `Titre inconnu`.
pub fn extract_title(home: &Html) -> String {
    home.select(&H1)
        .next()
        .map(|h1| visible_text(h1, ""))
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| s!(UNKNOWN_TITLE))
}

/// Absolute URL of the spectator-review listing, if the page links to it.
pub fn find_spectator_link(home: &Html, base_url: &str) -> Option<String> {
    home.select(&ANCHOR)
        .filter_map(|a| {
            let href = a.value().attr("href")?;
            let text = visible_text(a, " ");
            (contains_ci(&text, SPECTATOR_MARKER) || contains_ci(href, SPECTATOR_MARKER))
                .then_some(href)
        })
        .find_map(|href| absolute_url(base_url, href))
}
