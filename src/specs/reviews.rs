// src/specs/reviews.rs
//! Review blocks on a spectator-review listing.
//!
//! Blocks are `div.review-card-content` (current card layout) or
//! `p.content-txt` (older paragraph layout), in document order, capped per page.
//! A block whose visible text is empty is skipped; every other block yields
//! exactly one review, with the rating taken from its preceding sibling element.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::core::html::{prev_element_sibling, visible_text};
use super::rating::RatingResolver;

static REVIEW_BLOCK: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.review-card-content, p.content-txt").expect("static selector")
});

#[derive(Clone, Debug, PartialEq)]
pub struct ReviewBlock {
    pub review: String,
    pub user_note: Option<f64>,
}

pub fn extract_reviews(
    doc: &Html,
    resolver: &dyn RatingResolver,
    max_blocks: usize,
) -> Vec<ReviewBlock> {
    let mut out = Vec::new();

    for block in doc.select(&REVIEW_BLOCK).take(max_blocks) {
        let review = visible_text(block, " ");
        if review.is_empty() { continue; }

        let user_note = prev_element_sibling(block)
            .and_then(|sib| resolver.resolve_rating(sib));

        out.push(ReviewBlock { review, user_note });
    }

    logd!("Reviews: {} block(s) kept", out.len());
    out
}
