// src/specs/rating.rs
//! Rating resolution for a review block.
//!
//! The listing page does not tie a score to its review in any stable way; the
//! score usually sits in the element right before the review body, either as
//! visible text ("4,5") or in a `data-*` attribute. A resolver gets that
//! candidate element and returns a number if it can find one.

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use crate::core::html::first_with_text;
use crate::core::sanitize::numeric_chars;

pub trait RatingResolver {
    fn resolve_rating(&self, candidate: ElementRef<'_>) -> Option<f64>;
}

static NOTE_SPAN: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("span.stareval-note, span[class*='note'], span[class*='rating']")
        .expect("static selector")
});

const NOTE_ATTRS: [&str; 3] = ["data-note", "data-rating", "data-score"];

/// Default heuristic: a nested note/rating span, then `data-note`,
/// `data-rating`, `data-score` on the candidate itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct SiblingNoteResolver;

impl RatingResolver for SiblingNoteResolver {
    fn resolve_rating(&self, candidate: ElementRef<'_>) -> Option<f64> {
        if let Some((_, text)) = first_with_text(candidate, &NOTE_SPAN) {
            if let Some(n) = parse_note(&text) {
                return Some(n);
            }
        }
        NOTE_ATTRS
            .iter()
            .filter_map(|attr| candidate.value().attr(attr))
            .find_map(parse_note)
    }
}

/// Attribute-only variant, for pages that carry the score in markup only.
#[derive(Clone, Copy, Debug, Default)]
pub struct AttributeResolver;

impl RatingResolver for AttributeResolver {
    fn resolve_rating(&self, candidate: ElementRef<'_>) -> Option<f64> {
        NOTE_ATTRS
            .iter()
            .filter_map(|attr| candidate.value().attr(attr))
            .find_map(parse_note)
    }
}

/// "4,5 étoiles" → 4.5. Everything but digits, ',' and '.' is dropped, then
/// ',' becomes '.'. Anything that still isn't a decimal is None.
pub fn parse_note(text: &str) -> Option<f64> {
    let digits = numeric_chars(text).replace(',', ".");
    digits.parse::<f64>().ok().filter(|n| n.is_finite())
}
