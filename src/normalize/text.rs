// src/normalize/text.rs
use crate::core::sanitize::{normalize_ws, strip_ascii_punct, strip_tag_like, strip_url_like};

/// Normalize review text for comparison and display.
///
/// Absent input gives "". Otherwise: lowercase, tag-like spans out,
/// `http…`/`www…` tokens out, ASCII punctuation out, whitespace collapsed
/// and trimmed.
///
/// URL tokens are stripped a second time after punctuation, since removing
/// punctuation can join `ht.tp` into a new `http` token. The output is a
/// fixed point: `clean_text(clean_text(x)) == clean_text(x)`.
pub fn clean_text<'a>(text: impl Into<Option<&'a str>>) -> String {
    let Some(text) = text.into() else { return s!() };

    let lowered = text.to_lowercase();
    let untagged = strip_tag_like(&lowered);
    let unlinked = strip_url_like(&untagged);
    let unpunct = strip_ascii_punct(&unlinked);
    normalize_ws(&strip_url_like(&unpunct))
}
