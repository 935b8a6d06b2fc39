// src/core/html.rs
// DOM helpers on top of `scraper`. Case-insensitive matching is ASCII-only
// on tag/attribute names; text matching lowercases fully.

use reqwest::Url;
use scraper::{ElementRef, Selector};

/// Visible text of an element: every text node trimmed, empties dropped,
/// joined with `sep`.
pub fn visible_text(el: ElementRef<'_>, sep: &str) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

/// The closest preceding sibling that is an element (text and comments skipped).
pub fn prev_element_sibling<'a>(el: ElementRef<'a>) -> Option<ElementRef<'a>> {
    el.prev_siblings().find_map(ElementRef::wrap)
}

/// First descendant (not `el` itself) matching `sel` whose trimmed text is non-empty.
pub fn first_with_text<'a>(el: ElementRef<'a>, sel: &Selector) -> Option<(ElementRef<'a>, String)> {
    let found = el.select(sel).next()?;
    let text = visible_text(found, "");
    (!text.is_empty()).then_some((found, text))
}

/// Resolve `href` against `base`. Absolute hrefs pass through.
pub fn absolute_url(base: &str, href: &str) -> Option<String> {
    let base = Url::parse(base).ok()?;
    base.join(href.trim()).ok().map(String::from)
}

/// Case-insensitive substring test.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
