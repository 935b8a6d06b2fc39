// src/specs/mod.rs
//! # Scraping "specs"
//!
//! Page-specific extraction for Allociné. Each spec knows *where the data lives
//! in the HTML* of one kind of page and how to pull it out tolerantly.
//!
//! ## What lives here
//! - **Pure HTML parsing** of a film home page (`film_page`) and of a
//!   spectator-review listing (`reviews`).
//! - **Selector choice & precedence**: semantic review cards first, generic
//!   `content-txt` paragraphs second, both in document order.
//! - **Rating resolution** (`rating`): the sibling-scanning heuristic that pairs a
//!   review block with a nearby score, behind the `RatingResolver` trait so other
//!   heuristics can be dropped in without touching block extraction.
//!
//! ## What does **not** live here
//! - Looping over films, error isolation, progress, persistence: `scrape`.
//! - Text cleaning, dedup and sentiment: `normalize`.
//!
//! ## Typical call chain
//! ```text
//! cli → scrape::run → scrape::collect_reviews → specs::film_page::fetch_and_extract
//!                                               ↘ specs::reviews::extract_reviews
//!                                                   ↘ RatingResolver::resolve_rating
//! ```
//!
//! ## Conventions
//! - Nothing in here panics on odd markup; missing pieces become placeholders
//!   (`Titre inconnu`) or `None` ratings.
//! - Specs are testable offline against inline HTML fixtures.
pub mod film_page;
pub mod rating;
pub mod reviews;
