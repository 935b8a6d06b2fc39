// src/data.rs
//
// Row types shared by the three stages.
//
// - RawReview:   one scraped review block (Extractor output).
// - CleanReview: one normalized, deduplicated, labelled review (Normalizer output).
// - Sentiment:   four-valued label derived from the rating alone.
//
// Field order is the column order of the delimited files.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawReview {
    pub film_title: String,
    pub film_url: String,
    pub user_note: Option<f64>,
    pub review: String,
}

impl RawReview {
    pub const HEADERS: [&'static str; 4] = ["film_title", "film_url", "user_note", "review"];
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CleanReview {
    pub film_title: String,
    pub user_note: Option<f64>,
    pub film_url: String,
    pub review: String,
    pub clean_review: String,
    pub sentiment: Sentiment,
}

impl CleanReview {
    pub const HEADERS: [&'static str; 6] = [
        "film_title", "user_note", "film_url", "review", "clean_review", "sentiment",
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    #[serde(rename = "Négatif")]
    Negatif,
    #[serde(rename = "Neutre")]
    Neutre,
    #[serde(rename = "Positif")]
    Positif,
    #[serde(rename = "Inconnu")]
    Inconnu,
}

impl Sentiment {
    pub const ALL: [Sentiment; 4] = [
        Sentiment::Negatif, Sentiment::Neutre, Sentiment::Positif, Sentiment::Inconnu,
    ];

    /// Label as written to the clean dataset.
    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Negatif => "Négatif",
            Sentiment::Neutre => "Neutre",
            Sentiment::Positif => "Positif",
            Sentiment::Inconnu => "Inconnu",
        }
    }

    /// Thresholds: < 3 negative, == 3 neutral, > 3 positive.
    /// Missing and NaN ratings are unknown.
    pub fn from_note(note: Option<f64>) -> Self {
        match note {
            None => Sentiment::Inconnu,
            Some(n) if n.is_nan() => Sentiment::Inconnu,
            Some(n) if n < 3.0 => Sentiment::Negatif,
            Some(n) if n == 3.0 => Sentiment::Neutre,
            Some(_) => Sentiment::Positif,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
