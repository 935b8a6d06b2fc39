// src/selection.rs
//
// Dashboard view layer over the clean dataset.
//
// - Selection:     (film, sentiment filter) picked in the GUI.
// - SelectionView: row indices into the full dataset that match a Selection.
// - Summary, Histogram, sentiment_shares: figures derived from a view.
//
// Nothing here owns or mutates rows; every selection change rebuilds a view
// from the cached full dataset.

use std::collections::BTreeSet;

use crate::data::{CleanReview, Sentiment};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SentimentFilter {
    All,
    Only(Sentiment),
}

impl SentimentFilter {
    pub fn label(&self) -> &'static str {
        match self {
            SentimentFilter::All => "Tous",
            SentimentFilter::Only(s) => s.label(),
        }
    }

    #[inline]
    pub fn matches(&self, s: Sentiment) -> bool {
        match self {
            SentimentFilter::All => true,
            SentimentFilter::Only(want) => *want == s,
        }
    }
}

/// Distinct non-empty film titles, sorted.
pub fn film_titles(rows: &[CleanReview]) -> Vec<String> {
    rows.iter()
        .map(|r| r.film_title.as_str())
        .filter(|t| !t.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}

/// `All`, then each sentiment present in the data.
pub fn sentiment_options(rows: &[CleanReview]) -> Vec<SentimentFilter> {
    let present: BTreeSet<Sentiment> = rows.iter().map(|r| r.sentiment).collect();
    std::iter::once(SentimentFilter::All)
        .chain(present.into_iter().map(SentimentFilter::Only))
        .collect()
}

#[derive(Clone, Copy, Debug)]
pub struct Selection<'a> {
    pub film: &'a str,
    pub sentiment: SentimentFilter,
}

/// Zero-copy filtered view: positions of kept rows in the full dataset.
#[derive(Clone, Debug)]
pub struct SelectionView<'a> {
    pub row_ix: Vec<usize>,
    raw: &'a [CleanReview],
}

impl<'a> SelectionView<'a> {
    pub fn from_rows(raw: &'a [CleanReview], sel: Selection<'_>) -> Self {
        let row_ix = raw
            .iter()
            .enumerate()
            .filter(|(_, r)| r.film_title == sel.film && sel.sentiment.matches(r.sentiment))
            .map(|(i, _)| i)
            .collect();
        Self { row_ix, raw }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Rows in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = &'a CleanReview> + '_ {
        self.row_ix.iter().filter_map(|&ix| self.raw.get(ix))
    }

    /// First `n` rows, dataset order.
    pub fn head(&self, n: usize) -> Vec<&'a CleanReview> {
        self.iter().take(n).collect()
    }

    /// Present, non-NaN ratings.
    pub fn notes(&self) -> impl Iterator<Item = f64> + '_ {
        self.iter().filter_map(|r| r.user_note).filter(|n| !n.is_nan())
    }
}

/// Headline figures for a view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub count: usize,
    /// Mean of present ratings; None when no row has one
    pub average: Option<f64>,
    pub positive: usize,
}

impl Summary {
    pub fn of(view: &SelectionView<'_>) -> Self {
        let (sum, n) = view.notes().fold((0.0f64, 0usize), |(s, n), v| (s + v, n + 1));
        let positive = view.iter().filter(|r| r.sentiment == Sentiment::Positif).count();
        Self {
            count: view.len(),
            average: (n > 0).then(|| sum / n as f64),
            positive,
        }
    }

    /// "3.42"; "0" for an empty view; "n/a" when no row is rated.
    pub fn average_text(&self) -> String {
        if self.count == 0 { return s!("0"); }
        match self.average {
            Some(avg) => format!("{avg:.2}"),
            None => s!("n/a"),
        }
    }

    /// "62.5%"; "0%" for an empty view.
    pub fn positive_text(&self) -> String {
        if self.count == 0 { return s!("0%"); }
        let pct = self.positive as f64 * 100.0 / self.count as f64;
        format!("{pct:.1}%")
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bin {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

/// Equal-width rating histogram over [min, max] of the present ratings.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    pub bins: Vec<Bin>,
}

impl Histogram {
    pub fn of(view: &SelectionView<'_>, nbins: usize) -> Self {
        let values: Vec<f64> = view.notes().collect();
        let nbins = nbins.max(1);
        if values.is_empty() {
            return Self { bins: Vec::new() };
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        // All ratings equal: unit-wide bins starting at that value
        let width = if max > min { (max - min) / nbins as f64 } else { 1.0 };

        let mut bins: Vec<Bin> = (0..nbins)
            .map(|i| Bin {
                lo: min + width * i as f64,
                hi: min + width * (i + 1) as f64,
                count: 0,
            })
            .collect();

        for v in values {
            let ix = (((v - min) / width).floor() as usize).min(nbins - 1);
            bins[ix].count += 1;
        }
        Self { bins }
    }

    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}

/// Share of each sentiment present in the view, in label order.
/// Fractions sum to 1 unless the view is empty (then the list is empty).
pub fn sentiment_shares(view: &SelectionView<'_>) -> Vec<(Sentiment, usize, f64)> {
    let total = view.len();
    if total == 0 { return Vec::new(); }

    Sentiment::ALL
        .iter()
        .map(|&s| (s, view.iter().filter(|r| r.sentiment == s).count()))
        .filter(|(_, n)| *n > 0)
        .map(|(s, n)| (s, n, n as f64 / total as f64))
        .collect()
}
