// src/config/options.rs
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    pub urls: Vec<String>,
    pub timeout: Duration,
    pub user_agent: String,
    pub max_blocks: usize,
    pub out_path: PathBuf,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            urls: FILM_URLS.iter().map(|u| s!(*u)).collect(),
            timeout: Duration::from_secs(FETCH_TIMEOUT_SECS),
            user_agent: s!(USER_AGENT),
            max_blocks: MAX_BLOCKS_PER_PAGE,
            out_path: raw_path(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub in_path: PathBuf,
    pub out_path: PathBuf,
    pub preview_rows: usize,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            in_path: raw_path(),
            out_path: clean_path(),
            preview_rows: PREVIEW_ROWS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardOptions {
    pub source: DataSource,
    pub detail_rows: usize,
    pub histogram_bins: usize,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            source: DataSource::Remote(s!(CLEAN_DATASET_URL)),
            detail_rows: DETAIL_ROWS,
            histogram_bins: HISTOGRAM_BINS,
        }
    }
}

impl DashboardOptions {
    /// Defaults, with the data source replaced when `arg` is given.
    pub fn with_source_arg(arg: Option<&str>) -> Self {
        let mut opts = Self::default();
        if let Some(a) = arg.map(str::trim).filter(|a| !a.is_empty()) {
            opts.source = DataSource::parse(a);
        }
        opts
    }
}

/// Where the clean dataset is read from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DataSource {
    Remote(String),
    Local(PathBuf),
}

impl DataSource {
    pub fn parse(s: &str) -> Self {
        let lc = s.to_ascii_lowercase();
        if lc.starts_with("http://") || lc.starts_with("https://") {
            DataSource::Remote(s!(s))
        } else {
            DataSource::Local(PathBuf::from(s))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Remote(url) => write!(f, "{url}"),
            DataSource::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

pub fn raw_path() -> PathBuf {
    PathBuf::from(DATA_DIR).join(RAW_FILE)
}

pub fn clean_path() -> PathBuf {
    PathBuf::from(DATA_DIR).join(CLEAN_FILE)
}
