// src/store.rs
//
// Flat-file persistence for the two datasets.
//
// Files are comma-separated, UTF-8 with a leading BOM, header row always
// present (even with zero rows). Readers accept the BOM or not.

use std::{
    error::Error,
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
    time::Duration,
};

use serde::{de::DeserializeOwned, Serialize};

use crate::config::consts::{FETCH_TIMEOUT_SECS, USER_AGENT};
use crate::config::options::DataSource;
use crate::core::net::{Fetcher, HttpFetcher};
use crate::data::{CleanReview, RawReview};

const BOM: &str = "\u{feff}";

pub fn save_raw(path: &Path, rows: &[RawReview]) -> Result<(), Box<dyn Error>> {
    write_rows(path, &RawReview::HEADERS, rows)
}

pub fn save_clean(path: &Path, rows: &[CleanReview]) -> Result<(), Box<dyn Error>> {
    write_rows(path, &CleanReview::HEADERS, rows)
}

pub fn load_raw(path: &Path) -> Result<Vec<RawReview>, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    parse_rows(&text)
}

/// Read the clean dataset from disk or over HTTP.
pub fn load_clean(source: &DataSource) -> Result<Vec<CleanReview>, Box<dyn Error>> {
    let text = match source {
        DataSource::Local(path) => fs::read_to_string(path)
            .map_err(|e| format!("{}: {}", path.display(), e))?,
        DataSource::Remote(url) => {
            let fetcher = HttpFetcher::new(USER_AGENT, Duration::from_secs(FETCH_TIMEOUT_SECS))?;
            fetcher.get(url)?
        }
    };
    parse_rows(&text)
}

/// Parse a headed table into typed rows, matching columns by header name.
pub fn parse_rows<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, Box<dyn Error>> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for (i, rec) in rdr.deserialize::<T>().enumerate() {
        // +2: header line, 1-based
        rows.push(rec.map_err(|e| format!("row {}: {}", i + 2, e))?);
    }
    Ok(rows)
}

/// Create/truncate `path`, write BOM + header + rows.
fn write_rows<T: Serialize>(path: &Path, headers: &[&str], rows: &[T]) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let mut out = BufWriter::new(File::create(path)?);
    out.write_all(BOM.as_bytes())?;

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);
    wtr.write_record(headers)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
