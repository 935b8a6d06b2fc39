// src/cache.rs
//
// Memoized dataset loading for the dashboard.
//
// One entry per source location. The first `get` for a source loads it; later
// calls return the same `Arc` until `invalidate` (or `reload`) drops it.
// Failed loads are not cached.

use std::{collections::HashMap, error::Error, fmt, sync::Arc};

use crate::{config::options::DataSource, data::CleanReview, store};

pub type Dataset = Arc<Vec<CleanReview>>;
type Loader = Box<dyn Fn(&DataSource) -> Result<Vec<CleanReview>, Box<dyn Error>>>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadError {
    pub source: DataSource,
    pub message: String,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Could not load {}: {}", self.source, self.message)
    }
}

impl Error for LoadError {}

pub struct DatasetCache {
    entries: HashMap<DataSource, Dataset>,
    loader: Loader,
}

impl Default for DatasetCache {
    fn default() -> Self {
        Self::with_loader(store::load_clean)
    }
}

impl DatasetCache {
    pub fn with_loader<F>(loader: F) -> Self
    where
        F: Fn(&DataSource) -> Result<Vec<CleanReview>, Box<dyn Error>> + 'static,
    {
        Self { entries: HashMap::new(), loader: Box::new(loader) }
    }

    /// Cached dataset for `source`, loading it on first use.
    pub fn get(&mut self, source: &DataSource) -> Result<Dataset, LoadError> {
        if let Some(ds) = self.entries.get(source) {
            return Ok(Arc::clone(ds));
        }

        logf!("Cache: Loading {}", source);
        let rows = (self.loader)(source).map_err(|e| {
            loge!("Cache: Load failed {}: {}", source, e);
            LoadError { source: source.clone(), message: e.to_string() }
        })?;
        logf!("Cache: Loaded {} row(s) from {}", rows.len(), source);

        let ds = Arc::new(rows);
        self.entries.insert(source.clone(), Arc::clone(&ds));
        Ok(ds)
    }

    /// Forget `source`; the next `get` loads it again.
    pub fn invalidate(&mut self, source: &DataSource) -> bool {
        self.entries.remove(source).is_some()
    }

    pub fn reload(&mut self, source: &DataSource) -> Result<Dataset, LoadError> {
        self.invalidate(source);
        self.get(source)
    }

    pub fn is_cached(&self, source: &DataSource) -> bool {
        self.entries.contains_key(source)
    }
}
