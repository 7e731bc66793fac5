//! Memoized dataset load.

use super::error::LoadError;
use super::loader::DatasetSource;
use super::model::Datasets;
use log::{debug, info, warn};
use std::sync::Arc;

/// Holds the last successful load, keyed by the identity of its source.
///
/// Failed loads are never stored, so the next render pass retries from scratch.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entry: Option<(String, Arc<Datasets>)>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached datasets for `source`, loading them on first access.
    pub fn get_or_load<S: DatasetSource + ?Sized>(
        &mut self,
        source: &S,
    ) -> Result<Arc<Datasets>, LoadError> {
        let identity = source.identity();
        if let Some((key, datasets)) = &self.entry {
            if *key == identity {
                debug!("Dataset cache hit for {}", identity);
                return Ok(Arc::clone(datasets));
            }
        }

        match source.load() {
            Ok(datasets) => {
                let datasets = Arc::new(datasets);
                self.entry = Some((identity, Arc::clone(&datasets)));
                Ok(datasets)
            }
            Err(e) => {
                warn!("Loading {} failed: {}", identity, e);
                Err(e)
            }
        }
    }

    /// Drops the cached entry so the next access reads the files again.
    pub fn clear(&mut self) {
        if self.entry.take().is_some() {
            info!("Dataset cache cleared");
        }
    }

    pub fn is_populated(&self) -> bool {
        self.entry.is_some()
    }
}
