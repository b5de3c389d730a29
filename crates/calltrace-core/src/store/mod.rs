//! Store module: Published indexes keyed by repository root
//!
//! A rescan builds the new [`ScanOutcome`] without holding the lock and then
//! replaces the previous entry in one step. Readers keep whatever `Arc` they
//! already hold, so they never see a half-built index.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use crate::index::{canonical_root, IndexError, Indexer, ScanOutcome};

/// In-memory registry of the latest index per root
#[derive(Debug, Default)]
pub struct IndexStore {
    indexer: Indexer,
    indexes: RwLock<HashMap<PathBuf, Arc<ScanOutcome>>>,
}

impl IndexStore {
    #[must_use]
    pub fn new(indexer: Indexer) -> Self {
        Self {
            indexer,
            indexes: RwLock::new(HashMap::new()),
        }
    }

    /// Make `outcome` the current index for its manifest root, returning the
    /// shared handle
    pub fn publish(&self, outcome: ScanOutcome) -> Arc<ScanOutcome> {
        let root = outcome.manifest.root.clone();
        let outcome = Arc::new(outcome);
        let previous = self
            .indexes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(root.clone(), Arc::clone(&outcome));
        info!(
            "Published index for {} ({} symbols{})",
            root.display(),
            outcome.table.len(),
            if previous.is_some() { ", replaced" } else { "" }
        );
        outcome
    }

    /// Scan `root` and publish the result
    ///
    /// # Errors
    /// Returns an error if `root` does not exist or is not a directory; the
    /// previously published index, if any, stays current.
    pub fn rescan(&self, root: impl AsRef<Path>) -> Result<Arc<ScanOutcome>, IndexError> {
        let outcome = self.indexer.scan(root)?;
        Ok(self.publish(outcome))
    }

    /// Current index for `root`, if one was published
    #[must_use]
    pub fn get(&self, root: impl AsRef<Path>) -> Option<Arc<ScanOutcome>> {
        let key = store_key(root.as_ref());
        self.indexes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
    }

    /// Drop the index for `root`; returns whether one was present
    pub fn discard(&self, root: impl AsRef<Path>) -> bool {
        let key = store_key(root.as_ref());
        self.indexes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&key)
            .is_some()
    }

    /// Roots with a published index, sorted
    #[must_use]
    pub fn roots(&self) -> Vec<PathBuf> {
        let mut roots: Vec<PathBuf> = self
            .indexes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        roots.sort();
        roots
    }
}

/// Canonical form when the root still exists, the path as given otherwise
fn store_key(root: &Path) -> PathBuf {
    canonical_root(root).unwrap_or_else(|_| root.to_path_buf())
}
