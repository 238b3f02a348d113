use crate::health_analysis::domain::{AdvisoryEntry, CorpusSnapshot};
use crate::ports::outbound::{LoadMode, LoadSummary, VulnerabilityStore};
use crate::shared::Result;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tracing::{info, warn};

/// InMemoryVulnerabilityStore adapter publishing copy-on-write corpus snapshots
///
/// Readers clone the current `Arc<CorpusSnapshot>` under a read lock held only
/// for the clone; lookups then run lock-free on the immutable snapshot.
/// Writers are serialized by a separate mutex, build and validate the next
/// snapshot without touching the published one, and take the write lock only
/// for the pointer swap.
pub struct InMemoryVulnerabilityStore {
    current: RwLock<Arc<CorpusSnapshot>>,
    writer: Mutex<()>,
}

impl InMemoryVulnerabilityStore {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::new(CorpusSnapshot::empty())),
            writer: Mutex::new(()),
        }
    }

    /// Creates a store pre-loaded with `entries`.
    ///
    /// # Errors
    /// Fails with `HealthError::Validation` if any entry is invalid.
    pub fn with_entries(entries: Vec<AdvisoryEntry>) -> Result<Self> {
        let store = Self::new();
        store.load(entries, LoadMode::Replace)?;
        Ok(store)
    }

    fn publish(&self, snapshot: CorpusSnapshot) {
        // The guarded Arc is swapped whole, so a poisoned lock still holds a valid snapshot.
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = Arc::new(snapshot);
    }
}

impl Default for InMemoryVulnerabilityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VulnerabilityStore for InMemoryVulnerabilityStore {
    fn snapshot(&self) -> Arc<CorpusSnapshot> {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&current)
    }

    fn load(&self, entries: Vec<AdvisoryEntry>, mode: LoadMode) -> Result<LoadSummary> {
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);

        let submitted = entries.len();
        let records = CorpusSnapshot::validate(entries).inspect_err(|e| {
            warn!(error = %e, submitted, "rejected corpus load; previous snapshot stays active");
        })?;

        let previous = self.snapshot();
        let generation = previous.generation() + 1;
        let loaded = records.len();
        let next = match mode {
            LoadMode::Replace => CorpusSnapshot::from_records(generation, records),
            LoadMode::Merge => previous.merged_with(generation, records),
        };
        let total = next.len();

        self.publish(next);
        info!(generation, loaded, total, ?mode, "published corpus snapshot");

        Ok(LoadSummary {
            generation,
            loaded,
            total,
        })
    }
}
