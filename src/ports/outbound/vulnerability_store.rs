use crate::health_analysis::domain::{AdvisoryEntry, CorpusSnapshot, VulnerabilityRecord};
use crate::shared::Result;
use std::sync::Arc;

/// How a `load` combines the incoming batch with the current corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    /// The batch becomes the whole corpus.
    #[default]
    Replace,
    /// The batch is added to the current corpus; records with the same
    /// (id, group, name) are replaced in place.
    Merge,
}

/// Outcome of a successful corpus load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    /// Generation number of the newly published snapshot
    pub generation: u64,
    /// Number of records accepted from the batch
    pub loaded: usize,
    /// Total records in the published snapshot
    pub total: usize,
}

/// VulnerabilityStore port holding the queryable vulnerability corpus
///
/// Readers work against immutable `CorpusSnapshot`s. A `load` validates the whole
/// batch first and then publishes a new snapshot atomically, so a reader sees
/// either the old corpus or the new one and never a mix.
///
/// Implementations must be `Send + Sync`; `analyze` may run on many threads
/// while a single writer reloads.
pub trait VulnerabilityStore: Send + Sync {
    /// Returns the currently published snapshot.
    fn snapshot(&self) -> Arc<CorpusSnapshot>;

    /// Validates and publishes a batch of advisories.
    ///
    /// # Errors
    /// Returns `HealthError::Validation` if any entry has a score outside
    /// `[0.0, 10.0]`, an unparseable range, or a blank identity. Nothing from
    /// the batch is applied and the previous snapshot keeps serving.
    fn load(&self, entries: Vec<AdvisoryEntry>, mode: LoadMode) -> Result<LoadSummary>;

    /// All records whose affected group and name equal the inputs exactly,
    /// in ingestion order. Empty when none exist.
    fn lookup(&self, group: &str, name: &str) -> Vec<VulnerabilityRecord> {
        self.snapshot().lookup(group, name).cloned().collect()
    }
}

impl<S: VulnerabilityStore + ?Sized> VulnerabilityStore for Arc<S> {
    fn snapshot(&self) -> Arc<CorpusSnapshot> {
        (**self).snapshot()
    }

    fn load(&self, entries: Vec<AdvisoryEntry>, mode: LoadMode) -> Result<LoadSummary> {
        (**self).load(entries, mode)
    }

    fn lookup(&self, group: &str, name: &str) -> Vec<VulnerabilityRecord> {
        (**self).lookup(group, name)
    }
}
