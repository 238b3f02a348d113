use crate::ports::outbound::{
    AdvisoryReader, LoadMode, LoadSummary, ProgressReporter, VulnerabilityStore,
};
use crate::shared::Result;
use std::path::Path;

/// LoadCorpusUseCase - Reads an advisory export and publishes it to the store
///
/// # Type Parameters
/// * `R` - AdvisoryReader implementation
/// * `S` - VulnerabilityStore implementation
/// * `P` - ProgressReporter implementation
pub struct LoadCorpusUseCase<R, S, P> {
    advisory_reader: R,
    store: S,
    progress_reporter: P,
}

impl<R, S, P> LoadCorpusUseCase<R, S, P>
where
    R: AdvisoryReader,
    S: VulnerabilityStore,
    P: ProgressReporter,
{
    pub fn new(advisory_reader: R, store: S, progress_reporter: P) -> Self {
        Self {
            advisory_reader,
            store,
            progress_reporter,
        }
    }

    /// Loads the corpus at `source` into the store
    ///
    /// # Errors
    /// Returns an error if the source cannot be read or any entry is invalid.
    /// On error the store keeps serving its previous snapshot.
    pub fn execute(&self, source: &Path, mode: LoadMode) -> Result<LoadSummary> {
        self.progress_reporter.report(&format!(
            "📖 Loading vulnerability corpus from: {}",
            source.display()
        ));

        let entries = self.advisory_reader.read_advisories(source)?;
        let summary = self.store.load(entries, mode)?;

        self.progress_reporter.report(&format!(
            "✅ Loaded {} advisories ({} in corpus, generation {})",
            summary.loaded, summary.total, summary.generation
        ));
        Ok(summary)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::memory::InMemoryVulnerabilityStore;
    use crate::health_analysis::domain::AdvisoryEntry;
    use crate::shared::error::HealthError;
    use std::path::PathBuf;
    use std::sync::Arc;

    struct StaticReader {
        entries: Vec<AdvisoryEntry>,
    }

    impl AdvisoryReader for StaticReader {
        fn read_advisories(&self, _source: &Path) -> Result<Vec<AdvisoryEntry>> {
            Ok(self.entries.clone())
        }
    }

    struct MissingReader;

    impl AdvisoryReader for MissingReader {
        fn read_advisories(&self, source: &Path) -> Result<Vec<AdvisoryEntry>> {
            Err(HealthError::CorpusNotFound {
                path: source.to_path_buf(),
                suggestion: "test".to_string(),
            }
            .into())
        }
    }

    struct SilentReporter;

    impl ProgressReporter for SilentReporter {
        fn report(&self, _message: &str) {}
        fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
        fn report_warning(&self, _message: &str) {}
        fn report_completion(&self, _message: &str) {}
    }

    #[test]
    fn test_load_publishes_snapshot() {
        let reader = StaticReader {
            entries: vec![AdvisoryEntry::new("CVE-1", "g", "n", "*", 5.0)],
        };
        let use_case =
            LoadCorpusUseCase::new(reader, InMemoryVulnerabilityStore::new(), SilentReporter);

        let summary = use_case
            .execute(&PathBuf::from("corpus.json"), LoadMode::Replace)
            .unwrap();
        assert_eq!(summary.generation, 1);
        assert_eq!(summary.loaded, 1);
        assert_eq!(use_case.store().snapshot().len(), 1);
    }

    #[test]
    fn test_load_shares_store_through_arc() {
        let store = Arc::new(InMemoryVulnerabilityStore::new());
        let reader = StaticReader {
            entries: vec![AdvisoryEntry::new("CVE-1", "g", "n", "*", 5.0)],
        };
        LoadCorpusUseCase::new(reader, Arc::clone(&store), SilentReporter)
            .execute(Path::new("corpus.json"), LoadMode::Merge)
            .unwrap();
        assert_eq!(store.snapshot().generation(), 1);
    }

    #[test]
    fn test_reader_error_leaves_store_untouched() {
        let use_case = LoadCorpusUseCase::new(
            MissingReader,
            InMemoryVulnerabilityStore::new(),
            SilentReporter,
        );
        let err = use_case
            .execute(Path::new("missing.json"), LoadMode::Replace)
            .unwrap_err();
        assert!(err.to_string().contains("not found"));
        assert_eq!(use_case.store().snapshot().generation(), 0);
    }

    #[test]
    fn test_invalid_entry_rejects_whole_batch() {
        let reader = StaticReader {
            entries: vec![
                AdvisoryEntry::new("CVE-1", "g", "n", "*", 5.0),
                AdvisoryEntry::new("CVE-2", "g", "n", "[2.0,1.0]", 5.0),
            ],
        };
        let use_case =
            LoadCorpusUseCase::new(reader, InMemoryVulnerabilityStore::new(), SilentReporter);
        assert!(use_case
            .execute(Path::new("corpus.json"), LoadMode::Replace)
            .is_err());
        assert!(use_case.store().snapshot().is_empty());
    }
}
