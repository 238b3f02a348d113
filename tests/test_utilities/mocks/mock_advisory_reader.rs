use dep_health::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock AdvisoryReader serving in-memory corpora keyed by path
#[derive(Default)]
pub struct MockAdvisoryReader {
    sources: HashMap<PathBuf, Vec<AdvisoryEntry>>,
}

impl MockAdvisoryReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, path: &str, entries: Vec<AdvisoryEntry>) -> Self {
        self.sources.insert(PathBuf::from(path), entries);
        self
    }
}

impl AdvisoryReader for MockAdvisoryReader {
    fn read_advisories(&self, source: &Path) -> Result<Vec<AdvisoryEntry>> {
        self.sources.get(source).cloned().ok_or_else(|| {
            HealthError::CorpusNotFound {
                path: source.to_path_buf(),
                suggestion: "Register the source on the mock".to_string(),
            }
            .into()
        })
    }
}
