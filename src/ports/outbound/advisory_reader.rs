use crate::health_analysis::domain::AdvisoryEntry;
use crate::shared::Result;
use std::path::Path;

/// AdvisoryReader port for acquiring the raw vulnerability corpus
///
/// This port abstracts where advisory entries come from (a local export file,
/// an importer for an external feed, ...). Entries are returned unvalidated;
/// validation is the store's job.
pub trait AdvisoryReader {
    /// Reads all advisory entries from the given source
    ///
    /// # Arguments
    /// * `source` - Path to the corpus
    ///
    /// # Errors
    /// Returns an error if:
    /// - The source does not exist or cannot be read
    /// - The content is not a well-formed list of advisory entries
    fn read_advisories(&self, source: &Path) -> Result<Vec<AdvisoryEntry>>;
}
