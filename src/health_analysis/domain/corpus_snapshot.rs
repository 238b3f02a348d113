use super::vulnerability::{AdvisoryEntry, VulnerabilityRecord};
use crate::shared::error::HealthError;
use std::collections::HashMap;

/// Immutable point-in-time view of the vulnerability corpus.
///
/// Records keep their ingestion order. The package index maps
/// group -> name -> record positions so lookups are exact and case-sensitive
/// without allocating.
#[derive(Debug, Default)]
pub struct CorpusSnapshot {
    generation: u64,
    records: Vec<VulnerabilityRecord>,
    index: HashMap<String, HashMap<String, Vec<usize>>>,
}

impl CorpusSnapshot {
    /// The empty generation-0 corpus a store starts with.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a snapshot from already validated records.
    pub fn from_records(generation: u64, records: Vec<VulnerabilityRecord>) -> Self {
        let mut index: HashMap<String, HashMap<String, Vec<usize>>> = HashMap::new();
        for (position, record) in records.iter().enumerate() {
            index
                .entry(record.affected_group().to_string())
                .or_default()
                .entry(record.affected_name().to_string())
                .or_default()
                .push(position);
        }
        Self {
            generation,
            records,
            index,
        }
    }

    /// Validates every entry; fails on the first invalid one without producing
    /// any records.
    pub fn validate(entries: Vec<AdvisoryEntry>) -> Result<Vec<VulnerabilityRecord>, HealthError> {
        entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                let id = entry.id.clone();
                VulnerabilityRecord::try_from_entry(entry)
                    .map_err(|reason| HealthError::Validation { index, id, reason })
            })
            .collect()
    }

    /// New snapshot holding this corpus plus `additions`.
    ///
    /// An addition with the same (id, group, name) as an existing record replaces
    /// it in place; other additions are appended in order.
    pub fn merged_with(&self, generation: u64, additions: Vec<VulnerabilityRecord>) -> Self {
        let mut records = self.records.clone();
        for addition in additions {
            match records.iter_mut().find(|r| r.same_identity(&addition)) {
                Some(existing) => *existing = addition,
                None => records.push(addition),
            }
        }
        Self::from_records(generation, records)
    }

    /// Records for `group`/`name`, in ingestion order. Empty when unknown.
    pub fn lookup<'a>(
        &'a self,
        group: &str,
        name: &str,
    ) -> impl Iterator<Item = &'a VulnerabilityRecord> + 'a {
        self.index
            .get(group)
            .and_then(|names| names.get(name))
            .map(|positions| positions.as_slice())
            .unwrap_or_default()
            .iter()
            .map(move |&position| &self.records[position])
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn records(&self) -> &[VulnerabilityRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct (group, name) packages with at least one record.
    pub fn package_count(&self) -> usize {
        self.index.values().map(|names| names.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, group: &str, name: &str, range: &str, score: f64) -> AdvisoryEntry {
        AdvisoryEntry::new(id, group, name, range, score)
    }

    fn snapshot(entries: Vec<AdvisoryEntry>) -> CorpusSnapshot {
        CorpusSnapshot::from_records(1, CorpusSnapshot::validate(entries).unwrap())
    }

    #[test]
    fn test_lookup_returns_insertion_order() {
        let corpus = snapshot(vec![
            entry("CVE-1", "org.example", "libfoo", "*", 2.0),
            entry("CVE-2", "org.example", "libbar", "*", 3.0),
            entry("CVE-3", "org.example", "libfoo", "*", 9.0),
        ]);
        let ids: Vec<&str> = corpus
            .lookup("org.example", "libfoo")
            .map(|r| r.id())
            .collect();
        assert_eq!(ids, vec!["CVE-1", "CVE-3"]);
    }

    #[test]
    fn test_lookup_is_exact_and_case_sensitive() {
        let corpus = snapshot(vec![entry("CVE-1", "org.example", "libfoo", "*", 2.0)]);
        assert_eq!(corpus.lookup("org.example", "libfoo").count(), 1);
        assert_eq!(corpus.lookup("Org.Example", "libfoo").count(), 0);
        assert_eq!(corpus.lookup("org.example", "LIBFOO").count(), 0);
        assert_eq!(corpus.lookup("org.example", "libfo").count(), 0);
        assert_eq!(corpus.lookup("org", "example.libfoo").count(), 0);
    }

    #[test]
    fn test_lookup_unknown_package_is_empty() {
        let corpus = CorpusSnapshot::empty();
        assert_eq!(corpus.lookup("g", "n").count(), 0);
        assert!(corpus.is_empty());
        assert_eq!(corpus.generation(), 0);
    }

    #[test]
    fn test_validate_is_all_or_nothing() {
        let result = CorpusSnapshot::validate(vec![
            entry("CVE-1", "g", "n", "*", 1.0),
            entry("CVE-2", "g", "n", "*", 42.0),
            entry("CVE-3", "g", "n", "*", 1.0),
        ]);
        match result {
            Err(HealthError::Validation { index, id, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(id, "CVE-2");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_merged_with_replaces_same_identity_in_place() {
        let base = snapshot(vec![
            entry("CVE-1", "g", "n", "*", 1.0),
            entry("CVE-2", "g", "n", "*", 2.0),
        ]);
        let additions = CorpusSnapshot::validate(vec![
            entry("CVE-1", "g", "n", "[1.0,2.0)", 8.0),
            entry("CVE-3", "g", "other", "*", 3.0),
        ])
        .unwrap();

        let merged = base.merged_with(2, additions);
        assert_eq!(merged.generation(), 2);
        assert_eq!(merged.len(), 3);
        let ids: Vec<&str> = merged.records().iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["CVE-1", "CVE-2", "CVE-3"]);
        assert_eq!(merged.records()[0].severity_score().value(), 8.0);
        assert_eq!(merged.package_count(), 2);
        // the source snapshot is untouched
        assert_eq!(base.records()[0].severity_score().value(), 1.0);
    }
}
