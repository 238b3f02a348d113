use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

/// ReportMetadata value object describing one analysis run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    run_id: String,
    corpus_generation: u64,
    corpus_size: usize,
}

impl ReportMetadata {
    pub fn new(
        timestamp: String,
        tool_name: String,
        tool_version: String,
        run_id: String,
        corpus_generation: u64,
        corpus_size: usize,
    ) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            run_id,
            corpus_generation,
            corpus_size,
        }
    }

    /// Metadata for a run starting now against the given corpus snapshot.
    pub fn generate(corpus_generation: u64, corpus_size: usize) -> Self {
        Self::new(
            Utc::now().to_rfc3339(),
            env!("CARGO_PKG_NAME").to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
            format!("urn:uuid:{}", Uuid::new_v4()),
            corpus_generation,
            corpus_size,
        )
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    pub fn corpus_generation(&self) -> u64 {
        self.corpus_generation
    }

    pub fn corpus_size(&self) -> usize {
        self.corpus_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_metadata() {
        let metadata = ReportMetadata::generate(3, 120);
        assert_eq!(metadata.tool_name(), "dep-health");
        assert_eq!(metadata.tool_version(), env!("CARGO_PKG_VERSION"));
        assert_eq!(metadata.corpus_generation(), 3);
        assert_eq!(metadata.corpus_size(), 120);
        assert!(chrono::DateTime::parse_from_rfc3339(metadata.timestamp()).is_ok());
    }

    #[test]
    fn test_run_id_uuid_format() {
        let metadata = ReportMetadata::generate(0, 0);
        let uuid_part = metadata.run_id().strip_prefix("urn:uuid:").unwrap();
        assert_eq!(uuid_part.len(), 36);
        assert_eq!(uuid_part.matches('-').count(), 4);
    }

    #[test]
    fn test_run_ids_are_unique() {
        let a = ReportMetadata::generate(0, 0);
        let b = ReportMetadata::generate(0, 0);
        assert_ne!(a.run_id(), b.run_id());
    }

    #[test]
    fn test_serializes_camel_case_keys() {
        let value = serde_json::to_value(ReportMetadata::generate(2, 7)).unwrap();
        assert_eq!(value["toolName"], "dep-health");
        assert_eq!(value["corpusGeneration"], 2);
        assert_eq!(value["corpusSize"], 7);
        assert!(value["runId"].as_str().unwrap().starts_with("urn:uuid:"));
        assert!(value.get("tool_name").is_none());
    }
}
