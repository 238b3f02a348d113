use crate::health_analysis::domain::AdvisoryEntry;
use crate::ports::outbound::AdvisoryReader;
use crate::shared::error::HealthError;
use crate::shared::security::read_input_file;
use crate::shared::Result;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Corpus object form: `{"advisories": [...]}`.
#[derive(Deserialize)]
struct WrappedCorpus {
    advisories: Vec<AdvisoryEntry>,
}

/// Top-level shape of a corpus file.
///
/// Detected from the first significant line so each shape is deserialized
/// directly and serde's positional error details reach the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CorpusShape {
    List,
    Wrapped,
}

impl CorpusShape {
    fn detect(content: &str) -> Self {
        let first = content
            .lines()
            .map(str::trim_start)
            .find(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with("---"));
        match first {
            Some(line) if line.starts_with('[') || line.starts_with('-') => CorpusShape::List,
            _ => CorpusShape::Wrapped,
        }
    }
}

/// Serialization format of a corpus file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CorpusFormat {
    Json,
    Yaml,
}

impl CorpusFormat {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml") => {
                CorpusFormat::Yaml
            }
            _ => CorpusFormat::Json,
        }
    }
}

/// FileSystemReader adapter for reading a local corpus export
///
/// A corpus file is either a list of advisory entries or an object with an
/// `advisories` list, in JSON (default) or YAML (`.yml` / `.yaml`):
///
/// ```json
/// [{"id": "CVE-2020-12345", "group": "org.example", "name": "libfoo",
///   "range": "[1.0.0,1.5.0)", "score": 7.5}]
/// ```
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn parse(
        content: &str,
        format: CorpusFormat,
    ) -> std::result::Result<Vec<AdvisoryEntry>, String> {
        match CorpusShape::detect(content) {
            CorpusShape::List => Self::deserialize(content, format),
            CorpusShape::Wrapped => {
                Self::deserialize::<WrappedCorpus>(content, format).map(|doc| doc.advisories)
            }
        }
    }

    fn deserialize<T: DeserializeOwned>(
        content: &str,
        format: CorpusFormat,
    ) -> std::result::Result<T, String> {
        match format {
            CorpusFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            CorpusFormat::Yaml => serde_yaml_ng::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl AdvisoryReader for FileSystemReader {
    fn read_advisories(&self, source: &Path) -> Result<Vec<AdvisoryEntry>> {
        if !source.exists() {
            return Err(HealthError::CorpusNotFound {
                path: source.to_path_buf(),
                suggestion: "Pass an advisory export with --corpus or set `corpus` in \
                             dep-health.config.yml"
                    .to_string(),
            }
            .into());
        }

        let content = read_input_file(source, "corpus")?;
        let format = CorpusFormat::from_path(source);
        let entries = Self::parse(&content, format).map_err(|details| {
            HealthError::CorpusParseError {
                path: source.to_path_buf(),
                details,
            }
        })?;

        debug!(path = %source.display(), ?format, entries = entries.len(), "read corpus file");
        Ok(entries)
    }
}
