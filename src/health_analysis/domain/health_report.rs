use super::vulnerability::{CvssScore, Severity};
use serde::Serialize;

/// A single advisory that applies to the analyzed dependency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CveFinding {
    id: String,
    score: CvssScore,
}

impl CveFinding {
    pub fn new(id: String, score: CvssScore) -> Self {
        Self { id, score }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Severity score in `[0.0, 10.0]`.
    pub fn score(&self) -> f64 {
        self.score.value()
    }

    pub fn severity(&self) -> Severity {
        Severity::from_cvss_score(self.score)
    }
}

/// Result of analyzing one dependency coordinate.
///
/// Findings keep the corpus ingestion order; they are NOT sorted by severity.
/// Consumers that need worst-first ordering call [`HealthReport::worst_first`].
///
/// Serializes as a plain list of `{"id", "score"}` objects.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct HealthReport {
    cves: Vec<CveFinding>,
}

impl HealthReport {
    pub fn new(cves: Vec<CveFinding>) -> Self {
        Self { cves }
    }

    /// Report with no findings.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn cves(&self) -> &[CveFinding] {
        &self.cves
    }

    pub fn is_empty(&self) -> bool {
        self.cves.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cves.len()
    }

    /// Highest score among the findings, if any.
    pub fn max_score(&self) -> Option<f64> {
        self.cves.iter().map(CveFinding::score).reduce(f64::max)
    }

    pub fn max_severity(&self) -> Option<Severity> {
        self.cves.iter().map(CveFinding::severity).max()
    }

    /// Findings sorted by descending score; ties keep report order.
    pub fn worst_first(&self) -> Vec<CveFinding> {
        let mut sorted = self.cves.clone();
        sorted.sort_by(|a, b| b.score().total_cmp(&a.score()));
        sorted
    }
}
