use crate::health_analysis::domain::{DependencyCoordinate, HealthReport, ReportMetadata};
use crate::health_analysis::services::ThresholdEvaluation;
use serde::Serialize;
use std::collections::BTreeMap;

/// Analysis result for one requested coordinate.
#[derive(Debug, Clone, Serialize)]
pub struct DependencyHealth {
    pub coordinate: DependencyCoordinate,
    pub report: HealthReport,
    #[serde(skip)]
    pub evaluation: ThresholdEvaluation,
}

impl DependencyHealth {
    pub fn is_vulnerable(&self) -> bool {
        !self.report.is_empty()
    }
}

/// HealthResponse - Response DTO from the batch analysis use case
///
/// All entries were computed against the same corpus snapshot, identified by
/// `metadata.corpus_generation()`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub metadata: ReportMetadata,
    pub dependencies: Vec<DependencyHealth>,
    /// Whether any non-ignored finding met the threshold.
    /// Used to determine the exit code for CI integration.
    pub has_findings_above_threshold: bool,
    /// Why an advisory is ignored, keyed by advisory id
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub ignore_reasons: BTreeMap<String, String>,
}

impl HealthResponse {
    pub fn new(metadata: ReportMetadata, dependencies: Vec<DependencyHealth>) -> Self {
        let has_findings_above_threshold = dependencies
            .iter()
            .any(|d| d.evaluation.has_findings_above_threshold());
        Self {
            metadata,
            dependencies,
            has_findings_above_threshold,
            ignore_reasons: BTreeMap::new(),
        }
    }

    pub fn with_ignore_reasons(mut self, ignore_reasons: BTreeMap<String, String>) -> Self {
        self.ignore_reasons = ignore_reasons;
        self
    }

    pub fn ignore_reason(&self, id: &str) -> Option<&str> {
        self.ignore_reasons.get(id).map(String::as_str)
    }

    /// Returns (total findings, vulnerable dependency count)
    pub fn summarize(&self) -> (usize, usize) {
        let total = self.dependencies.iter().map(|d| d.report.len()).sum();
        let affected = self.dependencies.iter().filter(|d| d.is_vulnerable()).count();
        (total, affected)
    }
}
