use crate::health_analysis::domain::DependencyCoordinate;
use crate::health_analysis::services::ThresholdConfig;
use std::collections::BTreeMap;

/// HealthRequest - Request DTO for the batch analysis use case
#[derive(Debug, Clone, Default)]
pub struct HealthRequest {
    /// Dependencies to analyze, in the order they should be reported
    pub coordinates: Vec<DependencyCoordinate>,
    /// Threshold above which findings fail the run
    pub threshold: ThresholdConfig,
    /// Advisory ids excluded from threshold evaluation
    pub ignored_cves: Vec<String>,
    /// Why an advisory is ignored, keyed by advisory id
    pub ignore_reasons: BTreeMap<String, String>,
}

impl HealthRequest {
    pub fn new(
        coordinates: Vec<DependencyCoordinate>,
        threshold: ThresholdConfig,
        ignored_cves: Vec<String>,
    ) -> Self {
        Self {
            coordinates,
            threshold,
            ignored_cves,
            ignore_reasons: BTreeMap::new(),
        }
    }

    pub fn with_ignore_reasons(mut self, ignore_reasons: BTreeMap<String, String>) -> Self {
        self.ignore_reasons = ignore_reasons;
        self
    }
}
