use super::version_matcher::VersionMatcher;
use crate::health_analysis::domain::{CorpusSnapshot, CveFinding, HealthReport};
use crate::ports::inbound::HealthAnalysisPort;
use crate::ports::outbound::VulnerabilityStore;
use tracing::debug;

/// HealthAnalyzer matches dependency coordinates against the vulnerability corpus.
///
/// Each call reads exactly one snapshot from the store, so a concurrent reload
/// is either fully visible or not visible at all. The analyzer holds no other
/// state and can be shared across threads.
pub struct HealthAnalyzer<S: VulnerabilityStore> {
    store: S,
}

impl<S: VulnerabilityStore> HealthAnalyzer<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Analyzes one dependency against an explicit snapshot.
///
/// Batch callers take one snapshot up front and pass it here for every
/// coordinate so the whole batch sees the same corpus.
pub fn analyze_snapshot(
    snapshot: &CorpusSnapshot,
    group: &str,
    name: &str,
    version: &str,
) -> HealthReport {
    if group.trim().is_empty() || name.trim().is_empty() {
        return HealthReport::empty();
    }

    let mut candidates = snapshot.lookup(group, name).peekable();
    if candidates.peek().is_none() {
        return HealthReport::empty();
    }

    let Some(parsed) = VersionMatcher::parse_version(version) else {
        return HealthReport::empty();
    };

    let findings: Vec<CveFinding> = candidates
        .filter(|record| record.affected_range().contains(&parsed))
        .map(|record| CveFinding::new(record.id().to_string(), record.severity_score()))
        .collect();

    debug!(
        group,
        name,
        version,
        generation = snapshot.generation(),
        findings = findings.len(),
        "analyzed dependency"
    );

    HealthReport::new(findings)
}

impl<S: VulnerabilityStore> HealthAnalysisPort for HealthAnalyzer<S> {
    fn analyze(&self, group: &str, name: &str, version: &str) -> HealthReport {
        let snapshot = self.store.snapshot();
        analyze_snapshot(&snapshot, group, name, version)
    }
}
