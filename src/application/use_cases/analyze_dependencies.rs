use crate::application::dto::{DependencyHealth, HealthRequest, HealthResponse};
use crate::health_analysis::domain::{ReportMetadata, Version};
use crate::health_analysis::services::{analyze_snapshot, ThresholdPolicy};
use crate::ports::outbound::{ProgressReporter, VulnerabilityStore};
use tracing::info;

/// AnalyzeDependenciesUseCase - Batch health analysis of resolved dependencies
///
/// Takes one corpus snapshot for the whole batch, so every coordinate in a
/// response is matched against the same corpus generation even while the
/// store is being reloaded.
///
/// # Type Parameters
/// * `S` - VulnerabilityStore implementation
/// * `P` - ProgressReporter implementation
pub struct AnalyzeDependenciesUseCase<S, P> {
    store: S,
    progress_reporter: P,
}

impl<S, P> AnalyzeDependenciesUseCase<S, P>
where
    S: VulnerabilityStore,
    P: ProgressReporter,
{
    pub fn new(store: S, progress_reporter: P) -> Self {
        Self {
            store,
            progress_reporter,
        }
    }

    /// Executes the batch analysis
    ///
    /// Never fails: coordinates with malformed versions or no advisories
    /// yield empty reports. Entries keep the order of `request.coordinates`.
    pub fn execute(&self, request: HealthRequest) -> HealthResponse {
        let snapshot = self.store.snapshot();
        let policy = ThresholdPolicy::new(request.threshold, request.ignored_cves);
        let total = request.coordinates.len();

        self.progress_reporter.report(&format!(
            "🔍 Analyzing {} dependenc{} against {} advisories (generation {})",
            total,
            if total == 1 { "y" } else { "ies" },
            snapshot.len(),
            snapshot.generation()
        ));

        let mut dependencies = Vec::with_capacity(total);
        for (index, coordinate) in request.coordinates.into_iter().enumerate() {
            self.progress_reporter
                .report_progress(index + 1, total, Some(&coordinate.to_string()));

            if let Err(e) = Version::parse(coordinate.version()) {
                self.progress_reporter.report_warning(&format!(
                    "{}: unparseable version treated as unaffected ({})",
                    coordinate, e
                ));
            }

            let report = analyze_snapshot(
                &snapshot,
                coordinate.group(),
                coordinate.name(),
                coordinate.version(),
            );
            let evaluation = policy.evaluate(&report);
            dependencies.push(DependencyHealth {
                coordinate,
                report,
                evaluation,
            });
        }

        let metadata = ReportMetadata::generate(snapshot.generation(), snapshot.len());
        let response = HealthResponse::new(metadata, dependencies)
            .with_ignore_reasons(request.ignore_reasons);

        let (findings, affected) = response.summarize();
        info!(
            dependencies = total,
            findings,
            affected,
            generation = snapshot.generation(),
            "batch analysis finished"
        );
        self.progress_reporter.report_completion(&format!(
            "✅ {} finding(s) across {} of {} dependenc{}",
            findings,
            affected,
            total,
            if total == 1 { "y" } else { "ies" }
        ));

        response
    }
}
