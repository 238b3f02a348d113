use crate::health_analysis::domain::{DependencyCoordinate, HealthReport};

/// HealthAnalysisPort - Inbound port for dependency health analysis
///
/// This is the entry point a build integration calls for each dependency it
/// resolves. It is total: unknown dependencies, blank identities and malformed
/// versions all produce an empty report rather than an error.
pub trait HealthAnalysisPort {
    /// Analyzes one dependency
    ///
    /// # Arguments
    /// * `group` - Dependency group (e.g. `org.example`)
    /// * `name` - Artifact name (e.g. `libfoo`)
    /// * `version` - Resolved version string
    ///
    /// # Returns
    /// A fresh report with every advisory whose package matches exactly and
    /// whose affected range contains `version`, in corpus order
    fn analyze(&self, group: &str, name: &str, version: &str) -> HealthReport;

    /// Analyzes a coordinate value
    fn analyze_coordinate(&self, coordinate: &DependencyCoordinate) -> HealthReport {
        self.analyze(coordinate.group(), coordinate.name(), coordinate.version())
    }
}
