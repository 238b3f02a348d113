use crate::application::dto::{DependencyHealth, HealthResponse};
use crate::health_analysis::domain::{CveFinding, HealthReport, ReportMetadata};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Document<'a> {
    metadata: &'a ReportMetadata,
    summary: Summary,
    dependencies: Vec<DependencyEntry<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary {
    dependency_count: usize,
    affected_count: usize,
    finding_count: usize,
    has_findings_above_threshold: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DependencyEntry<'a> {
    group: &'a str,
    name: &'a str,
    version: &'a str,
    cves: &'a HealthReport,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    above_threshold: Vec<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    ignored: Vec<&'a str>,
}

/// JsonFormatter adapter for the machine-readable health report
///
/// Each dependency carries its findings as the plain `[{"id", "score"}]`
/// list in corpus order, plus the ids that met the threshold or were ignored.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn build_entry(dependency: &DependencyHealth) -> DependencyEntry<'_> {
        DependencyEntry {
            group: dependency.coordinate.group(),
            name: dependency.coordinate.name(),
            version: dependency.coordinate.version(),
            cves: &dependency.report,
            above_threshold: finding_ids(&dependency.evaluation.above_threshold),
            ignored: finding_ids(&dependency.evaluation.ignored),
        }
    }
}

fn finding_ids(findings: &[CveFinding]) -> Vec<&str> {
    findings.iter().map(CveFinding::id).collect()
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, response: &HealthResponse) -> Result<String> {
        let (finding_count, affected_count) = response.summarize();
        let document = Document {
            metadata: &response.metadata,
            summary: Summary {
                dependency_count: response.dependencies.len(),
                affected_count,
                finding_count,
                has_findings_above_threshold: response.has_findings_above_threshold,
            },
            dependencies: response.dependencies.iter().map(Self::build_entry).collect(),
        };

        serde_json::to_string_pretty(&document).map_err(Into::into)
    }
}
