use crate::application::dto::{DependencyHealth, HealthResponse};
use crate::health_analysis::domain::{CveFinding, Severity};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for the dependency overview
const TABLE_HEADER: &str = "| Group | Name | Version | Findings | Max Severity |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|-------|------|---------|----------|--------------|\n";

/// Markdown table header for finding rows
const FINDING_TABLE_HEADER: &str = "| Dependency | CVSS | Severity | CVE ID |\n";

/// Markdown table separator line for finding rows
const FINDING_TABLE_SEPARATOR: &str = "|------------|------|----------|--------|\n";

/// Markdown table header for ignored finding rows
const IGNORED_TABLE_HEADER: &str = "| Dependency | CVSS | Severity | CVE ID | Reason |\n";

/// Markdown table separator line for ignored finding rows
const IGNORED_TABLE_SEPARATOR: &str = "|------------|------|----------|--------|--------|\n";

/// MarkdownFormatter adapter for the human-readable health report
///
/// Renders an overview table of every analyzed dependency followed by the
/// findings split into threshold-exceeding, informational and ignored
/// sections, each sorted worst first.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn severity_emoji(severity: Severity) -> &'static str {
        match severity {
            Severity::Critical => "🔴",
            Severity::High => "🟠",
            Severity::Medium => "🟡",
            Severity::Low => "🟢",
            Severity::None => "⚪",
        }
    }

    fn pluralize(count: usize, singular: &'static str, plural: &'static str) -> &'static str {
        if count == 1 {
            singular
        } else {
            plural
        }
    }

    fn render_header(&self, output: &mut String, response: &HealthResponse) {
        let metadata = &response.metadata;
        output.push_str("# Dependency Health Report\n\n");
        output.push_str(&format!(
            "Generated by {} {} at {}  \n",
            metadata.tool_name(),
            metadata.tool_version(),
            metadata.timestamp()
        ));
        output.push_str(&format!(
            "Corpus generation {} ({} {})\n\n",
            metadata.corpus_generation(),
            metadata.corpus_size(),
            Self::pluralize(metadata.corpus_size(), "advisory", "advisories")
        ));
    }

    fn render_dependencies(&self, output: &mut String, dependencies: &[DependencyHealth]) {
        output.push_str("## Dependencies\n\n");
        if dependencies.is_empty() {
            output.push_str("*No dependencies analyzed*\n\n");
            return;
        }

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for dependency in dependencies {
            let max_severity = dependency
                .report
                .max_severity()
                .map_or("-".to_string(), |s| {
                    format!("{} {}", Self::severity_emoji(s), s.as_str())
                });
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(dependency.coordinate.group()),
                Self::escape_markdown_table_cell(dependency.coordinate.name()),
                Self::escape_markdown_table_cell(dependency.coordinate.version()),
                dependency.report.len(),
                max_severity,
            ));
        }
        output.push('\n');
    }

    /// Renders the findings section
    fn render_findings(&self, output: &mut String, response: &HealthResponse) {
        output.push_str("## Vulnerability Report\n\n");

        let (total, affected) = response.summarize();
        self.render_summary(output, total, affected);
        if total == 0 {
            return;
        }

        let actionable = Self::sorted_rows(response, |d| d.evaluation.above_threshold.as_slice());
        let informational =
            Self::sorted_rows(response, |d| d.evaluation.below_threshold.as_slice());
        let ignored = Self::sorted_rows(response, |d| d.evaluation.ignored.as_slice());

        if actionable.is_empty() {
            output.push_str("### ⚠️Warning No vulnerabilities found above threshold.\n\n");
        } else {
            self.render_section(output, "⚠️Warning", &actionable);
        }
        if !informational.is_empty() {
            self.render_section(output, "ℹ️Info", &informational);
        }
        if !ignored.is_empty() {
            self.render_ignored_section(output, response, &ignored);
        }
    }

    /// Pairs each selected finding with its dependency, worst first
    fn sorted_rows<'a>(
        response: &'a HealthResponse,
        select: fn(&DependencyHealth) -> &[CveFinding],
    ) -> Vec<(&'a DependencyHealth, &'a CveFinding)> {
        let mut rows: Vec<(&DependencyHealth, &CveFinding)> = response
            .dependencies
            .iter()
            .flat_map(|d| select(d).iter().map(move |f| (d, f)))
            .collect();
        rows.sort_by(|a, b| b.1.score().total_cmp(&a.1.score()));
        rows
    }

    fn render_summary(&self, output: &mut String, total: usize, affected: usize) {
        output.push_str(&format!(
            "**Found {} {} in {} {}.**\n\n",
            total,
            Self::pluralize(total, "vulnerability", "vulnerabilities"),
            affected,
            Self::pluralize(affected, "dependency", "dependencies"),
        ));
    }

    fn render_section_heading(&self, output: &mut String, title: &str, count: usize) {
        output.push_str(&format!(
            "### {} {} {}\n\n",
            title,
            count,
            Self::pluralize(count, "finding", "findings")
        ));
    }

    fn render_section(
        &self,
        output: &mut String,
        title: &str,
        rows: &[(&DependencyHealth, &CveFinding)],
    ) {
        self.render_section_heading(output, title, rows.len());
        output.push_str(FINDING_TABLE_HEADER);
        output.push_str(FINDING_TABLE_SEPARATOR);
        for (dependency, finding) in rows {
            output.push_str(&Self::finding_cells(dependency, finding));
            output.push('\n');
        }
        output.push('\n');
    }

    /// Ignored findings carry the reason given in the ignore list, if any
    fn render_ignored_section(
        &self,
        output: &mut String,
        response: &HealthResponse,
        rows: &[(&DependencyHealth, &CveFinding)],
    ) {
        self.render_section_heading(output, "🔕Ignored", rows.len());
        output.push_str(IGNORED_TABLE_HEADER);
        output.push_str(IGNORED_TABLE_SEPARATOR);
        for (dependency, finding) in rows {
            let reason = response.ignore_reason(finding.id()).unwrap_or("-");
            output.push_str(&format!(
                "{} {} |\n",
                Self::finding_cells(dependency, finding),
                Self::escape_markdown_table_cell(reason)
            ));
        }
        output.push('\n');
    }

    /// Formats the shared cells of a finding row, without a trailing newline
    fn finding_cells(dependency: &DependencyHealth, finding: &CveFinding) -> String {
        let severity = finding.severity();
        format!(
            "| {} | {:.1} | {} {} | {} |",
            Self::escape_markdown_table_cell(&dependency.coordinate.to_string()),
            finding.score(),
            Self::severity_emoji(severity),
            severity.as_str(),
            Self::escape_markdown_table_cell(finding.id()),
        )
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, response: &HealthResponse) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, response);
        self.render_dependencies(&mut output, &response.dependencies);
        self.render_findings(&mut output, response);

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health_analysis::domain::{
        CvssScore, DependencyCoordinate, HealthReport, ReportMetadata,
    };
    use crate::health_analysis::services::{ThresholdConfig, ThresholdPolicy};

    fn finding(id: &str, score: f64) -> CveFinding {
        CveFinding::new(id.to_string(), CvssScore::new(score).unwrap())
    }

    fn metadata() -> ReportMetadata {
        ReportMetadata::new(
            "2024-01-01T00:00:00Z".to_string(),
            "dep-health".to_string(),
            "0.1.0".to_string(),
            "urn:uuid:00000000-0000-0000-0000-000000000000".to_string(),
            1,
            3,
        )
    }

    fn dependency(
        coordinate: DependencyCoordinate,
        findings: Vec<CveFinding>,
        policy: &ThresholdPolicy,
    ) -> DependencyHealth {
        let report = HealthReport::new(findings);
        DependencyHealth {
            coordinate,
            evaluation: policy.evaluate(&report),
            report,
        }
    }

    fn create_test_response() -> HealthResponse {
        let policy = ThresholdPolicy::new(
            ThresholdConfig::Cvss(7.0),
            vec!["CVE-IGNORED".to_string()],
        );
        HealthResponse::new(
            metadata(),
            vec![
                dependency(
                    DependencyCoordinate::new("org.example", "libfoo", "1.2.0"),
                    vec![finding("CVE-LOW", 3.1), finding("CVE-HIGH", 7.5)],
                    &policy,
                ),
                dependency(
                    DependencyCoordinate::new("com.acme", "widget", "2.0"),
                    vec![finding("CVE-CRIT", 9.8), finding("CVE-IGNORED", 9.9)],
                    &policy,
                ),
                dependency(
                    DependencyCoordinate::new("io.clean", "lib", "1.0"),
                    vec![],
                    &policy,
                ),
            ],
        )
    }

    #[test]
    fn test_escape_markdown_table_cell() {
        assert_eq!(
            MarkdownFormatter::escape_markdown_table_cell("a|b\nc"),
            "a\\|b c"
        );
    }

    #[test]
    fn test_format_header_and_overview() {
        let output = MarkdownFormatter::new().format(&create_test_response()).unwrap();

        assert!(output.starts_with("# Dependency Health Report\n"));
        assert!(output.contains("Corpus generation 1 (3 advisories)"));
        assert!(output.contains(TABLE_HEADER));
        assert!(output.contains("| org.example | libfoo | 1.2.0 | 2 | 🟠 HIGH |"));
        assert!(output.contains("| io.clean | lib | 1.0 | 0 | - |"));
    }

    #[test]
    fn test_format_summary() {
        let output = MarkdownFormatter::new().format(&create_test_response()).unwrap();
        assert!(output.contains("**Found 4 vulnerabilities in 2 dependencies.**"));
    }

    #[test]
    fn test_format_sections_sorted_worst_first() {
        let output = MarkdownFormatter::new().format(&create_test_response()).unwrap();

        let warning = output.find("### ⚠️Warning 2 findings").unwrap();
        let info = output.find("### ℹ️Info 1 finding").unwrap();
        let ignored = output.find("### 🔕Ignored 1 finding").unwrap();
        assert!(warning < info && info < ignored);

        let crit = output
            .find("| com.acme:widget:2.0 | 9.8 | 🔴 CRITICAL | CVE-CRIT |")
            .unwrap();
        let high = output
            .find("| org.example:libfoo:1.2.0 | 7.5 | 🟠 HIGH | CVE-HIGH |")
            .unwrap();
        assert!(crit < high);
        assert!(output.contains("| org.example:libfoo:1.2.0 | 3.1 | 🟢 LOW | CVE-LOW |"));
    }

    #[test]
    fn test_format_ignored_section_shows_reason() {
        let mut reasons = std::collections::BTreeMap::new();
        reasons.insert("CVE-IGNORED".to_string(), "Not reachable | vendored".to_string());
        let response = create_test_response().with_ignore_reasons(reasons);
        let output = MarkdownFormatter::new().format(&response).unwrap();

        assert!(output.contains(IGNORED_TABLE_HEADER));
        assert!(output.contains(
            "| com.acme:widget:2.0 | 9.9 | 🔴 CRITICAL | CVE-IGNORED | Not reachable \\| vendored |"
        ));
    }

    #[test]
    fn test_format_ignored_section_without_reason() {
        let output = MarkdownFormatter::new().format(&create_test_response()).unwrap();
        assert!(output.contains("| com.acme:widget:2.0 | 9.9 | 🔴 CRITICAL | CVE-IGNORED | - |"));
    }

    #[test]
    fn test_format_nothing_above_threshold() {
        let policy = ThresholdPolicy::new(ThresholdConfig::Cvss(9.0), vec![]);
        let response = HealthResponse::new(
            metadata(),
            vec![dependency(
                DependencyCoordinate::new("org.example", "libfoo", "1.2.0"),
                vec![finding("CVE-LOW", 3.1)],
                &policy,
            )],
        );
        let output = MarkdownFormatter::new().format(&response).unwrap();
        assert!(output.contains("### ⚠️Warning No vulnerabilities found above threshold."));
        assert!(output.contains("**Found 1 vulnerability in 1 dependency.**"));
    }

    #[test]
    fn test_format_no_dependencies() {
        let response = HealthResponse::new(metadata(), vec![]);
        let output = MarkdownFormatter::new().format(&response).unwrap();
        assert!(output.contains("*No dependencies analyzed*"));
        assert!(output.contains("**Found 0 vulnerabilities in 0 dependencies.**"));
        assert!(!output.contains("### "));
    }
}
