use crate::health_analysis::domain::{CveFinding, HealthReport, Severity};
use serde::Serialize;
use std::collections::HashSet;

/// Threshold above which findings fail a run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ThresholdConfig {
    /// Every non-ignored finding counts
    #[default]
    None,
    /// Findings with score >= the given CVSS value count
    Cvss(f64),
    /// Findings whose severity band is >= the given band count
    Severity(Severity),
}

/// Findings of one report split by the threshold.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ThresholdEvaluation {
    pub above_threshold: Vec<CveFinding>,
    pub below_threshold: Vec<CveFinding>,
    pub ignored: Vec<CveFinding>,
}

impl ThresholdEvaluation {
    pub fn has_findings_above_threshold(&self) -> bool {
        !self.above_threshold.is_empty()
    }
}

/// ThresholdPolicy applies a threshold and an ignore list to health reports.
#[derive(Debug, Clone, Default)]
pub struct ThresholdPolicy {
    threshold: ThresholdConfig,
    ignored_ids: HashSet<String>,
}

impl ThresholdPolicy {
    pub fn new(threshold: ThresholdConfig, ignored_ids: impl IntoIterator<Item = String>) -> Self {
        Self {
            threshold,
            ignored_ids: ignored_ids.into_iter().collect(),
        }
    }

    pub fn threshold(&self) -> ThresholdConfig {
        self.threshold
    }

    /// Splits the report's findings; report order is kept within each bucket.
    pub fn evaluate(&self, report: &HealthReport) -> ThresholdEvaluation {
        let mut evaluation = ThresholdEvaluation::default();
        for finding in report.cves() {
            let bucket = if self.ignored_ids.contains(finding.id()) {
                &mut evaluation.ignored
            } else if self.exceeds(finding) {
                &mut evaluation.above_threshold
            } else {
                &mut evaluation.below_threshold
            };
            bucket.push(finding.clone());
        }
        evaluation
    }

    fn exceeds(&self, finding: &CveFinding) -> bool {
        match self.threshold {
            ThresholdConfig::None => true,
            ThresholdConfig::Cvss(min) => finding.score() >= min,
            ThresholdConfig::Severity(min) => finding.severity() >= min,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health_analysis::domain::CvssScore;

    fn report(findings: &[(&str, f64)]) -> HealthReport {
        HealthReport::new(
            findings
                .iter()
                .map(|(id, score)| CveFinding::new(id.to_string(), CvssScore::new(*score).unwrap()))
                .collect(),
        )
    }

    #[test]
    fn test_no_threshold_counts_everything() {
        let policy = ThresholdPolicy::default();
        let evaluation = policy.evaluate(&report(&[("CVE-1", 0.0), ("CVE-2", 9.0)]));
        assert_eq!(evaluation.above_threshold.len(), 2);
        assert!(evaluation.has_findings_above_threshold());
    }

    #[test]
    fn test_cvss_threshold_is_inclusive() {
        let policy = ThresholdPolicy::new(ThresholdConfig::Cvss(7.0), vec![]);
        let evaluation = policy.evaluate(&report(&[("CVE-1", 6.9), ("CVE-2", 7.0)]));
        assert_eq!(evaluation.above_threshold[0].id(), "CVE-2");
        assert_eq!(evaluation.below_threshold[0].id(), "CVE-1");
    }

    #[test]
    fn test_severity_threshold() {
        let policy = ThresholdPolicy::new(ThresholdConfig::Severity(Severity::High), vec![]);
        let evaluation = policy.evaluate(&report(&[
            ("CVE-1", 5.0),
            ("CVE-2", 7.5),
            ("CVE-3", 9.9),
        ]));
        let above: Vec<&str> = evaluation.above_threshold.iter().map(|f| f.id()).collect();
        assert_eq!(above, vec!["CVE-2", "CVE-3"]);
        assert_eq!(evaluation.below_threshold.len(), 1);
    }

    #[test]
    fn test_ignored_ids_never_count() {
        let policy = ThresholdPolicy::new(ThresholdConfig::None, vec!["CVE-2".to_string()]);
        let evaluation = policy.evaluate(&report(&[("CVE-2", 10.0)]));
        assert!(!evaluation.has_findings_above_threshold());
        assert_eq!(evaluation.ignored.len(), 1);
    }

    #[test]
    fn test_empty_report() {
        let policy = ThresholdPolicy::new(ThresholdConfig::Cvss(0.0), vec![]);
        let evaluation = policy.evaluate(&HealthReport::empty());
        assert_eq!(evaluation, ThresholdEvaluation::default());
    }
}
