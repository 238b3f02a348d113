use super::version_range::VersionRange;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// CVSS-style severity score, guaranteed to lie in `[0.0, 10.0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct CvssScore(f64);

impl CvssScore {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 10.0;

    /// Validates and wraps a score. NaN and out-of-range values are rejected.
    pub fn new(score: f64) -> Result<Self, String> {
        if !(Self::MIN..=Self::MAX).contains(&score) {
            return Err(format!(
                "severity score {} is outside [{:.1}, {:.1}]",
                score,
                Self::MIN,
                Self::MAX
            ));
        }
        Ok(Self(score))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for CvssScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Qualitative severity band derived from a CVSS score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// CVSS v3 qualitative rating scale.
    pub fn from_cvss_score(score: CvssScore) -> Self {
        match score.value() {
            s if s >= 9.0 => Severity::Critical,
            s if s >= 7.0 => Severity::High,
            s if s >= 4.0 => Severity::Medium,
            s if s > 0.0 => Severity::Low,
            _ => Severity::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::None => "NONE",
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NONE" => Ok(Severity::None),
            "LOW" => Ok(Severity::Low),
            "MEDIUM" => Ok(Severity::Medium),
            "HIGH" => Ok(Severity::High),
            "CRITICAL" => Ok(Severity::Critical),
            _ => Err(format!(
                "Invalid severity: {}. Expected one of LOW, MEDIUM, HIGH, CRITICAL",
                s
            )),
        }
    }
}

/// An advisory as received from an ingestion source, before validation.
///
/// Field names follow the corpus file format; the camelCase spellings are
/// accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryEntry {
    pub id: String,
    #[serde(alias = "affectedGroup")]
    pub group: String,
    #[serde(alias = "affectedName")]
    pub name: String,
    #[serde(alias = "affectedVersionRange")]
    pub range: String,
    #[serde(alias = "severityScore")]
    pub score: f64,
}

impl AdvisoryEntry {
    pub fn new(id: &str, group: &str, name: &str, range: &str, score: f64) -> Self {
        Self {
            id: id.to_string(),
            group: group.to_string(),
            name: name.to_string(),
            range: range.to_string(),
            score,
        }
    }
}

/// A validated vulnerability record. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct VulnerabilityRecord {
    id: String,
    affected_group: String,
    affected_name: String,
    affected_range: VersionRange,
    severity_score: CvssScore,
}

impl VulnerabilityRecord {
    /// Validates an advisory entry. The error string names the first problem found.
    pub fn try_from_entry(entry: AdvisoryEntry) -> Result<Self, String> {
        if entry.id.trim().is_empty() {
            return Err("advisory id must not be empty".to_string());
        }
        if entry.group.trim().is_empty() || entry.name.trim().is_empty() {
            return Err("affected group and name must not be empty".to_string());
        }
        let severity_score = CvssScore::new(entry.score)?;
        let affected_range = VersionRange::parse(&entry.range)
            .map_err(|e| format!("unparseable affected version range '{}': {}", entry.range, e))?;

        Ok(Self {
            id: entry.id,
            affected_group: entry.group,
            affected_name: entry.name,
            affected_range,
            severity_score,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn affected_group(&self) -> &str {
        &self.affected_group
    }

    pub fn affected_name(&self) -> &str {
        &self.affected_name
    }

    pub fn affected_range(&self) -> &VersionRange {
        &self.affected_range
    }

    pub fn severity_score(&self) -> CvssScore {
        self.severity_score
    }

    /// True when both records describe the same advisory for the same package.
    pub fn same_identity(&self, other: &Self) -> bool {
        self.id == other.id
            && self.affected_group == other.affected_group
            && self.affected_name == other.affected_name
    }
}
