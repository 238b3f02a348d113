use crate::health_analysis::domain::{Version, VersionParseError, VersionRange};
use tracing::warn;

/// Outcome of checking a version string against a range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    Matched,
    NotMatched,
    /// The version string could not be parsed; it never matches.
    Unparseable(VersionParseError),
}

/// VersionMatcher decides whether a dependency version is affected by a range.
///
/// Malformed versions are flagged with a warning and treated as "no match";
/// they never abort an analysis.
pub struct VersionMatcher;

impl VersionMatcher {
    /// Classifies `version` against `range`.
    pub fn evaluate(range: &VersionRange, version: &str) -> MatchOutcome {
        match Version::parse(version) {
            Ok(parsed) if range.contains(&parsed) => MatchOutcome::Matched,
            Ok(_) => MatchOutcome::NotMatched,
            Err(e) => MatchOutcome::Unparseable(e),
        }
    }

    /// True only when `version` parses and lies inside `range`.
    pub fn contains(range: &VersionRange, version: &str) -> bool {
        Self::parse_version(version).is_some_and(|parsed| range.contains(&parsed))
    }

    /// Parses a dependency version, flagging malformed input instead of failing.
    ///
    /// Callers matching one version against many ranges parse once with this
    /// and then use `VersionRange::contains`.
    pub fn parse_version(version: &str) -> Option<Version> {
        match Version::parse(version) {
            Ok(parsed) => Some(parsed),
            Err(reason) => {
                warn!(version, %reason, "unparseable version treated as no match");
                None
            }
        }
    }
}
