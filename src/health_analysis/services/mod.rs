mod health_analyzer;
mod threshold_policy;
mod version_matcher;

pub use health_analyzer::{analyze_snapshot, HealthAnalyzer};
pub use threshold_policy::{ThresholdConfig, ThresholdEvaluation, ThresholdPolicy};
pub use version_matcher::{MatchOutcome, VersionMatcher};
