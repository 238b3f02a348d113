pub mod coordinate;
pub mod corpus_snapshot;
pub mod health_report;
pub mod report_metadata;
pub mod version;
pub mod version_range;
pub mod vulnerability;

pub use coordinate::{parse_coordinate_list, DependencyCoordinate};
pub use corpus_snapshot::CorpusSnapshot;
pub use health_report::{CveFinding, HealthReport};
pub use report_metadata::ReportMetadata;
pub use version::{Version, VersionParseError};
pub use version_range::{Bound, Interval, RangeParseError, VersionRange};
pub use vulnerability::{AdvisoryEntry, CvssScore, Severity, VulnerabilityRecord};
