//! dep-health - dependency health analysis against a vulnerability corpus
//!
//! This library answers one question for a build: which known advisories
//! apply to a resolved dependency `group:name:version`? It holds a validated,
//! in-memory vulnerability corpus, matches versions against affected version
//! ranges, and produces per-dependency health reports, following hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`health_analysis`): Versions, ranges, records, reports and the analyzer
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```
//! use dep_health::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let store = InMemoryVulnerabilityStore::with_entries(vec![AdvisoryEntry::new(
//!     "CVE-2020-12345",
//!     "org.example",
//!     "libfoo",
//!     "[1.0.0,1.5.0)",
//!     7.5,
//! )])?;
//! let analyzer = HealthAnalyzer::new(store);
//!
//! let report = analyzer.analyze("org.example", "libfoo", "1.2.0");
//! assert_eq!(report.cves()[0].id(), "CVE-2020-12345");
//! assert!(analyzer.analyze("org.example", "libfoo", "1.6.0").is_empty());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod health_analysis;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::memory::InMemoryVulnerabilityStore;
    pub use crate::application::dto::{
        DependencyHealth, HealthRequest, HealthResponse, OutputFormat,
    };
    pub use crate::application::use_cases::{AnalyzeDependenciesUseCase, LoadCorpusUseCase};
    pub use crate::health_analysis::domain::{
        AdvisoryEntry, CorpusSnapshot, CveFinding, CvssScore, DependencyCoordinate, HealthReport,
        ReportMetadata, Severity, Version, VersionRange, VulnerabilityRecord,
    };
    pub use crate::health_analysis::services::{
        analyze_snapshot, HealthAnalyzer, ThresholdConfig, ThresholdPolicy, VersionMatcher,
    };
    pub use crate::ports::inbound::HealthAnalysisPort;
    pub use crate::ports::outbound::{
        AdvisoryReader, LoadMode, LoadSummary, OutputPresenter, ProgressReporter,
        ReportFormatter, VulnerabilityStore,
    };
    pub use crate::shared::error::{ExitCode, HealthError};
    pub use crate::shared::Result;
}
