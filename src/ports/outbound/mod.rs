/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the vulnerability corpus, the file system and the console.
pub mod advisory_reader;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod vulnerability_store;

pub use advisory_reader::AdvisoryReader;
pub use formatter::ReportFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use vulnerability_store::{LoadMode, LoadSummary, VulnerabilityStore};
