/// Mock implementations for testing
mod mock_advisory_reader;
mod mock_progress_reporter;

pub use mock_advisory_reader::MockAdvisoryReader;
pub use mock_progress_reporter::MockProgressReporter;
