use crate::application::dto::HealthResponse;
use crate::shared::Result;

/// ReportFormatter port for rendering analysis results
///
/// Implementations turn a `HealthResponse` into a textual interchange or
/// human-readable format (JSON, Markdown, ...).
pub trait ReportFormatter {
    /// Formats the response
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &HealthResponse) -> Result<String>;
}
