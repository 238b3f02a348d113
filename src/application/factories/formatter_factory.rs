use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// Selects the formatter adapter for the requested output format.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use dep_health::application::dto::OutputFormat;
    /// use dep_health::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use dep_health::application::dto::OutputFormat;
    /// use dep_health::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating JSON health report...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating JSON health report...",
            OutputFormat::Markdown => "📝 Generating Markdown health report...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::HealthResponse;
    use crate::health_analysis::domain::ReportMetadata;

    fn empty_response() -> HealthResponse {
        HealthResponse::new(ReportMetadata::generate(0, 0), vec![])
    }

    #[test]
    fn test_create_json_formatter() {
        let output = FormatterFactory::create(OutputFormat::Json)
            .format(&empty_response())
            .unwrap();
        assert!(output.trim_start().starts_with('{'));
    }

    #[test]
    fn test_create_markdown_formatter() {
        let output = FormatterFactory::create(OutputFormat::Markdown)
            .format(&empty_response())
            .unwrap();
        assert!(output.starts_with("# Dependency Health Report"));
    }

    #[test]
    fn test_progress_message_markdown() {
        let message = FormatterFactory::progress_message(OutputFormat::Markdown);
        assert_eq!(message, "📝 Generating Markdown health report...");
    }
}
