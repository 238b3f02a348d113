/// Data Transfer Objects for application layer
///
/// DTOs carry requests into the use cases and results out to the
/// formatters, keeping the domain layer isolated.
mod health_request;
mod health_response;
mod output_format;

pub use health_request::HealthRequest;
pub use health_response::{DependencyHealth, HealthResponse};
pub use output_format::OutputFormat;
