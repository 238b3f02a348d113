/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (CLI, build
/// integrations) use to drive the analysis core.
pub mod health_analysis_port;

pub use health_analysis_port::HealthAnalysisPort;
