/// Ports module defining interfaces for hexagonal architecture
///
/// Inbound ports are what build integrations call into; outbound ports are
/// what the analysis core needs from storage, files and the console.
pub mod inbound;
pub mod outbound;
