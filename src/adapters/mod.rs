/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the outbound ports:
/// the in-memory corpus store, file input/output, console progress and
/// report formatters.
pub mod outbound;
