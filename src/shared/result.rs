/// Result alias used by the application, adapter and binary layers.
/// Domain parsing keeps its own typed errors and converts into `anyhow::Error` at the edges.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
