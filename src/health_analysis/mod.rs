/// Domain layer - vulnerability matching and health reporting
///
/// Pure logic with no I/O: version parsing and ranges, the immutable corpus
/// snapshot, the analyzer and the report model.
pub mod domain;
pub mod services;
