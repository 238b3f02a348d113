/// ProgressReporter port for user-facing progress during corpus loads and
/// batch analysis.
///
/// Implementations write somewhere other than stdout so the report itself
/// stays clean. Diagnostics belong in `tracing`, not here.
pub trait ProgressReporter {
    /// Reports a one-line status message
    fn report(&self, message: &str);

    /// Reports batch progress
    ///
    /// # Arguments
    /// * `current` - Number of coordinates analyzed so far
    /// * `total` - Number of coordinates in the batch
    /// * `message` - Optional detail (e.g. the coordinate being analyzed)
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning that does not stop the run
    fn report_warning(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
