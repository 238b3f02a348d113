use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts where the formatted health report ends up (stdout, file, etc.).
pub trait OutputPresenter {
    /// Presents the formatted report
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails
    fn present(&self, content: &str) -> Result<()>;
}
