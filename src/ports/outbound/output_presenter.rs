use crate::shared::Result;

/// OutputPresenter port for the destination of the formatted document
/// (stdout, a file, ...)
pub trait OutputPresenter {
    /// Writes the formatted document
    ///
    /// # Errors
    /// Returns an error if the destination cannot be written
    fn present(&self, content: &str) -> Result<()>;
}
