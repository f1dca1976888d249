use crate::shared::Result;

/// OutputPresenter port for delivering the rendered diagram
pub trait OutputPresenter {
    /// Presents the rendered diagram to the output destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    fn present(&self, content: &str) -> Result<()>;
}
