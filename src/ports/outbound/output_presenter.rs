use crate::shared::Result;

/// OutputPresenter port for presenting a rendered document
///
/// Used for machine-readable output (e.g. the JSON findings document),
/// which goes to stdout or to a file.
pub trait OutputPresenter {
    /// Presents the rendered content to the output destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    fn present(&self, content: &str) -> Result<()>;
}
