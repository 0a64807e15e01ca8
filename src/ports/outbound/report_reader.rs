use crate::shared::Result;
use std::path::Path;

/// ReportReader port for reading report contents
pub trait ReportReader {
    /// Reads a report file into memory
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or is not a regular file
    /// - The file cannot be read due to permissions or I/O errors
    fn read_report(&self, path: &Path) -> Result<String>;
}
