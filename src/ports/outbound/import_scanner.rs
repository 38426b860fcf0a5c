use crate::shared::Result;
use std::path::Path;

/// ImportScanner port for discovering a project's surface-level dependencies
///
/// This port abstracts the static source scan that determines which
/// external package names a project's own code imports directly.
pub trait ImportScanner {
    /// Scans the folder's source files and returns the set of top-level
    /// imported package names, in discovery order.
    ///
    /// # Errors
    /// Returns an error if the folder cannot be traversed or a source file
    /// cannot be read.
    fn surface_imports(&self, folder: &Path) -> Result<Vec<String>>;
}
