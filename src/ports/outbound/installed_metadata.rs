use crate::shared::Result;

/// InstalledMetadata port for reading a single installed package's metadata
///
/// This port abstracts the local environment's package metadata store
/// (`pip show` in the default adapter).
pub trait InstalledMetadata {
    /// Returns the installed version string of `package_name`.
    ///
    /// # Errors
    /// Returns an error if the package is not installed or the metadata
    /// cannot be read.
    fn installed_version(&self, package_name: &str) -> Result<String>;
}
