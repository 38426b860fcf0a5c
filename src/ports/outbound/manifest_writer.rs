use crate::shared::Result;

/// ManifestWriter port for persisting the generated requirements manifest
///
/// This port abstracts the output destination. The write is all-or-nothing:
/// implementations refuse to clobber an existing manifest unless explicitly
/// configured to overwrite.
pub trait ManifestWriter {
    /// Writes the formatted manifest content to the destination.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The target file already exists and overwriting was not requested
    /// - The destination directory cannot be created
    /// - The write itself fails
    fn write(&self, content: &str) -> Result<()>;
}
