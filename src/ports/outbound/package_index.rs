use crate::shared::Result;

/// PackageIndex port for package-index metadata lookups
///
/// This port abstracts the index's JSON metadata endpoint (PyPI in the
/// default adapter), narrowed to the single question this crate asks:
/// where does the package's source repository live?
pub trait PackageIndex {
    /// Resolves the `owner/repo` slug of the package's source repository.
    ///
    /// # Returns
    /// The first project URL pointing at the repository host, reduced to
    /// its `owner/repo` path, or `None` when the package declares no such
    /// URL. An absent slug means the release lookup is skipped entirely.
    ///
    /// # Errors
    /// Returns an error if the index cannot be reached or responds with an
    /// unexpected payload.
    fn repository_slug(&self, package_name: &str) -> Result<Option<String>>;
}
