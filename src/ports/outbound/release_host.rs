use crate::dep_analysis::domain::ReleaseInfo;
use crate::shared::Result;

/// ReleaseHost port for querying a repository host's published releases
pub trait ReleaseHost {
    /// Returns the latest published release of `owner/repo`.
    ///
    /// # Returns
    /// `Some(ReleaseInfo)` with the release's web URL and tag name, or
    /// `None` when the host reports the repository or release as not found
    /// (a tolerated outcome, not a fault).
    ///
    /// # Errors
    /// Any failure other than not-found propagates as a hard error; it is
    /// never swallowed into `None`.
    fn latest_release(&self, repo_slug: &str) -> Result<Option<ReleaseInfo>>;
}
