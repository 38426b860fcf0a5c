/// Details of the latest published release of a package's source repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseInfo {
    /// Web URL of the release notes page
    pub notes_url: String,
    /// Tag name of the release on the repository host, distinct from the
    /// package-index version string
    pub release_tag: String,
}

impl ReleaseInfo {
    pub fn new(notes_url: String, release_tag: String) -> Self {
        Self {
            notes_url,
            release_tag,
        }
    }
}
