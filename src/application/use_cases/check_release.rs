use crate::application::dto::ReleaseCheckRequest;
use crate::ports::outbound::{
    is_latest_version, InstalledMetadata, LatestVersionProvider, Notifier, PackageIndex,
    ReleaseHost,
};
use crate::shared::Result;

/// CheckReleaseUseCase - Upstream release check and upgrade notice
///
/// Determines whether the installed version of a package is the newest one
/// published and, if not, locates the latest release notes and emits a
/// human-readable upgrade notice through the notifier seam.
///
/// # Type Parameters
/// * `M` - InstalledMetadata implementation
/// * `L` - LatestVersionProvider implementation
/// * `I` - PackageIndex implementation
/// * `H` - ReleaseHost implementation
/// * `N` - Notifier implementation
pub struct CheckReleaseUseCase<M, L, I, H, N> {
    installed_metadata: M,
    latest_versions: L,
    package_index: I,
    release_host: H,
    notifier: N,
}

impl<M, L, I, H, N> CheckReleaseUseCase<M, L, I, H, N>
where
    M: InstalledMetadata,
    L: LatestVersionProvider,
    I: PackageIndex,
    H: ReleaseHost,
    N: Notifier,
{
    /// Creates a new CheckReleaseUseCase with injected dependencies
    pub fn new(
        installed_metadata: M,
        latest_versions: L,
        package_index: I,
        release_host: H,
        notifier: N,
    ) -> Self {
        Self {
            installed_metadata,
            latest_versions,
            package_index,
            release_host,
            notifier,
        }
    }

    /// Executes the release check.
    ///
    /// # Returns
    /// `true` iff an upgrade notice was emitted. A newer version without
    /// locatable release notes yields `false`: the check never claims an
    /// upgrade without evidence of a note.
    pub fn execute(&self, request: &ReleaseCheckRequest) -> Result<bool> {
        let version = match &request.version {
            Some(v) => v.clone(),
            None => self.installed_metadata.installed_version(&request.package)?,
        };

        if is_latest_version(&self.latest_versions, &request.package, &version)? {
            return Ok(false);
        }

        let Some(slug) = self.package_index.repository_slug(&request.package)? else {
            return Ok(false);
        };
        let Some(release) = self.release_host.latest_release(&slug)? else {
            return Ok(false);
        };

        let message = format!(
            "Newer version of `{package}` was found available on PyPI ({version} -> {tag})\n\n\
             To upgrade run `pip install {package} -U`\n\n\
             To read the latest release notes go to: {notes}",
            package = request.package,
            version = version,
            tag = release.release_tag,
            notes = release.notes_url,
        );
        self.notifier.notify(&message);

        Ok(true)
    }
}
