use depsnap::prelude::*;

/// Mock InstalledMetadata with a single known package
#[derive(Default, Clone)]
pub struct MockInstalledMetadata {
    versions: std::collections::HashMap<String, String>,
}

impl MockInstalledMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_installed(mut self, package: &str, version: &str) -> Self {
        self.versions
            .insert(package.to_string(), version.to_string());
        self
    }
}

impl InstalledMetadata for MockInstalledMetadata {
    fn installed_version(&self, package_name: &str) -> Result<String> {
        self.versions.get(package_name).cloned().ok_or_else(|| {
            DepsnapError::PackageNotInstalled {
                name: package_name.to_string(),
                details: "not registered in mock".to_string(),
            }
            .into()
        })
    }
}

/// Mock LatestVersionProvider returning a fixed answer
#[derive(Default, Clone)]
pub struct MockLatestVersionProvider {
    latest: Option<String>,
}

impl MockLatestVersionProvider {
    pub fn reporting(latest: Option<&str>) -> Self {
        Self {
            latest: latest.map(String::from),
        }
    }
}

impl LatestVersionProvider for MockLatestVersionProvider {
    fn latest_version(&self, _package_name: &str) -> Result<Option<String>> {
        Ok(self.latest.clone())
    }
}

/// Mock PackageIndex resolving a fixed repository slug
#[derive(Default, Clone)]
pub struct MockPackageIndex {
    slug: Option<String>,
}

impl MockPackageIndex {
    pub fn resolving(slug: Option<&str>) -> Self {
        Self {
            slug: slug.map(String::from),
        }
    }
}

impl PackageIndex for MockPackageIndex {
    fn repository_slug(&self, _package_name: &str) -> Result<Option<String>> {
        Ok(self.slug.clone())
    }
}

/// Mock ReleaseHost serving a fixed latest release
#[derive(Default, Clone)]
pub struct MockReleaseHost {
    release: Option<ReleaseInfo>,
    fail_hard: bool,
}

impl MockReleaseHost {
    pub fn serving(release: Option<ReleaseInfo>) -> Self {
        Self {
            release,
            fail_hard: false,
        }
    }

    /// A host that fails with a non-404 error, which must propagate.
    pub fn failing() -> Self {
        Self {
            release: None,
            fail_hard: true,
        }
    }
}

impl ReleaseHost for MockReleaseHost {
    fn latest_release(&self, repo_slug: &str) -> Result<Option<ReleaseInfo>> {
        if self.fail_hard {
            return Err(DepsnapError::ReleaseHostError {
                repo: repo_slug.to_string(),
                details: "mock server error".to_string(),
            }
            .into());
        }
        Ok(self.release.clone())
    }
}
