use crate::ports::outbound::PackageIndex;
use crate::shared::error::DepsnapError;
use crate::shared::Result;
use indexmap::IndexMap;
use serde::Deserialize;
use std::time::Duration;

/// Repository-host marker searched for inside declared project URLs.
const GITHUB_MARKER: &str = "github.com";

#[derive(Debug, Deserialize)]
struct PyPiPackageInfo {
    info: PyPiInfo,
}

#[derive(Debug, Deserialize)]
struct PyPiInfo {
    /// Declared in document order; the first matching URL wins.
    #[serde(default)]
    project_urls: Option<IndexMap<String, Option<String>>>,
}

/// PyPiClient adapter for package-index metadata lookups
///
/// Implements the PackageIndex port against the PyPI JSON API, narrowed to
/// resolving a package's source-repository slug from its project URLs.
pub struct PyPiClient {
    client: reqwest::blocking::Client,
}

impl PyPiClient {
    /// Creates a new PyPI client with a bounded request timeout
    pub fn new() -> Result<Self> {
        let user_agent = format!("depsnap/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    /// Validates and sanitizes a package name for URL safety
    fn validate_url_component(component: &str) -> Result<()> {
        if component.contains('/') || component.contains('\\') {
            anyhow::bail!("Package name contains path separators which are not allowed");
        }

        if component.contains("..") {
            anyhow::bail!("Package name contains '..' which is not allowed");
        }

        if component.contains('#') || component.contains('?') || component.contains('@') {
            anyhow::bail!("Package name contains URL-unsafe characters");
        }

        Ok(())
    }

    /// Reduces a repository URL to its `owner/repo` slug: the first two
    /// path components after the host marker.
    fn extract_slug(url: &str) -> Option<String> {
        let after_host = url.split(GITHUB_MARKER).nth(1)?;
        let components: Vec<&str> = after_host
            .trim_start_matches('/')
            .split('/')
            .filter(|c| !c.is_empty())
            .take(2)
            .collect();

        if components.len() < 2 {
            return None;
        }
        Some(components.join("/"))
    }

    fn first_repository_slug(info: &PyPiInfo) -> Option<String> {
        let urls = info.project_urls.as_ref()?;
        urls.values()
            .flatten()
            .filter(|url| url.contains(GITHUB_MARKER))
            .find_map(|url| Self::extract_slug(url))
    }
}

impl PackageIndex for PyPiClient {
    fn repository_slug(&self, package_name: &str) -> Result<Option<String>> {
        Self::validate_url_component(package_name)?;

        let encoded_package = urlencoding::encode(package_name);
        let url = format!("https://pypi.org/pypi/{}/json", encoded_package);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| DepsnapError::PackageIndexError {
                package: package_name.to_string(),
                details: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(DepsnapError::PackageIndexError {
                package: package_name.to_string(),
                details: format!("PyPI API returned status code {}", response.status()),
            }
            .into());
        }

        let package_info: PyPiPackageInfo =
            response
                .json()
                .map_err(|e| DepsnapError::PackageIndexError {
                    package: package_name.to_string(),
                    details: format!("Unparseable PyPI response: {}", e),
                })?;

        Ok(Self::first_repository_slug(&package_info.info))
    }
}
