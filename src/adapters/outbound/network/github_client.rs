use crate::dep_analysis::domain::ReleaseInfo;
use crate::ports::outbound::ReleaseHost;
use crate::shared::error::DepsnapError;
use crate::shared::Result;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct GitHubRelease {
    html_url: String,
    tag_name: String,
}

/// GitHubClient adapter for repository release lookups
///
/// Implements the ReleaseHost port against the GitHub REST API. A 404 from
/// the releases endpoint (repository gone, or no release ever published)
/// is a tolerated absence; every other failure is a hard error.
pub struct GitHubClient {
    client: reqwest::blocking::Client,
}

impl GitHubClient {
    pub fn new() -> Result<Self> {
        let user_agent = format!("depsnap/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    fn validate_slug(repo_slug: &str) -> Result<()> {
        let components: Vec<&str> = repo_slug.split('/').collect();
        if components.len() != 2 || components.iter().any(|c| c.is_empty()) {
            anyhow::bail!(
                "Invalid repository slug '{}': expected the form owner/repo",
                repo_slug
            );
        }
        if repo_slug.contains("..") {
            anyhow::bail!("Repository slug contains '..' which is not allowed");
        }
        Ok(())
    }
}

impl ReleaseHost for GitHubClient {
    fn latest_release(&self, repo_slug: &str) -> Result<Option<ReleaseInfo>> {
        Self::validate_slug(repo_slug)?;

        let url = format!("https://api.github.com/repos/{}/releases/latest", repo_slug);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .map_err(|e| DepsnapError::ReleaseHostError {
                repo: repo_slug.to_string(),
                details: e.to_string(),
            })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(DepsnapError::ReleaseHostError {
                repo: repo_slug.to_string(),
                details: format!("GitHub API returned status code {}", response.status()),
            }
            .into());
        }

        let release: GitHubRelease =
            response
                .json()
                .map_err(|e| DepsnapError::ReleaseHostError {
                    repo: repo_slug.to_string(),
                    details: format!("Unparseable GitHub response: {}", e),
                })?;

        Ok(Some(ReleaseInfo::new(release.html_url, release.tag_name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_slug_accepts_owner_repo() {
        assert!(GitHubClient::validate_slug("psf/requests").is_ok());
    }

    #[test]
    fn test_validate_slug_rejects_malformed_forms() {
        assert!(GitHubClient::validate_slug("requests").is_err());
        assert!(GitHubClient::validate_slug("a/b/c").is_err());
        assert!(GitHubClient::validate_slug("/repo").is_err());
        assert!(GitHubClient::validate_slug("owner/").is_err());
        assert!(GitHubClient::validate_slug("../etc").is_err());
    }

    #[test]
    fn test_release_payload_deserializes() {
        let json = r#"
        {
            "html_url": "https://github.com/psf/requests/releases/tag/v2.32.0",
            "tag_name": "v2.32.0",
            "name": "v2.32.0",
            "draft": false
        }
        "#;
        let release: GitHubRelease = serde_json::from_str(json).unwrap();
        assert_eq!(release.tag_name, "v2.32.0");
        assert!(release.html_url.ends_with("v2.32.0"));
    }
}
