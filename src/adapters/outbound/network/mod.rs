/// Network adapters - PyPI and GitHub API clients
pub mod github_client;
pub mod pypi_client;

pub use github_client::GitHubClient;
pub use pypi_client::PyPiClient;
