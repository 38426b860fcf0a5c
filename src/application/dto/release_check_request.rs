/// Request parameters for an upstream release check
#[derive(Debug, Clone)]
pub struct ReleaseCheckRequest {
    /// Name of the package to check
    pub package: String,
    /// Installed version; read from the local environment when absent
    pub version: Option<String>,
}

impl ReleaseCheckRequest {
    pub fn new(package: impl Into<String>, version: Option<String>) -> Self {
        Self {
            package: package.into(),
            version,
        }
    }
}
