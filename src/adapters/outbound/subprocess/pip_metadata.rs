use crate::dep_analysis::domain::{PackageName, Version};
use crate::ports::outbound::InstalledMetadata;
use crate::shared::error::DepsnapError;
use crate::shared::Result;
use std::process::Command;

/// PipMetadata adapter for reading a single installed package's version
///
/// Invokes `python -m pip show <name>` and extracts the `Version:` line.
pub struct PipMetadata {
    python: String,
}

impl PipMetadata {
    pub fn new(python: impl Into<String>) -> Self {
        Self {
            python: python.into(),
        }
    }

    fn parse_version_line(stdout: &str) -> Option<String> {
        stdout
            .lines()
            .find_map(|line| line.strip_prefix("Version:"))
            .map(|rest| rest.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// Extracts the `Version:` line and validates it as a package version,
    /// so malformed pip output surfaces as an error instead of flowing on
    /// as an arbitrary string.
    fn version_from_output(name: &PackageName, stdout: &str) -> Result<Version> {
        let raw = Self::parse_version_line(stdout).ok_or_else(|| {
            DepsnapError::PackageNotInstalled {
                name: name.as_str().to_string(),
                details: "pip show output did not contain a Version line".to_string(),
            }
        })?;
        Version::new(raw)
    }
}

impl InstalledMetadata for PipMetadata {
    fn installed_version(&self, package_name: &str) -> Result<String> {
        let name = PackageName::new(package_name.to_string())?;

        let output = Command::new(&self.python)
            .args(["-m", "pip", "show", name.as_str()])
            .output()
            .map_err(|e| DepsnapError::PackageNotInstalled {
                name: name.as_str().to_string(),
                details: format!("Failed to invoke pip: {}", e),
            })?;

        if !output.status.success() {
            return Err(DepsnapError::PackageNotInstalled {
                name: name.as_str().to_string(),
                details: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let version = Self::version_from_output(&name, &stdout)?;
        Ok(version.to_string())
    }
}
