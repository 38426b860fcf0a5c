use crate::dep_analysis::domain::PackageName;
use crate::ports::outbound::LatestVersionProvider;
use crate::shared::Result;
use anyhow::Context;
use std::process::Command;

/// Version sentinel that no package publishes, provoking pip into listing
/// every available version in its error output.
const INVALID_VERSION_SENTINEL: &str = "random";

/// Marker clause pip prints ahead of the available-version list.
const VERSIONS_MARKER: &str = "(from versions:";

/// PipVersionProbe adapter for determining a package's newest published
/// version by scraping pip's failed-install diagnostics.
///
/// Asks pip to install `<name>==random`; pip fails and reports
/// `(from versions: v1, v2, ..., vN)`, where the last token is the newest
/// in pip's own ordering. The scrape is a textual contract with pip's
/// error format: when the clause is absent or empty the probe yields
/// `None`, which callers treat as "not latest" rather than a failure.
pub struct PipVersionProbe {
    python: String,
}

impl PipVersionProbe {
    pub fn new(python: impl Into<String>) -> Self {
        Self {
            python: python.into(),
        }
    }

    /// Extracts the last version token from pip's combined output.
    fn parse_latest_version(combined_output: &str) -> Option<String> {
        let start = combined_output.find(VERSIONS_MARKER)? + VERSIONS_MARKER.len();
        let rest = &combined_output[start..];
        let clause = &rest[..rest.find(')')?];

        let latest = clause.split(',').next_back()?.trim().replace(' ', "");
        if latest.is_empty() || latest == "none" {
            return None;
        }
        Some(latest)
    }
}

impl LatestVersionProvider for PipVersionProbe {
    fn latest_version(&self, package_name: &str) -> Result<Option<String>> {
        let name = PackageName::new(package_name.to_string())?;
        let requirement = format!("{}=={}", name.as_str(), INVALID_VERSION_SENTINEL);

        // A non-zero exit is the expected outcome here; only failing to
        // launch the interpreter at all is an error.
        let output = Command::new(&self.python)
            .args(["-m", "pip", "install", &requirement])
            .output()
            .with_context(|| format!("Failed to invoke pip via {}", self.python))?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(Self::parse_latest_version(&combined))
    }
}
