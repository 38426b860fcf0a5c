use crate::dep_analysis::domain::{DependencyNode, PackageName};
use crate::ports::outbound::DependencyGraphProvider;
use crate::shared::error::DepsnapError;
use crate::shared::Result;
use std::process::Command;

/// PipdeptreeProvider adapter for reading the installed package graph
///
/// Invokes `python -m pipdeptree --json-tree --packages <name>` and
/// deserializes its output. pipdeptree already filters the graph down to
/// the subtree reachable from the named package; a package that is not
/// installed produces an empty forest.
pub struct PipdeptreeProvider {
    python: String,
}

impl PipdeptreeProvider {
    /// # Arguments
    /// * `python` - Interpreter binary whose environment is inspected
    pub fn new(python: impl Into<String>) -> Self {
        Self {
            python: python.into(),
        }
    }
}

impl DependencyGraphProvider for PipdeptreeProvider {
    fn dependency_tree(&self, package_name: &str) -> Result<Vec<DependencyNode>> {
        // Validated before splicing into subprocess arguments
        let name = PackageName::new(package_name.to_string())?;

        let output = Command::new(&self.python)
            .args(["-m", "pipdeptree", "--json-tree", "--packages", name.as_str()])
            .output()
            .map_err(|e| DepsnapError::GraphProviderError {
                python: self.python.clone(),
                details: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(DepsnapError::GraphProviderError {
                python: self.python.clone(),
                details: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let forest: Vec<DependencyNode> =
            serde_json::from_str(stdout.trim()).map_err(|e| DepsnapError::GraphProviderError {
                python: self.python.clone(),
                details: format!("Unparseable pipdeptree output: {}", e),
            })?;

        Ok(forest)
    }
}
