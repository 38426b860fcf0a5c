use depsnap::prelude::*;
use std::collections::HashMap;

/// Mock DependencyGraphProvider serving canned pipdeptree-style forests
#[derive(Default, Clone)]
pub struct MockGraphProvider {
    forests: HashMap<String, Vec<DependencyNode>>,
}

impl MockGraphProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a forest for a package name, built from JSON in the
    /// pipdeptree `--json-tree` shape.
    pub fn with_tree(mut self, package: &str, json: &str) -> Self {
        let forest: Vec<DependencyNode> =
            serde_json::from_str(json).expect("mock forest must be valid JSON");
        self.forests.insert(package.to_string(), forest);
        self
    }
}

impl DependencyGraphProvider for MockGraphProvider {
    fn dependency_tree(&self, package_name: &str) -> Result<Vec<DependencyNode>> {
        // Packages without a registered tree behave like uninstalled ones
        Ok(self.forests.get(package_name).cloned().unwrap_or_default())
    }
}
