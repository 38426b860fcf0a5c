use crate::dep_analysis::domain::DependencyNode;
use crate::shared::Result;

/// DependencyGraphProvider port for reading the installed package graph
///
/// This port abstracts the external tool that knows every installed
/// package's dependency relationships (pipdeptree in the default adapter).
pub trait DependencyGraphProvider {
    /// Returns the installed dependency tree filtered to the subgraph
    /// reachable from `package_name`.
    ///
    /// # Arguments
    /// * `package_name` - The package whose subtree is requested
    ///
    /// # Returns
    /// The roots of the filtered tree. A package that is not installed
    /// yields an empty forest, not an error.
    ///
    /// # Errors
    /// Returns an error if the external tool cannot be invoked or its
    /// output cannot be parsed.
    fn dependency_tree(&self, package_name: &str) -> Result<Vec<DependencyNode>>;
}
