use crate::dep_analysis::domain::{DependencyMap, DependencyNode};

/// TreeFlattener service for collapsing an installed dependency tree into a
/// flat `{package: version}` mapping.
///
/// This service contains pure business logic and works only on domain
/// objects; obtaining the tree itself is the graph provider's job.
pub struct TreeFlattener;

impl TreeFlattener {
    /// Flattens the dependency forest rooted at `package_name` down to a
    /// depth-bounded mapping of package name to installed version.
    ///
    /// # Arguments
    /// * `forest` - Roots of the installed tree, already filtered to the
    ///   subgraph reachable from `package_name`
    /// * `package_name` - The package the forest was filtered for
    /// * `depth_limit` - Maximum tree depth to record; roots are depth 0
    /// * `include_self` - Whether `package_name` itself stays in the result
    ///
    /// # Returns
    /// An insertion-ordered mapping covering every package first reachable
    /// at depth <= `depth_limit`. A package absent from the installed graph
    /// yields an empty mapping, not an error.
    ///
    /// # Semantics
    /// The walk is pre-order and first-wins: once a name is recorded, later
    /// occurrences at any depth are ignored, so results for a fixed forest
    /// are deterministic in the provider's child order. Termination is
    /// guaranteed by the depth counter alone, which increases monotonically
    /// along every descent; no visited set is kept.
    pub fn flatten(
        forest: &[DependencyNode],
        package_name: &str,
        depth_limit: usize,
        include_self: bool,
    ) -> DependencyMap {
        let mut deps = DependencyMap::new();
        for root in forest {
            Self::walk(root, 0, depth_limit, &mut deps);
        }

        if !include_self {
            deps.shift_remove(package_name);
        }

        deps
    }

    fn walk(node: &DependencyNode, depth: usize, depth_limit: usize, deps: &mut DependencyMap) {
        if depth > depth_limit {
            return;
        }

        if !deps.contains_key(&node.package_name) {
            deps.insert(node.package_name.clone(), node.installed_version.clone());
        }

        for child in &node.dependencies {
            Self::walk(child, depth + 1, depth_limit, deps);
        }
    }
}
