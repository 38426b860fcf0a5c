use crate::dep_analysis::domain::{DependencyMap, IgnoreRules};
use crate::dep_analysis::services::{DependencyMerger, TreeFlattener};
use crate::ports::outbound::{DependencyGraphProvider, ImportScanner, Notifier};
use crate::shared::Result;
use std::path::Path;

/// ExtractDependenciesUseCase - Project-wide dependency extraction
///
/// Orchestrates the scan → flatten → merge pipeline: the folder's surface
/// imports are discovered, each one is flattened against the installed
/// graph (self included) up to the depth limit, and the per-package sets
/// are merged in scan order under the suppression rules.
///
/// # Type Parameters
/// * `S` - ImportScanner implementation
/// * `G` - DependencyGraphProvider implementation
/// * `N` - Notifier implementation
pub struct ExtractDependenciesUseCase<S, G, N> {
    scanner: S,
    graph_provider: G,
    notifier: N,
}

impl<S, G, N> ExtractDependenciesUseCase<S, G, N>
where
    S: ImportScanner,
    G: DependencyGraphProvider,
    N: Notifier,
{
    /// Creates a new ExtractDependenciesUseCase with injected dependencies
    pub fn new(scanner: S, graph_provider: G, notifier: N) -> Self {
        Self {
            scanner,
            graph_provider,
            notifier,
        }
    }

    /// Extracts the project's dependency mapping.
    ///
    /// # Arguments
    /// * `folder` - Project folder to scan
    /// * `depth_limit` - Maximum tree depth followed per surface package
    /// * `rules` - Suppression rules applied during the merge
    ///
    /// # Returns
    /// The merged `{package: version}` mapping in merge order.
    pub fn execute(
        &self,
        folder: &Path,
        depth_limit: usize,
        rules: &IgnoreRules,
    ) -> Result<DependencyMap> {
        let surface_deps = self.scanner.surface_imports(folder)?;
        let total = surface_deps.len();

        let mut all_deps = DependencyMap::new();
        for (i, dep) in surface_deps.iter().enumerate() {
            self.notifier.report_progress(i, total, Some(dep));

            let forest = self.graph_provider.dependency_tree(dep)?;
            let library_deps = TreeFlattener::flatten(&forest, dep, depth_limit, true);
            let contribution =
                DependencyMerger::collapse_ignored(dep, library_deps, &rules.ignore_dependencies);
            DependencyMerger::merge(&mut all_deps, contribution);
        }
        self.notifier.report_progress(total, total, None);

        DependencyMerger::drop_ignored_libraries(&mut all_deps, &rules.ignore_libraries);

        Ok(all_deps)
    }
}
