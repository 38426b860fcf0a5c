use crate::application::dto::RequirementsRequest;
use crate::application::use_cases::ExtractDependenciesUseCase;
use crate::dep_analysis::domain::DependencyMap;
use crate::dep_analysis::services::RequirementsFormatter;
use crate::ports::outbound::{DependencyGraphProvider, ImportScanner, ManifestWriter, Notifier};
use crate::shared::error::DepsnapError;
use crate::shared::Result;

/// GenerateRequirementsUseCase - Requirements manifest generation
///
/// Thin driver over the extraction use case: validates the project folder,
/// extracts the dependency mapping, formats pinned requirement lines, and
/// persists them through the manifest writer (which enforces the
/// overwrite guard).
///
/// # Type Parameters
/// * `S` - ImportScanner implementation
/// * `G` - DependencyGraphProvider implementation
/// * `N` - Notifier implementation
/// * `W` - ManifestWriter implementation
pub struct GenerateRequirementsUseCase<S, G, N, W> {
    extractor: ExtractDependenciesUseCase<S, G, N>,
    writer: W,
}

impl<S, G, N, W> GenerateRequirementsUseCase<S, G, N, W>
where
    S: ImportScanner,
    G: DependencyGraphProvider,
    N: Notifier,
    W: ManifestWriter,
{
    /// Creates a new GenerateRequirementsUseCase with injected dependencies
    pub fn new(extractor: ExtractDependenciesUseCase<S, G, N>, writer: W) -> Self {
        Self { extractor, writer }
    }

    /// Executes the generation workflow.
    ///
    /// # Returns
    /// The extracted mapping, for callers that want to summarize it.
    ///
    /// # Errors
    /// Fails before anything is written when the project folder does not
    /// exist, and leaves an existing manifest untouched when the writer's
    /// overwrite guard trips.
    pub fn execute(&self, request: &RequirementsRequest) -> Result<DependencyMap> {
        if !request.folder.is_dir() {
            return Err(DepsnapError::ProjectFolderNotFound {
                path: request.folder.clone(),
            }
            .into());
        }

        let project_deps =
            self.extractor
                .execute(&request.folder, request.depth_limit, &request.rules)?;

        let content = RequirementsFormatter::format(&project_deps);
        self.writer.write(&content)?;

        Ok(project_deps)
    }
}
