use crate::dep_analysis::domain::DependencyMap;

/// RequirementsFormatter service for rendering a dependency mapping as
/// pip-style pinned requirement lines.
pub struct RequirementsFormatter;

impl RequirementsFormatter {
    /// Formats each entry as `name==version`, one per line, in mapping
    /// order, joined by newlines without a trailing newline.
    pub fn format(deps: &DependencyMap) -> String {
        deps.iter()
            .map(|(name, version)| format!("{}=={}", name, version))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
