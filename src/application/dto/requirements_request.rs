use crate::dep_analysis::domain::IgnoreRules;
use std::path::PathBuf;

/// Request parameters for project dependency extraction and requirements
/// generation
#[derive(Debug, Clone)]
pub struct RequirementsRequest {
    /// Folder containing the project's Python source files
    pub folder: PathBuf,
    /// Maximum recursive depth when following a dependency's tree
    pub depth_limit: usize,
    /// Suppression rules applied during the merge
    pub rules: IgnoreRules,
}

impl RequirementsRequest {
    pub fn new(folder: PathBuf, depth_limit: usize, rules: IgnoreRules) -> Self {
        Self {
            folder,
            depth_limit,
            rules,
        }
    }
}
