/// Suppression rules applied while merging per-package dependency sets.
///
/// The two lists are independent:
/// - `ignore_dependencies`: if any of these names shows up inside a surface
///   package's flattened dependency set, that whole set collapses down to
///   just the surface package itself.
/// - `ignore_libraries`: names removed from the final merged mapping
///   unconditionally, regardless of which surface package introduced them.
#[derive(Debug, Clone, Default)]
pub struct IgnoreRules {
    pub ignore_dependencies: Vec<String>,
    pub ignore_libraries: Vec<String>,
}

impl IgnoreRules {
    pub fn new(ignore_dependencies: Vec<String>, ignore_libraries: Vec<String>) -> Self {
        Self {
            ignore_dependencies,
            ignore_libraries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ignore_dependencies.is_empty() && self.ignore_libraries.is_empty()
    }
}
