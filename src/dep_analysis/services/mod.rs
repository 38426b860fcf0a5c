/// Services layer - Pure algorithms over the domain models
pub mod flattener;
pub mod merger;
pub mod requirements;

pub use flattener::TreeFlattener;
pub use merger::DependencyMerger;
pub use requirements::RequirementsFormatter;
