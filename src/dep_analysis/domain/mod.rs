/// Domain layer - Pure domain models for dependency analysis
///
/// These types carry no I/O; external collaborators produce them and the
/// services layer consumes them.
pub mod dependency_tree;
pub mod ignore_rules;
pub mod package;
pub mod release_info;

pub use dependency_tree::{DependencyMap, DependencyNode};
pub use ignore_rules::IgnoreRules;
pub use package::{PackageName, Version};
pub use release_info::ReleaseInfo;
