/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses to
/// interact with external collaborators (subprocesses, network, file
/// system, console).
pub mod dependency_graph_provider;
pub mod import_scanner;
pub mod installed_metadata;
pub mod latest_version_provider;
pub mod manifest_writer;
pub mod notifier;
pub mod package_index;
pub mod release_host;

pub use dependency_graph_provider::DependencyGraphProvider;
pub use import_scanner::ImportScanner;
pub use installed_metadata::InstalledMetadata;
pub use latest_version_provider::{is_latest_version, LatestVersionProvider};
pub use manifest_writer::ManifestWriter;
pub use notifier::Notifier;
pub use package_index::PackageIndex;
pub use release_host::ReleaseHost;
