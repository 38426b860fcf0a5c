/// Mock implementations for testing
mod mock_graph_provider;
mod mock_import_scanner;
mod mock_notifier;
mod mock_release_sources;

pub use mock_graph_provider::MockGraphProvider;
pub use mock_import_scanner::MockImportScanner;
pub use mock_notifier::MockNotifier;
pub use mock_release_sources::{
    MockInstalledMetadata, MockLatestVersionProvider, MockPackageIndex, MockReleaseHost,
};
