//! depsnap - dependency pinning and release checking for Python projects
//!
//! This library inspects a local pip environment and a project's source
//! tree to determine which third-party packages (and their transitive
//! dependencies, up to a depth limit) the project actually uses, compares
//! installed versions against the latest published versions, and can emit
//! a pinned requirements manifest with release-note links for outdated
//! packages.
//!
//! # Architecture
//!
//! The library follows a hexagonal layout:
//!
//! - **Domain Layer** (`dep_analysis`): Pure models and algorithms
//!   (tree flattening, suppression-rule merging, requirements formatting)
//! - **Application Layer** (`application`): Use cases and request DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): pip/pipdeptree subprocesses, PyPI and
//!   GitHub clients, filesystem and console implementations
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use depsnap::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let scanner = SourceImportScanner::new();
//! let graph_provider = PipdeptreeProvider::new("python3");
//! let notifier = ConsoleNotifier::new();
//! let writer = RequirementsFileWriter::new(PathBuf::from("."), "requirements.txt", false);
//!
//! let extractor = ExtractDependenciesUseCase::new(scanner, graph_provider, notifier);
//! let use_case = GenerateRequirementsUseCase::new(extractor, writer);
//!
//! let request = RequirementsRequest::new(PathBuf::from("."), 1, IgnoreRules::default());
//! let deps = use_case.execute(&request)?;
//! eprintln!("Pinned {} packages", deps.len());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod dep_analysis;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::ConsoleNotifier;
    pub use crate::adapters::outbound::filesystem::{RequirementsFileWriter, SourceImportScanner};
    pub use crate::adapters::outbound::network::{GitHubClient, PyPiClient};
    pub use crate::adapters::outbound::subprocess::{
        PipMetadata, PipVersionProbe, PipdeptreeProvider,
    };
    pub use crate::application::dto::{ReleaseCheckRequest, RequirementsRequest};
    pub use crate::application::use_cases::{
        CheckReleaseUseCase, ExtractDependenciesUseCase, GenerateRequirementsUseCase,
    };
    pub use crate::dep_analysis::domain::{
        DependencyMap, DependencyNode, IgnoreRules, PackageName, ReleaseInfo, Version,
    };
    pub use crate::dep_analysis::services::{
        DependencyMerger, RequirementsFormatter, TreeFlattener,
    };
    pub use crate::ports::outbound::{
        is_latest_version, DependencyGraphProvider, ImportScanner, InstalledMetadata,
        LatestVersionProvider, ManifestWriter, Notifier, PackageIndex, ReleaseHost,
    };
    pub use crate::shared::error::{DepsnapError, ExitCode};
    pub use crate::shared::Result;
}
