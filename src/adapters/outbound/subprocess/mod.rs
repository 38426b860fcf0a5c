/// Subprocess adapters - pip and pipdeptree invocations
pub mod pip_metadata;
pub mod pip_probe;
pub mod pipdeptree;

pub use pip_metadata::PipMetadata;
pub use pip_probe::PipVersionProbe;
pub use pipdeptree::PipdeptreeProvider;
