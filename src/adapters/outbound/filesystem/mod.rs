/// Filesystem adapters - source scanning and manifest writing
pub mod import_scanner;
pub mod requirements_writer;

pub use import_scanner::SourceImportScanner;
pub use requirements_writer::RequirementsFileWriter;
