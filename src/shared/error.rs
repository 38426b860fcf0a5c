use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and CI systems to distinguish between
/// different outcomes of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - requirements written, or the installed version is current
    Success = 0,
    /// A newer release was found by the `check` subcommand
    NewerReleaseAvailable = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (subprocess failure, network error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::NewerReleaseAvailable => write!(f, "Newer Release Available (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency extraction and release checks.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum DepsnapError {
    #[error("Project folder not found: {path}\n\n💡 Hint: Pass an existing folder containing the project's Python source files")]
    ProjectFolderNotFound { path: PathBuf },

    #[error("Requirements file already exists: {path}\n\n💡 Hint: Re-run with --force to overwrite it")]
    RequirementsFileExists { path: PathBuf },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Package is not installed: {name}\nDetails: {details}\n\n💡 Hint: Supply --package-version explicitly, or install the package first")]
    PackageNotInstalled { name: String, details: String },

    #[error("Failed to read the installed dependency graph\nDetails: {details}\n\n💡 Hint: Verify that pipdeptree is available in the interpreter environment ({python})")]
    GraphProviderError { python: String, details: String },

    #[error("Package index lookup failed for {package}\nDetails: {details}")]
    PackageIndexError { package: String, details: String },

    #[error("Release lookup failed for repository {repo}\nDetails: {details}")]
    ReleaseHostError { repo: String, details: String },

    #[error("Failed to scan project sources: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the folder is readable")]
    ScanError { path: PathBuf, details: String },
}
