use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pin a Python project's dependencies and check for upstream releases
#[derive(Parser, Debug)]
#[command(name = "depsnap")]
#[command(version)]
#[command(about = "Pin a Python project's actually-used dependencies and check for upstream releases", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan a project folder and write a pinned requirements file
    Pin {
        /// Folder containing the project's Python source files
        folder: PathBuf,

        /// Maximum recursive depth when following a dependency's tree
        #[arg(short = 'd', long)]
        depth_limit: Option<usize>,

        /// Package whose presence in a dependency set collapses that set
        /// down to the importing package itself (repeatable)
        #[arg(long = "ignore-dependency", value_name = "NAME")]
        ignore_dependencies: Vec<String>,

        /// Package removed from the final mapping unconditionally (repeatable)
        #[arg(long = "ignore-library", value_name = "NAME")]
        ignore_libraries: Vec<String>,

        /// Name of the requirements file to write
        #[arg(short = 'f', long = "file")]
        file_name: Option<String>,

        /// Directory the requirements file is written into
        #[arg(short = 'o', long = "output-path")]
        output_path: Option<PathBuf>,

        /// Overwrite an existing requirements file
        #[arg(long)]
        force: bool,

        /// Python interpreter whose environment is inspected
        #[arg(long)]
        python: Option<String>,
    },

    /// Check whether a newer release of a package has been published
    Check {
        /// Name of the package to check
        package: String,

        /// Installed version; read from the local environment when omitted
        #[arg(long = "package-version", value_name = "VERSION")]
        version: Option<String>,

        /// Python interpreter whose environment is inspected
        #[arg(long)]
        python: Option<String>,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Effective settings for the `pin` subcommand after merging CLI arguments
/// with a discovered config file. CLI values win; config fills the gaps;
/// built-in defaults cover the rest.
#[derive(Debug, Clone)]
pub struct PinSettings {
    pub depth_limit: usize,
    pub ignore_dependencies: Vec<String>,
    pub ignore_libraries: Vec<String>,
    pub file_name: String,
    pub output_path: PathBuf,
    pub python: String,
}

impl PinSettings {
    pub const DEFAULT_DEPTH_LIMIT: usize = 1;
    pub const DEFAULT_FILE_NAME: &'static str = "requirements.txt";
    pub const DEFAULT_PYTHON: &'static str = "python3";

    pub fn resolve(
        depth_limit: Option<usize>,
        mut ignore_dependencies: Vec<String>,
        mut ignore_libraries: Vec<String>,
        file_name: Option<String>,
        output_path: Option<PathBuf>,
        python: Option<String>,
        config: Option<&crate::config::ConfigFile>,
    ) -> Self {
        let config_depth = config.and_then(|c| c.depth_limit);
        let config_file_name = config.and_then(|c| c.requirements_file_name.clone());
        let config_output = config.and_then(|c| c.output_path.clone()).map(PathBuf::from);
        let config_python = config.and_then(|c| c.python.clone());

        if let Some(extra) = config.and_then(|c| c.ignore_dependencies.clone()) {
            for name in extra {
                if !ignore_dependencies.contains(&name) {
                    ignore_dependencies.push(name);
                }
            }
        }
        if let Some(extra) = config.and_then(|c| c.ignore_libraries.clone()) {
            for name in extra {
                if !ignore_libraries.contains(&name) {
                    ignore_libraries.push(name);
                }
            }
        }

        Self {
            depth_limit: depth_limit
                .or(config_depth)
                .unwrap_or(Self::DEFAULT_DEPTH_LIMIT),
            ignore_dependencies,
            ignore_libraries,
            file_name: file_name
                .or(config_file_name)
                .unwrap_or_else(|| Self::DEFAULT_FILE_NAME.to_string()),
            output_path: output_path
                .or(config_output)
                .unwrap_or_else(|| PathBuf::from(".")),
            python: python
                .or(config_python)
                .unwrap_or_else(|| Self::DEFAULT_PYTHON.to_string()),
        }
    }
}
