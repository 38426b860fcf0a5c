use depsnap::cli::{Args, Command, PinSettings};
use depsnap::config;
use depsnap::prelude::*;
use std::process;

fn main() {
    let args = Args::parse_args();

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    match args.command {
        Command::Pin {
            folder,
            depth_limit,
            ignore_dependencies,
            ignore_libraries,
            file_name,
            output_path,
            force,
            python,
        } => {
            if !folder.is_dir() {
                return Err(DepsnapError::ProjectFolderNotFound { path: folder }.into());
            }

            let config = config::discover_config(&folder)?;
            let settings = PinSettings::resolve(
                depth_limit,
                ignore_dependencies,
                ignore_libraries,
                file_name,
                output_path,
                python,
                config.as_ref(),
            );

            let scanner = SourceImportScanner::new();
            let graph_provider = PipdeptreeProvider::new(settings.python.clone());
            let notifier = ConsoleNotifier::new();
            let writer = RequirementsFileWriter::new(
                settings.output_path.clone(),
                settings.file_name.clone(),
                force,
            );
            let target = writer.target_path();

            let extractor = ExtractDependenciesUseCase::new(scanner, graph_provider, notifier);
            let use_case = GenerateRequirementsUseCase::new(extractor, writer);

            let request = RequirementsRequest::new(
                folder,
                settings.depth_limit,
                IgnoreRules::new(settings.ignore_dependencies, settings.ignore_libraries),
            );
            let deps = use_case.execute(&request)?;

            ConsoleNotifier::new().report_completion(&format!(
                "✅ Pinned {} packages to {}",
                deps.len(),
                target.display()
            ));

            Ok(ExitCode::Success)
        }

        Command::Check {
            package,
            version,
            python,
        } => {
            let python = python.unwrap_or_else(|| PinSettings::DEFAULT_PYTHON.to_string());

            let use_case = CheckReleaseUseCase::new(
                PipMetadata::new(python.clone()),
                PipVersionProbe::new(python),
                PyPiClient::new()?,
                GitHubClient::new()?,
                ConsoleNotifier::new(),
            );

            let request = ReleaseCheckRequest::new(package, version);
            let newer_found = use_case.execute(&request)?;

            if newer_found {
                Ok(ExitCode::NewerReleaseAvailable)
            } else {
                Ok(ExitCode::Success)
            }
        }
    }
}
