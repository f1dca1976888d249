mod cli;

use cli::Args;
use pom_graph::config::{discover_config, load_config_from_path, ConfigFile, Settings};
use pom_graph::prelude::*;
use pom_graph::shared::error::ExitCode;
use std::path::Path;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    let args = Args::parse_args();
    let reporter = StderrProgressReporter::new();

    // A missing root descriptor is reported, but is not a failure
    if !args.path.exists() {
        let error = PomGraphError::DescriptorNotFound {
            path: args.path.clone(),
        };
        reporter.report_error(&format!("❌ {}", error));
        return Ok(());
    }

    let config = load_config(&args)?;
    if let Some(config) = config.as_ref() {
        for key in config.unknown_keys() {
            reporter.report_error(&format!(
                "⚠️  Warning: Unknown config field '{}' will be ignored.",
                key
            ));
        }
    }

    let settings = Settings::resolve(
        args.depth,
        args.local_repo.clone(),
        args.strict,
        config.as_ref(),
    );

    let locator_type = LocatorType::from_repository(settings.local_repository.clone());
    let locator = LocatorFactory::create(locator_type.clone())?;
    reporter.report(&LocatorFactory::progress_message(&locator_type));

    let use_case = BuildDependencyGraphUseCase::new(FileSystemReader::new(), locator, &reporter);

    let request = GraphRequest::new(args.path.clone(), settings.max_depth, settings.strict);
    let response = use_case.execute(request)?;

    if response.skipped_dependencies > 0 {
        reporter.report_error(&format!(
            "⚠️  Skipped {} dependency entr(ies) without groupId or artifactId",
            response.skipped_dependencies
        ));
    }

    let diagram = PlantUmlFormatter::new().format(&response.graph)?;
    FileSystemWriter::new(args.output.clone()).present(&diagram)?;

    reporter.report_completion(&format!(
        "✅ Dependency graph saved to file: {}",
        args.output.display()
    ));

    Ok(())
}

/// Explicit `--config` must exist; otherwise look next to the descriptor.
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    if let Some(path) = args.config.as_ref() {
        return load_config_from_path(path).map(Some);
    }

    let dir = args
        .path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    discover_config(dir)
}
