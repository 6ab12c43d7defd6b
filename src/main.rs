mod cli;
mod config;

use cli::Args;
use config::ConfigFile;
use dependency_explorer::adapters::outbound::console::{
    QuietProgressReporter, StderrProgressReporter,
};
use dependency_explorer::adapters::outbound::filesystem::FileSystemReader;
use dependency_explorer::adapters::outbound::memory::InMemoryTransitioner;
use dependency_explorer::adapters::outbound::network::SonarQubeClient;
use dependency_explorer::application::dto::{ExploreRequest, ExploreResponse};
use dependency_explorer::application::factories::{
    FormatterFactory, PresenterFactory, PresenterType,
};
use dependency_explorer::application::use_cases::ExploreDependenciesUseCase;
use dependency_explorer::explorer::domain::{TransitionRequest, TransitionStatus};
use dependency_explorer::ports::outbound::{IssueTransitioner, ReportSource};
use dependency_explorer::shared::error::{ExitCode, ExplorerError};
use dependency_explorer::shared::Result;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

/// Environment variable holding the bearer token for the server API
const TOKEN_ENV: &str = "SONAR_TOKEN";

fn main() {
    match run() {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
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

fn run() -> Result<ExitCode> {
    // Parse command-line arguments (clap exits with code 2 on invalid arguments)
    let args = Args::parse_args();

    let input_dir = args.input.clone().unwrap_or_else(|| PathBuf::from("."));

    // Load config: explicit path, or auto-discovered in the input directory
    let config = match &args.config {
        Some(path) => config::load_config_from_path(path)?,
        None => config::discover_config(&input_dir)?.unwrap_or_default(),
    };

    let settings = Settings::merge(args, config);

    let request = ExploreRequest::new(settings.mode, settings.search.clone())
        .with_modules(settings.modules.clone())
        .with_transitions(settings.transitions.clone());

    // Create adapters (Dependency Injection)
    let response = match &settings.sonar_url {
        Some(url) => {
            let project_key = settings.project_key.as_deref().ok_or_else(|| {
                ExplorerError::Validation {
                    message: "--sonar-url requires --project-key".to_string(),
                }
            })?;
            let client = SonarQubeClient::new(url, project_key)?
                .with_branch(settings.branch.clone())
                .with_pull_request(settings.pull_request.clone())
                .with_token(std::env::var(TOKEN_ENV).ok());
            explore(client.clone(), client, settings.quiet, request)?
        }
        None => {
            validate_input_path(&input_dir)?;
            let reader = FileSystemReader::new(input_dir);
            explore(reader, InMemoryTransitioner::new(), settings.quiet, request)?
        }
    };

    if !settings.quiet {
        eprintln!("{}", FormatterFactory::progress_message(settings.format));
    }

    let colored = !settings.no_color
        && settings.output.is_none()
        && std::io::stdout().is_terminal();
    let formatter = FormatterFactory::create(settings.format, colored);
    let formatted_output = formatter.format(&response.read_model)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(settings.output));
    presenter.present(&formatted_output)?;

    if settings.fail_on_findings && response.has_findings() {
        eprintln!(
            "⚠️  {} issue(s) listed for mode '{}'.",
            response.read_model.issues.len(),
            settings.mode
        );
        return Ok(ExitCode::FindingsDetected);
    }

    Ok(ExitCode::Success)
}

/// Runs the use case with the reporter matching `--quiet`
fn explore<RS, IT>(
    source: RS,
    transitioner: IT,
    quiet: bool,
    request: ExploreRequest,
) -> Result<ExploreResponse>
where
    RS: ReportSource,
    IT: IssueTransitioner,
{
    if quiet {
        ExploreDependenciesUseCase::new(source, transitioner, QuietProgressReporter::new())
            .execute(request)
    } else {
        ExploreDependenciesUseCase::new(source, transitioner, StderrProgressReporter::new())
            .execute(request)
    }
}

/// Effective options after CLI values override config values
#[derive(Debug)]
struct Settings {
    format: dependency_explorer::application::dto::OutputFormat,
    mode: dependency_explorer::explorer::policies::DisplayMode,
    search: String,
    modules: Vec<String>,
    transitions: Vec<TransitionRequest>,
    sonar_url: Option<String>,
    project_key: Option<String>,
    branch: Option<String>,
    pull_request: Option<String>,
    output: Option<PathBuf>,
    fail_on_findings: bool,
    no_color: bool,
    quiet: bool,
}

impl Settings {
    fn merge(args: Args, config: ConfigFile) -> Self {
        let transitions = args
            .accept
            .iter()
            .map(|key| TransitionRequest::new(key.as_str(), TransitionStatus::Accept))
            .chain(
                args.false_positive
                    .iter()
                    .map(|key| TransitionRequest::new(key.as_str(), TransitionStatus::FalsePositive)),
            )
            .collect();

        let modules = if args.modules.is_empty() {
            config.modules.clone().unwrap_or_default()
        } else {
            args.modules
        };

        Self {
            format: args.format.or(config.output_format()).unwrap_or_default(),
            mode: args.mode.or(config.display_mode()).unwrap_or_default(),
            search: args.search.or(config.search).unwrap_or_default(),
            modules,
            transitions,
            sonar_url: args.sonar_url.or(config.sonar_url),
            project_key: args.project_key.or(config.project_key),
            branch: args.branch.or(config.branch),
            pull_request: args.pull_request.or(config.pull_request),
            output: args.output,
            fail_on_findings: args.fail_on_findings || config.fail_on_findings.unwrap_or(false),
            no_color: args.no_color,
            quiet: args.quiet,
        }
    }
}

fn validate_input_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ExplorerError::InvalidInputPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for the input directory
    let metadata = std::fs::symlink_metadata(path).map_err(|e| ExplorerError::InvalidInputPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(ExplorerError::InvalidInputPath {
            path: path.to_path_buf(),
            reason: "Security: Input path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(ExplorerError::InvalidInputPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
