use clap::Parser;
use std::path::PathBuf;

use dependency_explorer::application::dto::OutputFormat;
use dependency_explorer::explorer::policies::DisplayMode;

/// Explore the dependency trees of an analysed project
#[derive(Parser, Debug)]
#[command(name = "dep-explorer")]
#[command(version)]
#[command(
    about = "Explore dependency trees annotated with dependency findings",
    long_about = None
)]
pub struct Args {
    /// Directory holding exported measure.json and issues.json (defaults to current directory)
    #[arg(short, long, value_name = "DIR")]
    pub input: Option<PathBuf>,

    /// Base URL of the SonarQube server to query instead of local files
    #[arg(long, value_name = "URL")]
    pub sonar_url: Option<String>,

    /// Project key on the SonarQube server
    #[arg(long, value_name = "KEY")]
    pub project_key: Option<String>,

    /// Branch to read (server mode only)
    #[arg(long)]
    pub branch: Option<String>,

    /// Pull request to read, takes precedence over --branch (server mode only)
    #[arg(long, value_name = "ID")]
    pub pull_request: Option<String>,

    /// Output format: text, markdown or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Which nodes to show: all, global, update, mismatch, unused, transitive, incoherence
    #[arg(short, long)]
    pub mode: Option<DisplayMode>,

    /// Case-insensitive filter on "group:artifact"
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only render this module; can be specified multiple times
    #[arg(long = "module", value_name = "NAME")]
    pub modules: Vec<String>,

    /// Accept the issue with this key before rendering; can be repeated
    #[arg(long = "accept", value_name = "KEY")]
    pub accept: Vec<String>,

    /// Mark the issue with this key as false positive before rendering; can be repeated
    #[arg(long = "false-positive", value_name = "KEY")]
    pub false_positive: Vec<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to a config file (defaults to dep-explorer.config.yml in the input directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Exit with code 1 when the active mode lists any issue
    #[arg(long)]
    pub fail_on_findings: bool,

    /// Disable colors in the text output
    #[arg(long)]
    pub no_color: bool,

    /// Only print warnings and errors on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["dep-explorer"]).unwrap();
        assert!(args.input.is_none());
        assert!(args.format.is_none());
        assert!(args.mode.is_none());
        assert!(args.modules.is_empty());
        assert!(!args.fail_on_findings);
        assert!(!args.quiet);
    }

    #[test]
    fn test_parse_full_command_line() {
        let args = Args::try_parse_from([
            "dep-explorer",
            "-i",
            "reports",
            "-f",
            "md",
            "-m",
            "MISMATCH",
            "-s",
            "jackson",
            "--module",
            "acme:app",
            "--module",
            "acme:lib",
            "--accept",
            "AY-1",
            "--false-positive",
            "AY-2",
            "--fail-on-findings",
            "--no-color",
        ])
        .unwrap();

        assert_eq!(args.input, Some(PathBuf::from("reports")));
        assert_eq!(args.format, Some(OutputFormat::Markdown));
        assert_eq!(args.mode, Some(DisplayMode::Mismatch));
        assert_eq!(args.search.as_deref(), Some("jackson"));
        assert_eq!(args.modules, vec!["acme:app", "acme:lib"]);
        assert_eq!(args.accept, vec!["AY-1"]);
        assert_eq!(args.false_positive, vec!["AY-2"]);
        assert!(args.fail_on_findings);
        assert!(args.no_color);
    }

    #[test]
    fn test_invalid_mode_is_rejected() {
        let result = Args::try_parse_from(["dep-explorer", "--mode", "everything"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        let result = Args::try_parse_from(["dep-explorer", "--format", "cyclonedx"]);
        assert!(result.is_err());
    }
}
