use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - report rendered (findings may or may not exist)
    Success = 0,
    /// Findings matching the active mode were detected and `--fail-on-findings` is set
    FindingsDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (host API error, file I/O error, malformed report, etc.)
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
            ExitCode::FindingsDetected => write!(f, "Findings Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency exploration.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping every user-facing failure paired with a hint.
#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("Dependency report not found: {path}\n\n💡 Hint: {suggestion}")]
    ReportNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse dependency report: {path}\nDetails: {details}\n\n💡 Hint: The file must contain the JSON measures payload produced by the dependency analysis")]
    ReportParseError { path: PathBuf, details: String },

    #[error("Failed to parse issues file: {path}\nDetails: {details}\n\n💡 Hint: The file must contain a JSON object with an \"issues\" array")]
    IssuesParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid input path: {path}\nReason: {reason}\n\n💡 Hint: Please specify the directory holding measure.json and issues.json")]
    InvalidInputPath { path: PathBuf, reason: String },

    #[error("Host API request failed: {endpoint}\nDetails: {details}\n\n💡 Hint: Check the server URL, the project key and the SONAR_TOKEN environment variable")]
    HostApiError { endpoint: String, details: String },

    /// Validation error for option and config checks
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
