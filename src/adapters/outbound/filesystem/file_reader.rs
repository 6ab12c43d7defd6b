use crate::adapters::outbound::payload;
use crate::explorer::domain::{DependencyReport, Finding};
use crate::ports::outbound::ReportSource;
use crate::shared::error::ExplorerError;
use crate::shared::security::read_report_file;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// File holding the measures payload inside an input directory
pub const MEASURES_FILE: &str = "measure.json";
/// File holding the issues payload inside an input directory
pub const ISSUES_FILE: &str = "issues.json";

/// FileSystemReader adapter reading exported snapshots from a directory
///
/// This adapter implements the ReportSource port for offline use: the
/// measures and issues payloads are read from `measure.json` and
/// `issues.json`. A missing `issues.json` means the project has no findings.
pub struct FileSystemReader {
    input_dir: PathBuf,
}

impl FileSystemReader {
    pub fn new(input_dir: PathBuf) -> Self {
        Self { input_dir }
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }
}

impl ReportSource for FileSystemReader {
    fn read_reports(&self) -> Result<Vec<DependencyReport>> {
        let measures_path = self.input_dir.join(MEASURES_FILE);

        if !measures_path.exists() {
            return Err(ExplorerError::ReportNotFound {
                path: measures_path,
                suggestion: format!(
                    "{} does not exist in \"{}\".\n   \
                     Export the ExplorerReport measure of your project, or read it from the server with --sonar-url.",
                    MEASURES_FILE,
                    self.input_dir.display()
                ),
            }
            .into());
        }

        let content = read_report_file(&measures_path, MEASURES_FILE)?;
        payload::parse_measures(&content).map_err(|e| {
            ExplorerError::ReportParseError {
                path: measures_path,
                details: e.to_string(),
            }
            .into()
        })
    }

    fn read_findings(&self) -> Result<Vec<Finding>> {
        let issues_path = self.input_dir.join(ISSUES_FILE);

        if !issues_path.exists() {
            return Ok(Vec::new());
        }

        let content = read_report_file(&issues_path, ISSUES_FILE)?;
        payload::parse_issues(&content).map_err(|e| {
            ExplorerError::IssuesParseError {
                path: issues_path,
                details: e.to_string(),
            }
            .into()
        })
    }

    fn describe(&self) -> String {
        self.input_dir.display().to_string()
    }
}
