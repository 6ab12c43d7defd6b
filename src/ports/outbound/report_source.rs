use crate::explorer::domain::{DependencyReport, Finding};
use crate::shared::Result;

/// ReportSource port for reading analysis snapshots
///
/// This port abstracts where the dependency reports and findings come
/// from (local JSON files, the SonarQube web API, ...). Implementations
/// hand back fully parsed objects; the core never sees raw payloads.
pub trait ReportSource {
    /// Reads the per-module dependency reports ("measures" payload)
    ///
    /// # Returns
    /// Every report found, in payload order. An empty list means the
    /// project was never analysed.
    ///
    /// # Errors
    /// Returns an error if the payload cannot be fetched or parsed
    fn read_reports(&self) -> Result<Vec<DependencyReport>>;

    /// Reads the open findings ("issues" payload)
    ///
    /// # Errors
    /// Returns an error if the payload cannot be fetched or parsed
    fn read_findings(&self) -> Result<Vec<Finding>>;

    /// Human readable origin, used in progress messages
    fn describe(&self) -> String;
}
