/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, host API, console).
pub mod formatter;
pub mod issue_transitioner;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_source;

pub use formatter::ExplorerFormatter;
pub use issue_transitioner::IssueTransitioner;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_source::ReportSource;
