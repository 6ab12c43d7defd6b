/// Mock implementations for testing
mod mock_issue_transitioner;
mod mock_progress_reporter;
mod mock_report_source;

pub use mock_issue_transitioner::MockIssueTransitioner;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_report_source::MockReportSource;
