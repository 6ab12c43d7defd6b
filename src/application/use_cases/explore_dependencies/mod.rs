use super::ExplorerSession;
use crate::application::dto::{ExploreRequest, ExploreResponse};
use crate::application::read_models::ExplorerReadModelBuilder;
use crate::explorer::domain::{ReportMetadata, TransitionRequest};
use crate::explorer::policies::NodeFilter;
use crate::explorer::services::AggregatedTree;
use crate::ports::outbound::{IssueTransitioner, ProgressReporter, ReportSource};
use crate::shared::Result;

/// ExploreDependenciesUseCase - Core use case for dependency exploration
///
/// Loads the snapshots of a project, applies the requested status
/// transitions, then enriches and aggregates every selected module under
/// the active mode and search.
///
/// # Type Parameters
/// * `RS` - ReportSource implementation
/// * `IT` - IssueTransitioner implementation
/// * `PR` - ProgressReporter implementation
pub struct ExploreDependenciesUseCase<RS, IT, PR> {
    report_source: RS,
    issue_transitioner: IT,
    progress_reporter: PR,
}

impl<RS, IT, PR> ExploreDependenciesUseCase<RS, IT, PR>
where
    RS: ReportSource,
    IT: IssueTransitioner,
    PR: ProgressReporter,
{
    /// Creates a new ExploreDependenciesUseCase with injected dependencies
    pub fn new(report_source: RS, issue_transitioner: IT, progress_reporter: PR) -> Self {
        Self {
            report_source,
            issue_transitioner,
            progress_reporter,
        }
    }

    /// Executes the exploration use case
    pub fn execute(&self, request: ExploreRequest) -> Result<ExploreResponse> {
        // Step 1: Read the snapshots
        self.progress_reporter.report(&format!(
            "📖 Loading dependency reports from: {}",
            self.report_source.describe()
        ));

        let reports = self.report_source.read_reports()?;
        let findings = self.report_source.read_findings()?;

        self.progress_reporter.report(&format!(
            "✅ Loaded {} report(s) and {} finding(s)",
            reports.len(),
            findings.len()
        ));

        let mut session = ExplorerSession::new();
        session.load(reports, findings);

        // Step 2: Apply status transitions in order
        let (transitioned, rejected) = self.apply_transitions(&mut session, &request.transitions)?;

        // Step 3: Build the view of the selected modules
        let filter = NodeFilter::new(request.mode, &request.search);
        let metadata = ReportMetadata::generate_default();

        let Some(proposition) = session.state().proposition() else {
            self.progress_reporter
                .report_error("⚠️  Warning: No dependency report available for this project.");
            let mut response =
                ExploreResponse::new(ExplorerReadModelBuilder::build_no_data(&metadata, &filter));
            response.transitioned = transitioned;
            response.rejected = rejected;
            return Ok(response);
        };

        let selected = self.select_modules(
            proposition.module_names().map(str::to_string).collect(),
            &request.modules,
        );
        let modules = self.aggregate_modules(&session, &selected, &filter);

        let read_model = ExplorerReadModelBuilder::build(
            &metadata,
            &filter,
            modules,
            proposition.findings(),
            &proposition.metadata().open_badges,
        );

        let mut response = ExploreResponse::new(read_model);
        response.transitioned = transitioned;
        response.rejected = rejected;
        Ok(response)
    }

    fn apply_transitions(
        &self,
        session: &mut ExplorerSession,
        transitions: &[TransitionRequest],
    ) -> Result<(Vec<String>, Vec<String>)> {
        let mut transitioned = Vec::new();
        let mut rejected = Vec::new();

        for request in transitions {
            let updated = self
                .issue_transitioner
                .transition(request, session.findings())?;

            if session.apply_transition_result(updated) {
                self.progress_reporter.report(&format!(
                    "✅ Issue {} marked as {}",
                    request.key, request.status
                ));
                transitioned.push(request.key.clone());
            } else {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Transition '{}' of issue '{}' was rejected.",
                    request.status, request.key
                ));
                rejected.push(request.key.clone());
            }
        }

        Ok((transitioned, rejected))
    }

    /// Keeps the requested modules that exist, in the order of `available`
    ///
    /// An empty request selects every module.
    fn select_modules(&self, available: Vec<String>, requested: &[String]) -> Vec<String> {
        if requested.is_empty() {
            return available;
        }

        for name in requested {
            if !available.contains(name) {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Module '{}' is not part of the report.",
                    name
                ));
            }
        }

        available
            .into_iter()
            .filter(|name| requested.contains(name))
            .collect()
    }

    fn aggregate_modules(
        &self,
        session: &ExplorerSession,
        selected: &[String],
        filter: &NodeFilter,
    ) -> Vec<(String, Option<AggregatedTree>)> {
        let total = selected.len();
        let mut modules = Vec::with_capacity(total);

        for (idx, name) in selected.iter().enumerate() {
            self.progress_reporter
                .report_progress(idx + 1, total, Some(name));

            let aggregated = session.aggregate_module(name, filter).flatten();
            if aggregated.is_none() {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Module '{}' has no dependency tree.",
                    name
                ));
            }
            modules.push((name.clone(), aggregated));
        }

        self.progress_reporter
            .report_completion(&format!("✅ Aggregated {} module(s)", total));
        modules
    }
}
