use crate::explorer::domain::{DependencyReport, ExplorationState, Finding, OPEN_STATUS};
use crate::explorer::policies::NodeFilter;
use crate::explorer::services::{AggregatedTree, Aggregator, PropositionMerger, TreeEnricher};

/// ExplorerSession - the raw snapshots of one project and the state derived from them
///
/// The Proposition is always rebuilt from the snapshots, never patched in
/// place, so a finding list change is reflected everywhere at once.
#[derive(Debug, Default)]
pub struct ExplorerSession {
    reports: Vec<DependencyReport>,
    findings: Vec<Finding>,
    state: ExplorationState,
}

impl ExplorerSession {
    /// A session that has not received its snapshots yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the snapshots and derives the exploration state from them
    pub fn load(&mut self, reports: Vec<DependencyReport>, findings: Vec<Finding>) {
        self.reports = reports;
        self.findings = findings;
        self.rebuild();
    }

    pub fn state(&self) -> &ExplorationState {
        &self.state
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Folds the answer of a status transition into the session
    ///
    /// A finding that came back with a status other than OPEN leaves the
    /// list and the Proposition is rebuilt. Anything else is a rejection:
    /// returns false and the state is left as it was.
    pub fn apply_transition_result(&mut self, updated: Option<Finding>) -> bool {
        let Some(updated) = updated else {
            return false;
        };
        if updated.lifecycle_status().eq_ignore_ascii_case(OPEN_STATUS) {
            return false;
        }

        let before = self.findings.len();
        self.findings.retain(|finding| finding.key != updated.key);
        if self.findings.len() == before {
            return false;
        }

        self.rebuild();
        true
    }

    /// Enriches and aggregates one module
    ///
    /// `None` when the module is unknown (or there is no data);
    /// `Some(None)` when the module is known but its forest is empty.
    pub fn aggregate_module(
        &self,
        module: &str,
        filter: &NodeFilter,
    ) -> Option<Option<AggregatedTree>> {
        let proposition = self.state.proposition()?;
        let roots = proposition.forest(module)?;

        Some(
            TreeEnricher::enrich_forest(proposition.findings(), roots)
                .map(|tree| Aggregator::aggregate_with_filter(&tree, filter)),
        )
    }

    fn rebuild(&mut self) {
        let proposition = PropositionMerger::merge(&self.reports, &self.findings);
        self.state = ExplorationState::from_proposition(proposition);
    }
}
