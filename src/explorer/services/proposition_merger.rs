use super::FindingClassifier;
use crate::explorer::domain::{
    DependencyReport, Finding, NormalizedFinding, Proposition, PropositionMetadata,
};
use std::collections::{BTreeMap, BTreeSet};

/// PropositionMerger service consolidating per-module reports into one view
pub struct PropositionMerger;

impl PropositionMerger {
    /// Merges `reports` left to right and normalizes every finding
    ///
    /// Returns `None` when there is no report at all. A later report wins
    /// for a module key already seen.
    pub fn merge(reports: &[DependencyReport], findings: &[Finding]) -> Option<Proposition> {
        if reports.is_empty() {
            return None;
        }

        let mut dependencies = BTreeMap::new();
        for report in reports {
            for (module, roots) in &report.dependencies {
                dependencies.insert(module.clone(), roots.clone());
            }
        }

        let normalized: Vec<NormalizedFinding> =
            findings.iter().map(FindingClassifier::normalize).collect();
        let open_badges: BTreeSet<_> = normalized.iter().filter_map(|f| f.badge).collect();

        Some(Proposition::new(
            dependencies,
            normalized,
            PropositionMetadata { open_badges },
        ))
    }
}
