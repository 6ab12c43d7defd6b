use super::badge::BadgeCategory;
use super::finding::NormalizedFinding;
use super::raw_artifact::RawArtifact;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Distinct badge categories present across all findings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropositionMetadata {
    pub open_badges: BTreeSet<BadgeCategory>,
}

/// Consolidated view over every module of a project
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Proposition {
    dependencies: BTreeMap<String, Vec<RawArtifact>>,
    findings: Vec<NormalizedFinding>,
    metadata: PropositionMetadata,
}

impl Proposition {
    pub fn new(
        dependencies: BTreeMap<String, Vec<RawArtifact>>,
        findings: Vec<NormalizedFinding>,
        metadata: PropositionMetadata,
    ) -> Self {
        Self {
            dependencies,
            findings,
            metadata,
        }
    }

    pub fn dependencies(&self) -> &BTreeMap<String, Vec<RawArtifact>> {
        &self.dependencies
    }

    /// Forest roots of `module`, if the module is known
    pub fn forest(&self, module: &str) -> Option<&[RawArtifact]> {
        self.dependencies.get(module).map(Vec::as_slice)
    }

    pub fn module_names(&self) -> impl Iterator<Item = &str> {
        self.dependencies.keys().map(String::as_str)
    }

    pub fn findings(&self) -> &[NormalizedFinding] {
        &self.findings
    }

    pub fn metadata(&self) -> &PropositionMetadata {
        &self.metadata
    }

    pub fn has_dependencies(&self) -> bool {
        !self.dependencies.is_empty()
    }
}
